//! Typed property access on document nodes.

use std::str::FromStr;

use bezel_doc::{Node, Value};

use crate::paint::Color;

use super::DocError;

fn field(node: &Node, key: &str) -> String {
    format!("{}.{}", node.name, key)
}

fn text<'n>(node: &'n Node, key: &str, expected: &'static str) -> Result<Option<&'n str>, DocError> {
    match node.prop(key) {
        None => Ok(None),
        Some(value) => value
            .as_text()
            .map(Some)
            .ok_or_else(|| DocError::WrongType { field: field(node, key), expected }),
    }
}

fn number(node: &Node, key: &str) -> Result<Option<f64>, DocError> {
    match node.prop(key) {
        None => Ok(None),
        Some(value) => value
            .as_number()
            .map(Some)
            .ok_or_else(|| DocError::WrongType { field: field(node, key), expected: "a number" }),
    }
}

/// Reads a named enum value into `slot`; absent keys leave it untouched.
pub(super) fn read_enum<T: FromStr>(node: &Node, key: &str, slot: &mut T) -> Result<(), DocError> {
    if let Some(s) = text(node, key, "a name")? {
        *slot = s
            .parse()
            .map_err(|_| DocError::InvalidValue { field: field(node, key), value: s.to_string() })?;
    }
    Ok(())
}

/// Reads a color literal into `slot`.
pub(super) fn read_color(node: &Node, key: &str, slot: &mut Color) -> Result<(), DocError> {
    read_enum(node, key, slot)
}

/// Reads an integer that must fit `T`.
pub(super) fn read_int<T: TryFrom<i64>>(node: &Node, key: &str, slot: &mut T) -> Result<(), DocError> {
    if let Some(n) = number(node, key)? {
        let invalid = || DocError::InvalidValue { field: field(node, key), value: n.to_string() };
        if n.fract() != 0.0 || !n.is_finite() {
            return Err(invalid());
        }
        *slot = T::try_from(n as i64).map_err(|_| invalid())?;
    }
    Ok(())
}

pub(super) fn read_f32(node: &Node, key: &str, slot: &mut f32) -> Result<(), DocError> {
    if let Some(n) = number(node, key)? {
        *slot = n as f32;
    }
    Ok(())
}

pub(super) fn read_string(node: &Node, key: &str, slot: &mut String) -> Result<(), DocError> {
    if let Some(s) = text(node, key, "a string")? {
        *slot = s.to_string();
    }
    Ok(())
}

/// Logs properties and children the reader does not know about.
pub(super) fn warn_unknown(node: &Node, known: &[&str]) {
    for prop in node.props().filter(|p| !known.contains(&p.key.as_str())) {
        log::warn!("ignoring unknown property `{}` in `{}`", prop.key, node.name);
    }
    for child in node.children().filter(|c| !known.contains(&c.name.as_str())) {
        log::warn!("ignoring unknown node `{}` in `{}`", child.name, node.name);
    }
}

#[inline]
pub(super) fn ident(s: &str) -> Value {
    Value::Ident(s.to_string())
}

#[inline]
pub(super) fn quoted(s: impl ToString) -> Value {
    Value::Str(s.to_string())
}

#[inline]
pub(super) fn num(n: impl Into<f64>) -> Value {
    Value::Number(n.into())
}
