// ── Value ─────────────────────────────────────────────────────────────────

/// A literal value in a property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Quoted string: `"255, 10, 20, 30"`
    Str(String),
    /// Numeric literal: `90` or `8.25`
    Number(f64),
    /// Unquoted identifier: enum variants such as `Round` or `DashDot`
    Ident(String),
}

impl Value {
    /// Returns the textual payload of a `Str` or `Ident`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Str(s) | Value::Ident(s) => Some(s.as_str()),
            Value::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

// ── Prop ──────────────────────────────────────────────────────────────────

/// A single `key: value` property inside a node block.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub key: String,
    pub value: Value,
}

// ── Item ──────────────────────────────────────────────────────────────────

/// One entry of a node block. Properties and nested nodes may be mixed
/// freely; their relative order is preserved by the parser and the writer.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Prop(Prop),
    Node(Node),
}

// ── Node ──────────────────────────────────────────────────────────────────

/// A named block in the document tree.
///
/// ```text
/// CornerShape {
///     TopLeft: Round
///     Radius: 10
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Element name: `"AppearanceBorder"`, `"CornerShape"`, `"BackStyle"`.
    pub name: String,
    pub items: Vec<Item>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), items: Vec::new() }
    }

    /// Appends a property. Builder style, used by document writers.
    pub fn with_prop(mut self, key: impl Into<String>, value: Value) -> Self {
        self.items.push(Item::Prop(Prop { key: key.into(), value }));
        self
    }

    /// Appends a nested node.
    pub fn with_child(mut self, child: Node) -> Self {
        self.items.push(Item::Node(child));
        self
    }

    pub fn props(&self) -> impl Iterator<Item = &Prop> {
        self.items.iter().filter_map(|i| match i {
            Item::Prop(p) => Some(p),
            Item::Node(_) => None,
        })
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.items.iter().filter_map(|i| match i {
            Item::Node(n) => Some(n),
            Item::Prop(_) => None,
        })
    }

    /// Look up a property value by key. The first occurrence wins.
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props().find(|p| p.key == key).map(|p| &p.value)
    }

    /// Look up a nested node by name. The first occurrence wins.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children().find(|n| n.name == name)
    }
}

// ── Document ──────────────────────────────────────────────────────────────

/// The top-level parse result for a style document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub root: Node,
}

impl Document {
    pub fn new(root: Node) -> Self {
        Self { root }
    }
}
