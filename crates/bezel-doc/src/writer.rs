//! Canonical text output for documents.
//!
//! Output parses back to an equal [`Document`]: one item per line, four
//! space indentation, strings always quoted and escaped.

use std::fmt::{self, Write};

use crate::ast::{Document, Item, Node, Value};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Ident(s) => f.write_str(s),
            Value::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Str(s) => {
                f.write_char('"')?;
                for c in s.chars() {
                    match c {
                        '"'  => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\t' => f.write_str("\\t")?,
                        c    => f.write_char(c)?,
                    }
                }
                f.write_char('"')
            }
        }
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, depth: usize) -> fmt::Result {
    let pad = "    ".repeat(depth);
    if node.items.is_empty() {
        return writeln!(f, "{pad}{} {{ }}", node.name);
    }
    writeln!(f, "{pad}{} {{", node.name)?;
    for item in &node.items {
        match item {
            Item::Prop(p) => writeln!(f, "{pad}    {}: {}", p.key, p.value)?,
            Item::Node(n) => write_node(f, n, depth + 1)?,
        }
    }
    writeln!(f, "{pad}}}")
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, &self.root, 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Document, Node, Value};
    use crate::parse_str;

    #[test]
    fn integral_numbers_have_no_fraction() {
        assert_eq!(Value::Number(90.0).to_string(), "90");
        assert_eq!(Value::Number(-45.0).to_string(), "-45");
        assert_eq!(Value::Number(8.25).to_string(), "8.25");
    }

    #[test]
    fn strings_are_escaped() {
        assert_eq!(Value::Str("a\"b".into()).to_string(), r#""a\"b""#);
    }

    #[test]
    fn nested_layout() {
        let doc = Document::new(
            Node::new("AppearanceBorder")
                .with_prop("BorderLineStyle", Value::Ident("Solid".into()))
                .with_child(Node::new("CornerShape").with_prop("Radius", Value::Number(4.0))),
        );
        assert_eq!(
            doc.to_string(),
            "AppearanceBorder {\n    BorderLineStyle: Solid\n    CornerShape {\n        Radius: 4\n    }\n}\n"
        );
    }

    #[test]
    fn written_text_parses_back() {
        let doc = Document::new(
            Node::new("Item")
                .with_prop("NormalBorder", Value::Str("255, 10, 20, 30".into()))
                .with_child(Node::new("Empty"))
                .with_child(
                    Node::new("BackStyle")
                        .with_prop("BackColor1", Value::Str(String::new()))
                        .with_prop("Gradient", Value::Number(-90.0)),
                )
                .with_prop("Size", Value::Number(8.25)),
        );
        assert_eq!(parse_str(&doc.to_string()).unwrap(), doc);
    }
}
