// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadgen Team

//! OpenSCAD source text renderer
//!
//! A pure function from a resolved tree to concrete OpenSCAD syntax:
//! childless calls terminate with `;`, single-child calls nest without
//! braces, multi-child calls open a braced block, and every nesting level
//! indents by two spaces.

use crate::ast::{Bundle, Expr, Node, Value};
use std::fmt;

const INDENT: &str = "  ";

/// Render an expression to OpenSCAD source, without global assignments.
pub fn render(expr: impl Into<Expr>) -> String {
    render_with_globals(expr, &[])
}

/// Render an expression to OpenSCAD source, prepending one `key=value;`
/// module-level assignment per `globals` entry, in slice order. The
/// assignments appear once, at file scope, never inside nested blocks.
pub fn render_with_globals(expr: impl Into<Expr>, globals: &[(&str, Value)]) -> String {
    let root = expr.into().resolve();
    let body = render_node(&root);
    if globals.is_empty() {
        return body;
    }

    let mut out = String::new();
    for (key, value) in globals {
        out.push_str(key);
        out.push('=');
        out.push_str(&value.to_string());
        out.push_str(";\n");
    }
    out.push_str(&body);
    out
}

fn render_node(node: &Node) -> String {
    let head = render_head(node);
    match node.children() {
        [] => format!("{};", head),
        [only] => format!("{}\n{}", head, indent(&render_node(only))),
        children => {
            let mut out = head;
            out.push_str(" {");
            for child in children {
                out.push('\n');
                out.push_str(&indent(&render_node(child)));
            }
            out.push_str("\n}");
            out
        }
    }
}

/// `name(p0, p1, ..., k0=v0, ...)` — positional arguments first, then
/// keyword arguments in insertion order.
fn render_head(node: &Node) -> String {
    let mut parts: Vec<String> = node
        .positional_args()
        .iter()
        .map(Value::to_string)
        .collect();
    parts.extend(
        node.keyword_args()
            .iter()
            .map(|(key, value)| format!("{}={}", key, value)),
    );
    format!("{}({})", node.name(), parts.join(", "))
}

/// Prefix every line of an already-rendered block with one indent unit.
fn indent(block: &str) -> String {
    block
        .lines()
        .map(|line| format!("{}{}", INDENT, line))
        .collect::<Vec<_>>()
        .join("\n")
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_node(self))
    }
}

impl fmt::Display for Bundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_node(&self.resolve()))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_node(&self.resolve()))
    }
}
