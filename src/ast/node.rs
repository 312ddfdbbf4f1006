// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadgen Team

//! Call-tree nodes and the composition algebras
//!
//! A [`Node`] is one OpenSCAD call; a [`Bundle`] is a pending chain of nodes
//! whose nesting order is decided only when the chain is resolved. Both are
//! immutable: every composition builds fresh values and leaves its operands
//! untouched.

use crate::ast::Value;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Shr, Sub};

/// A single resolved call: `name(args, k=v, ...)` plus child statements.
///
/// Invariant: `children` only ever holds resolved nodes. Attaching an
/// unresolved chain resolves it first, so a tree is renderable the moment
/// it is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    name: String,
    args: Vec<Value>,
    kwargs: Vec<(String, Value)>,
    children: Vec<Node>,
}

impl Node {
    /// A childless, argumentless call with the given name.
    pub fn call(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            kwargs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append one positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Append a sequence of positional arguments.
    pub fn args(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.args.extend(values);
        self
    }

    /// Append one keyword argument. Insertion order is preserved verbatim
    /// in the rendered call head.
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.kwargs.push((key.into(), value.into()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn positional_args(&self) -> &[Value] {
        &self.args
    }

    pub fn keyword_args(&self) -> &[(String, Value)] {
        &self.kwargs
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// A copy of this node with `child` resolved and appended to its
    /// children. The receiver is left unchanged.
    pub fn child(&self, child: impl Into<Expr>) -> Node {
        let mut node = self.clone();
        node.children.push(child.into().resolve());
        node
    }

    /// Resolution is the identity for a node.
    pub fn resolve(&self) -> Node {
        self.clone()
    }
}

/// An unresolved chain of nodes: member 0 ends up innermost, the last
/// member outermost, once [`Bundle::resolve`] folds the chain.
///
/// Invariant: `members` is non-empty. Bundles are only built by the chain
/// operation, which always contributes at least one member from each side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    members: Vec<Node>,
}

impl Bundle {
    fn from_members(members: Vec<Node>) -> Self {
        debug_assert!(!members.is_empty());
        Self { members }
    }

    /// Chain members, innermost first.
    pub fn members(&self) -> &[Node] {
        &self.members
    }

    /// A copy of this bundle with `child` resolved and prepended, so the
    /// attachment lands at the deepest point of the eventual nesting.
    pub fn child(&self, child: impl Into<Expr>) -> Bundle {
        let mut members = Vec::with_capacity(self.members.len() + 1);
        members.push(child.into().resolve());
        members.extend(self.members.iter().cloned());
        Self::from_members(members)
    }

    /// Collapse the chain into a single node: each member after the first
    /// wraps the accumulated result by appending it to that member's
    /// existing children.
    pub fn resolve(&self) -> Node {
        let mut iter = self.members.iter();
        let mut node = iter
            .next()
            .expect("bundle invariant: members is non-empty")
            .clone();
        for outer in iter {
            node = outer.child(node);
        }
        node
    }
}

/// Either a resolved [`Node`] or a pending [`Bundle`].
///
/// This is the operand type of every composition: anything convertible into
/// an `Expr` can be combined, attached, or chained, and anything else is
/// rejected at compile time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Node(Node),
    Bundle(Bundle),
}

impl Expr {
    /// The canonical node this expression denotes.
    pub fn resolve(&self) -> Node {
        match self {
            Expr::Node(node) => node.resolve(),
            Expr::Bundle(bundle) => bundle.resolve(),
        }
    }

    /// Boolean union: a `union` node with exactly the two resolved operands
    /// as children, in operand order.
    pub fn union(self, other: impl Into<Expr>) -> Node {
        self.combine("union", other.into())
    }

    /// Boolean difference: left minus right.
    pub fn difference(self, other: impl Into<Expr>) -> Node {
        self.combine("difference", other.into())
    }

    /// Boolean intersection.
    pub fn intersection(self, other: impl Into<Expr>) -> Node {
        self.combine("intersection", other.into())
    }

    fn combine(self, name: &str, other: Expr) -> Node {
        let mut node = Node::call(name);
        node.children.push(self.resolve());
        node.children.push(other.resolve());
        node
    }

    /// Chain two expressions into one bundle without resolving either side.
    /// `self` contributes the inner members, `other` the outer ones.
    pub fn chain(self, other: impl Into<Expr>) -> Bundle {
        let mut members = self.into_members();
        members.extend(other.into().into_members());
        Bundle::from_members(members)
    }

    /// Attach a child, dispatching on the variant: nodes gain a child at
    /// their own level, bundles at their innermost point.
    pub fn child(&self, child: impl Into<Expr>) -> Expr {
        match self {
            Expr::Node(node) => Expr::Node(node.child(child)),
            Expr::Bundle(bundle) => Expr::Bundle(bundle.child(child)),
        }
    }

    /// Render this expression to OpenSCAD source, without globals.
    pub fn to_source(&self) -> String {
        crate::io::render(self.clone())
    }

    fn into_members(self) -> Vec<Node> {
        match self {
            Expr::Node(node) => vec![node],
            Expr::Bundle(bundle) => bundle.members,
        }
    }
}

impl From<Node> for Expr {
    fn from(node: Node) -> Self {
        Expr::Node(node)
    }
}

impl From<Bundle> for Expr {
    fn from(bundle: Bundle) -> Self {
        Expr::Bundle(bundle)
    }
}

// Operator sugar over the named combinators: `+` union, `-` difference,
// `*` intersection, `>>` chain (left operand innermost).
macro_rules! impl_expr_ops {
    ($ty:ty) => {
        impl<R: Into<Expr>> Add<R> for $ty {
            type Output = Node;
            fn add(self, rhs: R) -> Node {
                Expr::from(self).union(rhs)
            }
        }

        impl<R: Into<Expr>> Sub<R> for $ty {
            type Output = Node;
            fn sub(self, rhs: R) -> Node {
                Expr::from(self).difference(rhs)
            }
        }

        impl<R: Into<Expr>> Mul<R> for $ty {
            type Output = Node;
            fn mul(self, rhs: R) -> Node {
                Expr::from(self).intersection(rhs)
            }
        }

        impl<R: Into<Expr>> Shr<R> for $ty {
            type Output = Bundle;
            fn shr(self, rhs: R) -> Bundle {
                Expr::from(self).chain(rhs)
            }
        }
    };
}

impl_expr_ops!(Node);
impl_expr_ops!(Bundle);
impl_expr_ops!(Expr);
