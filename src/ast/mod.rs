// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadgen Team

//! Abstract syntax tree module
//!
//! Defines the immutable call tree for OpenSCAD statements and the
//! composition algebras that build it.

mod node;
mod value;

pub use node::{Bundle, Expr, Node};
pub use value::Value;
