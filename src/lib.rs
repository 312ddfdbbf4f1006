// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadgen Team

//! Scadgen
//!
//! A builder DSL for generating OpenSCAD source from Rust. Models are
//! composed as immutable call trees with arithmetic-like operators:
//! `+` union, `-` difference, `*` intersection, and `>>` to chain a shape
//! into a sequence of wrapping transforms. The tree renders to OpenSCAD's
//! concrete textual syntax.
//!
//! ```
//! use scadgen::dsl::*;
//! use scadgen::render;
//!
//! let plate = cube([30, 30, 3]);
//! let hole = cylinder((4.0, 2.0)).kwarg("$fn", 32) >> translate([15.0, 15.0, -0.5]);
//! let bracket = plate - hole;
//!
//! assert!(render(bracket).starts_with("difference() {"));
//! ```

pub mod ast;
pub mod dsl;
pub mod io;

pub use ast::{Bundle, Expr, Node, Value};
pub use io::{export_scad, render, render_with_globals, SourceListing};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::*;

    #[test]
    fn test_basic_cube() {
        assert_eq!(render(cube([10, 10, 10])), "cube([10, 10, 10]);");
    }

    #[test]
    fn test_operator_composition_renders() {
        let model = (cube([10, 10, 10]) - sphere(6.0)) >> up(5.0);
        let out = render(model);
        assert!(out.starts_with("translate([0, 0, 5])"));
        assert!(out.contains("difference() {"));
    }
}
