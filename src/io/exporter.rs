// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadgen Team

//! SCAD file exporter

use crate::ast::{Expr, Value};
use crate::io::render_with_globals;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// A block of generator source to embed as a comment header, so a generated
/// `.scad` file carries the program that produced it. Callers supply the
/// text themselves (for example via `include_str!`).
#[derive(Debug, Clone, Copy)]
pub struct SourceListing<'a> {
    /// Name shown in the header, typically the generator's file path.
    pub label: &'a str,
    /// The generator source, embedded line by line as `//` comments.
    pub text: &'a str,
}

/// Render an expression and write it to `path` as an OpenSCAD file.
///
/// When `source` is given, the file starts with a comment header naming the
/// generator and inlining its source, followed by a blank line and the
/// rendered text. The rendered text always ends with a newline.
pub fn export_scad(
    expr: impl Into<Expr>,
    path: impl AsRef<Path>,
    globals: &[(&str, Value)],
    source: Option<SourceListing<'_>>,
) -> Result<()> {
    let path = path.as_ref();
    let mut out = String::new();

    if let Some(listing) = source {
        out.push_str("////// scadgen source\n");
        out.push_str("////// ");
        out.push_str(listing.label);
        out.push('\n');
        for line in listing.text.lines() {
            out.push_str("// ");
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }

    out.push_str(&render_with_globals(expr, globals));
    out.push('\n');

    fs::write(path, out).context(format!("Failed to write SCAD file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Node;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_plain() -> Result<()> {
        let file = NamedTempFile::new()?;
        export_scad(Node::call("cube").arg(1), file.path(), &[], None)?;

        let written = fs::read_to_string(file.path())?;
        assert_eq!(written, "cube(1);\n");
        Ok(())
    }

    #[test]
    fn test_export_with_source_header() -> Result<()> {
        let file = NamedTempFile::new()?;
        let listing = SourceListing {
            label: "gen.rs",
            text: "fn main() {\n}",
        };
        export_scad(Node::call("cube").arg(1), file.path(), &[], Some(listing))?;

        let written = fs::read_to_string(file.path())?;
        assert_eq!(
            written,
            "////// scadgen source\n////// gen.rs\n// fn main() {\n// }\n\ncube(1);\n"
        );
        Ok(())
    }

    #[test]
    fn test_export_with_globals() -> Result<()> {
        let file = NamedTempFile::new()?;
        export_scad(
            Node::call("cube").arg(1),
            file.path(),
            &[("w", Value::Int(3))],
            None,
        )?;

        let written = fs::read_to_string(file.path())?;
        assert_eq!(written, "w=3;\ncube(1);\n");
        Ok(())
    }

    #[test]
    fn test_export_to_bad_path_fails() {
        let result = export_scad(
            Node::call("cube").arg(1),
            "/nonexistent-dir/out.scad",
            &[],
            None,
        );
        assert!(result.is_err());
    }
}
