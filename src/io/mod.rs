// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadgen Team

//! I/O module - rendering and exporting OpenSCAD source

mod exporter;
mod writer;

pub use exporter::{export_scad, SourceListing};
pub use writer::{render, render_with_globals};
