// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadgen Team

//! DSL surface - factory functions and modeling conveniences

mod factory;
mod transforms;

pub use factory::*;
pub use transforms::{back, centered_cube, down, forward, left, right, up, Axis};
