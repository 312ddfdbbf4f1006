// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadgen Team

//! Directional translate helpers and the centered-cube convenience

use crate::ast::{Bundle, Node, Value};
use crate::dsl::factory::{cube, translate};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

fn directional(direction: Vector3<f64>, distance: f64) -> Node {
    translate(direction * distance)
}

/// `translate` along +Z by `distance`.
pub fn up(distance: f64) -> Node {
    directional(Vector3::z(), distance)
}

/// `translate` along -Z by `distance`.
pub fn down(distance: f64) -> Node {
    directional(-Vector3::z(), distance)
}

/// `translate` along -X by `distance`.
pub fn left(distance: f64) -> Node {
    directional(-Vector3::x(), distance)
}

/// `translate` along +X by `distance`.
pub fn right(distance: f64) -> Node {
    directional(Vector3::x(), distance)
}

/// `translate` along -Y by `distance`.
pub fn back(distance: f64) -> Node {
    directional(-Vector3::y(), distance)
}

/// `translate` along +Y by `distance`.
pub fn forward(distance: f64) -> Node {
    directional(Vector3::y(), distance)
}

/// A coordinate axis tag for [`centered_cube`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// A `cube` chained into a `translate` that shifts it by minus half its
/// size on each axis listed in `center`, leaving the other axes at zero.
///
/// The result is still a [`Bundle`], so further chaining attaches outside
/// the centering translate and [`Bundle::child`] attachment still reaches
/// the cube's own nesting level.
pub fn centered_cube(x: f64, y: f64, z: f64, center: impl IntoIterator<Item = Axis>) -> Bundle {
    let center: Vec<Axis> = center.into_iter().collect();
    let shift = |axis: Axis, size: f64| {
        if center.contains(&axis) {
            Value::Float(-size / 2.0)
        } else {
            Value::Int(0)
        }
    };

    cube([x, y, z])
        >> translate(Value::List(vec![
            shift(Axis::X, x),
            shift(Axis::Y, y),
            shift(Axis::Z, z),
        ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directional_helpers_scale_unit_vectors() {
        assert_eq!(up(4.0).to_string(), "translate([0, 0, 4]);");
        assert_eq!(down(4.0).to_string(), "translate([0, 0, -4]);");
        assert_eq!(left(2.0).to_string(), "translate([-2, 0, 0]);");
        assert_eq!(right(2.0).to_string(), "translate([2, 0, 0]);");
        assert_eq!(back(1.5).to_string(), "translate([0, -1.5, 0]);");
        assert_eq!(forward(1.5).to_string(), "translate([0, 1.5, 0]);");
    }

    #[test]
    fn test_centered_cube_shifts_only_tagged_axes() {
        let resolved = centered_cube(10.0, 20.0, 30.0, [Axis::X]).resolve();
        assert_eq!(resolved.name(), "translate");
        assert_eq!(
            resolved.positional_args()[0],
            Value::List(vec![Value::Float(-5.0), Value::Int(0), Value::Int(0)])
        );
        assert_eq!(resolved.children()[0].name(), "cube");
    }

    #[test]
    fn test_centered_cube_all_axes() {
        let resolved = centered_cube(10.0, 20.0, 30.0, [Axis::X, Axis::Y, Axis::Z]).resolve();
        assert_eq!(
            resolved.positional_args()[0],
            Value::List(vec![
                Value::Float(-5.0),
                Value::Float(-10.0),
                Value::Float(-15.0),
            ])
        );
    }

    #[test]
    fn test_centered_cube_no_axes() {
        let resolved = centered_cube(2.0, 2.0, 2.0, []).resolve();
        assert_eq!(
            resolved.positional_args()[0],
            Value::List(vec![Value::Int(0), Value::Int(0), Value::Int(0)])
        );
    }
}
