// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadgen Team

//! Static factory registry
//!
//! One free function per OpenSCAD call name, each producing a childless
//! [`Node`]. The name set is closed and known, so the registry is expanded
//! at compile time instead of dispatching on strings.
//!
//! Positional arguments come from the single [`IntoArgs`] parameter: `()`
//! for none, a scalar or array for one (arrays become one OpenSCAD vector),
//! a tuple for several. Keyword arguments are added with [`Node::kwarg`].
//!
//! ```
//! use scadgen::dsl::*;
//!
//! let lid = cube([20, 20, 2]);
//! let knob = sphere(()).kwarg("r", 3).kwarg("$fn", 48);
//! let part = lid + (knob >> translate([10, 10, 2]));
//! ```

use crate::ast::{Node, Value};
use nalgebra::Vector3;

/// Conversion from a call-site payload to a positional-argument list.
pub trait IntoArgs {
    fn into_args(self) -> Vec<Value>;
}

impl IntoArgs for () {
    fn into_args(self) -> Vec<Value> {
        Vec::new()
    }
}

macro_rules! scalar_args {
    ($($ty:ty),+ $(,)?) => {$(
        impl IntoArgs for $ty {
            fn into_args(self) -> Vec<Value> {
                vec![self.into()]
            }
        }
    )+};
}

scalar_args!(bool, i32, i64, u32, f32, f64, &str, String, Value, Vector3<f64>);

// A fixed-size array is one OpenSCAD vector argument, not N scalars:
// `cube([10, 20, 30])` takes a single size vector.
impl<T: Into<Value>, const N: usize> IntoArgs for [T; N] {
    fn into_args(self) -> Vec<Value> {
        vec![Value::from(self)]
    }
}

macro_rules! tuple_args {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: Into<Value>),+> IntoArgs for ($($name,)+) {
            fn into_args(self) -> Vec<Value> {
                vec![$(self.$idx.into()),+]
            }
        }
    };
}

tuple_args!(A: 0, B: 1);
tuple_args!(A: 0, B: 1, C: 2);
tuple_args!(A: 0, B: 1, C: 2, D: 3);

macro_rules! factories {
    ($($name:ident),+ $(,)?) => {$(
        pub fn $name<A: IntoArgs>(args: A) -> Node {
            Node::call(stringify!($name)).args(args.into_args())
        }
    )+};
}

factories! {
    circle, square, polygon, text, projection,
    sphere, cube, cylinder, polyhedron,
    linear_extrude, rotate_extrude, surface,
    translate, rotate, scale, resize, mirror, multmatrix,
    color, offset,
    hull, minkowski,
    union, difference, intersection,
    import,
}
