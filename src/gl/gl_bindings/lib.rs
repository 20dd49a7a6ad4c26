/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! This package contains OpenGL bindings generated with the `gl_generator`
//! crate.

// Allow the crate to have a non-snake-case name (debugGL).
// This also allows items in the crate to have non-snake-case names.
#![allow(non_snake_case)]

#[allow(warnings)]
pub mod gl46compat {
    include!(concat!(env!("OUT_DIR"), "/gl46compat.rs"));
}
