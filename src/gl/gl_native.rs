/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Passthrough for a native OpenGL driver.
//!
//! There's no validation of arguments here at all: the driver is assumed to be
//! complete, and checking how it is used is the job of whatever sits on top
//! (usually [super::DebugGL]).

use super::gl46compat_raw as gl46;
use super::gl46compat_raw::types::*;
use super::gl_functions::with_gl_functions;
use super::GL;
use std::ffi::c_void;

/// The bindings are global function pointers, so this has no state of its own.
/// It exists to prove that [GLNative::load_with] has been called.
pub struct GLNative {
    _private: (),
}

impl GLNative {
    /// Get a human-friendly description of this implementation.
    pub fn description() -> &'static str {
        "Native OpenGL 4.6 compatibility profile"
    }

    /// Load the entry points using a `GetProcAddress`-style function. Fails if
    /// not even the OpenGL 1.1 core can be found, which usually means no
    /// context is current.
    ///
    /// Entry points the driver doesn't provide are left unloaded, and calling
    /// them panics.
    pub fn load_with<F>(loader: F) -> Result<Self, String>
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gl46::load_with(loader);
        if !gl46::GetString::is_loaded() || !gl46::Clear::is_loaded() {
            return Err("Couldn't load OpenGL entry points".to_string());
        }
        Ok(GLNative { _private: () })
    }
}

macro_rules! impl_gl_for_gl_native {
    ($(
        $(#[$flag:ident])?
        fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;
    )*) => {
        impl GL for GLNative {
            $(
                unsafe fn $name(&mut self, $($arg: $ty),*) $(-> $ret)? {
                    gl46::$name($($arg),*)
                }
            )*
        }
    };
}

with_gl_functions!(impl_gl_for_gl_native);
