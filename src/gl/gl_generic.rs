/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Generic OpenGL interface.
//!
//! Unfortunately this does not provide the types and constants, so the correct
//! usage is to import `GL` and `types` from this module, but get the
//! constants from [super::gl46compat_raw].

use super::gl46compat_raw::types::*;
use super::gl46compat_raw as gl46; // constants only
use super::gl_functions::with_gl_functions;
use std::ffi::CStr;

macro_rules! define_gl_trait {
    ($(
        $(#[$flag:ident])?
        fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;
    )*) => {
        /// Trait representing an OpenGL implementation and context.
        ///
        /// There is one method per wrapped entry point (see
        /// [super::GLFunc]), named like the entry point but without the `gl`
        /// prefix.
        ///
        /// # Safety
        /// It is the caller's responsibility to make the context active before
        /// using any of the `unsafe` methods of this trait, and to pass
        /// pointers that are valid for what the entry point does with them.
        #[allow(clippy::upper_case_acronyms)]
        #[allow(clippy::too_many_arguments)] // not our fault :(
        pub trait GL {
            /// Get some string describing the underlying driver: `GL_VERSION`,
            /// `GL_VENDOR` and `GL_RENDERER`.
            unsafe fn driver_description(&mut self) -> String {
                let version = string_or_unknown(self.GetString(gl46::VERSION));
                let vendor = string_or_unknown(self.GetString(gl46::VENDOR));
                let renderer = string_or_unknown(self.GetString(gl46::RENDERER));
                format!("OpenGL {} / {} / {}", version, vendor, renderer)
            }

            $(
                unsafe fn $name(&mut self, $($arg: $ty),*) $(-> $ret)?;
            )*
        }
    };
}

with_gl_functions!(define_gl_trait);

/// `glGetString` may return null, e.g. from a delegate with no driver behind
/// it.
unsafe fn string_or_unknown(ptr: *const GLubyte) -> String {
    if ptr.is_null() {
        "(unknown)".to_string()
    } else {
        CStr::from_ptr(ptr as *const _).to_string_lossy().into_owned()
    }
}
