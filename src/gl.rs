/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! OpenGL abstraction, instrumentation and implementations.
//!
//! This module consists of a series of layers:
//!
//! - [gl_functions] holds the table of wrapped entry points. Everything below
//!   that enumerates the API is generated from it.
//! - [gl_generic] provides an abstraction over OpenGL implementations, the
//!   [GL] trait.
//! - Various modules provide implementations:
//!   - [gl_native] passes through to the host's OpenGL driver.
//!   - [recording_gl] records calls without rendering anything.
//!   - [debug_gl] wraps another implementation and checks thread affinity,
//!     counts calls and can suppress drawing.
//! - [gl46compat_raw] provides raw bindings for OpenGL 4.6 compatibility
//!   profile generated from the Khronos API headers. **The function bindings
//!   are only for use within this module.** The constants and types can be
//!   used outside it, however.
//! - [counters] and [stats] turn call counts into per-frame statistics.
//! - [test_pattern] draws something using an abstract OpenGL implementation.
//!
//! Useful resources:
//! - [Reference pages](https://registry.khronos.org/OpenGL-Refpages/gl4/)
//! - [Specification](https://registry.khronos.org/OpenGL/specs/gl/glspec46.compatibility.pdf)
//! - Extensions:
//!   - [EXT_framebuffer_object](https://registry.khronos.org/OpenGL/extensions/EXT/EXT_framebuffer_object.txt)
//!   - [NV_primitive_restart](https://registry.khronos.org/OpenGL/extensions/NV/NV_primitive_restart.txt)
//!   - [ARB_bindless_texture](https://registry.khronos.org/OpenGL/extensions/ARB/ARB_bindless_texture.txt)

pub mod counters;
pub mod debug_gl;
mod gl_functions;
mod gl_generic;
pub mod gl_native;
pub mod recording_gl;
pub mod stats;
pub mod test_pattern;

pub use debugGL_gl_bindings::gl46compat as gl46compat_raw;

pub use counters::CallCounters;
pub use debug_gl::{DebugGL, ThreadAffinityError};
pub use gl_functions::{GLFunc, NullReturn};
pub use gl_generic::GL;
pub use gl_native::GLNative;
pub use recording_gl::{CallLog, RecordedCall, RecordingGL};
pub use stats::{FpsCounter, FrameStatistics};

/// Labels for the [GL] implementations a [DebugGL] can be put in front of.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GLImplementation {
    /// [GLNative].
    Native,
    /// [RecordingGL].
    Recording,
}
impl GLImplementation {
    /// Convert from short name used for command-line arguments. Returns [Err]
    /// if name is not recognized.
    pub fn from_short_name(name: &str) -> Result<Self, ()> {
        match name {
            "native" => Ok(Self::Native),
            "recording" => Ok(Self::Recording),
            _ => Err(()),
        }
    }
    pub fn description(self) -> &'static str {
        match self {
            Self::Native => GLNative::description(),
            Self::Recording => "Headless call recorder",
        }
    }
    /// The implementation used when none is requested: the native one, if
    /// this build can open a window.
    pub fn default_for_build() -> Self {
        if cfg!(feature = "window") {
            Self::Native
        } else {
            Self::Recording
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implementation_short_names() {
        assert_eq!(
            GLImplementation::from_short_name("native"),
            Ok(GLImplementation::Native)
        );
        assert_eq!(
            GLImplementation::from_short_name("recording"),
            Ok(GLImplementation::Recording)
        );
        assert_eq!(GLImplementation::from_short_name("gles1_native"), Err(()));
    }
}
