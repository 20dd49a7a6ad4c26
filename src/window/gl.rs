/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! OpenGL context creation etc.

use sdl2::video::GLProfile;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GLVersion {
    /// OpenGL 4.6 compatibility profile
    GL46Compat,
    /// OpenGL 2.1 compatibility profile
    GL21Compat,
}
impl GLVersion {
    /// Versions to try, in order of preference. Not every driver offers a
    /// compatibility profile for recent versions (macOS stops at 2.1), and
    /// entry points that the context lacks simply stay unloaded.
    pub const PREFERENCE: &'static [Self] = &[Self::GL46Compat, Self::GL21Compat];

    pub fn description(self) -> &'static str {
        match self {
            Self::GL46Compat => "OpenGL 4.6 compatibility profile",
            Self::GL21Compat => "OpenGL 2.1 compatibility profile",
        }
    }
}

pub struct GLContext {
    gl_ctx: sdl2::video::GLContext,
    version: GLVersion,
}
impl GLContext {
    pub fn version(&self) -> GLVersion {
        self.version
    }
}

pub fn create_gl_context(
    video_ctx: &sdl2::VideoSubsystem,
    window: &sdl2::video::Window,
    version: GLVersion,
) -> Result<GLContext, String> {
    let attr = video_ctx.gl_attr();
    match version {
        GLVersion::GL46Compat => attr.set_context_version(4, 6),
        GLVersion::GL21Compat => attr.set_context_version(2, 1),
    }
    attr.set_context_profile(GLProfile::Compatibility);

    let gl_ctx = window.gl_create_context()?;

    Ok(GLContext { gl_ctx, version })
}

pub fn make_gl_context_current(
    window: &sdl2::video::Window,
    gl_ctx: &GLContext,
) -> Result<(), String> {
    window.gl_make_current(&gl_ctx.gl_ctx)
}
