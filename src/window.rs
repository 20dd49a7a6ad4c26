/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Abstraction of window setup, OpenGL context creation and event handling.
//!
//! Implemented using the sdl2 crate (a Rust wrapper for SDL2). All usage of
//! SDL should be confined to this module.
//!
//! It is assumed only one window will be needed for the runtime of the
//! program.

mod gl;

pub use gl::{GLContext, GLVersion};

use sdl2::event::Event;
use std::ffi::c_void;

pub struct Window {
    _sdl_ctx: sdl2::Sdl,
    video_ctx: sdl2::VideoSubsystem,
    window: sdl2::video::Window,
    event_pump: sdl2::EventPump,
    quit_requested: bool,
}
impl Window {
    pub fn new(title: &str, (width, height): (u32, u32)) -> Result<Window, String> {
        let sdl_ctx = sdl2::init()?;
        let video_ctx = sdl_ctx.video()?;

        let window = video_ctx
            .window(title, width, height)
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| format!("Couldn't create window: {}", e))?;

        let event_pump = sdl_ctx.event_pump()?;

        Ok(Window {
            _sdl_ctx: sdl_ctx,
            video_ctx,
            window,
            event_pump,
            quit_requested: false,
        })
    }

    /// Poll for events from the OS. This needs to be done reasonably often
    /// (60Hz is probably fine) so that the host OS doesn't consider debugGL
    /// to be unresponsive.
    pub fn poll_for_events(&mut self) {
        for event in self.event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                log_dbg!("Quit requested");
                self.quit_requested = true;
            }
        }
    }

    /// Whether the user has tried to close the window.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn create_gl_context(&mut self, version: GLVersion) -> Result<GLContext, String> {
        gl::create_gl_context(&self.video_ctx, &self.window, version)
    }

    pub fn make_gl_context_current(&self, gl_ctx: &GLContext) -> Result<(), String> {
        gl::make_gl_context_current(&self.window, gl_ctx)
    }

    /// Look up an OpenGL entry point in the current context.
    pub fn gl_get_proc_address(&self, name: &str) -> *const c_void {
        self.video_ctx.gl_get_proc_address(name) as *const _
    }

    /// Swap front-buffer and back-buffer so the result of OpenGL rendering is
    /// presented.
    pub fn swap_window(&mut self) {
        self.window.gl_swap_window();
    }

    /// Size of the drawable area in pixels, which may differ from the window
    /// size on high-DPI displays.
    pub fn drawable_size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }
}
