/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! A small frame drawn through an abstract [GL] implementation, exercising
//! both immediate mode and vertex arrays, so there's something to count.

use super::gl46compat_raw as gl46; // constants and types only
use super::GL;

/// Draw one frame of the test pattern. `frame` animates it.
///
/// The provided context must be current. State touched here (matrices,
/// client arrays, clear color) is left modified.
pub unsafe fn draw_test_pattern(gl: &mut dyn GL, viewport: (u32, u32), frame: u32) {
    use gl46::types::*;

    gl.Viewport(0, 0, viewport.0 as _, viewport.1 as _);
    gl.ClearColor(0.1, 0.1, 0.1, 1.0);
    gl.Clear(gl46::COLOR_BUFFER_BIT | gl46::DEPTH_BUFFER_BIT);

    gl.MatrixMode(gl46::PROJECTION);
    gl.LoadIdentity();
    gl.Ortho(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
    gl.MatrixMode(gl46::MODELVIEW);
    gl.LoadIdentity();

    // Spinning triangle in immediate mode
    gl.PushMatrix();
    gl.Translatef(-0.5, 0.0, 0.0);
    gl.Rotatef((frame % 360) as GLfloat, 0.0, 0.0, 1.0);
    gl.Begin(gl46::TRIANGLES);
    gl.Color3f(1.0, 0.0, 0.0);
    gl.Vertex2f(0.0, 0.4);
    gl.Color3f(0.0, 1.0, 0.0);
    gl.Vertex2f(-0.35, -0.2);
    gl.Color3f(0.0, 0.0, 1.0);
    gl.Vertex2f(0.35, -0.2);
    gl.End();
    gl.PopMatrix();

    // Quad from client-side arrays
    let vertices: [f32; 12] = [
        0.2, -0.3, 0.8, -0.3, 0.2, 0.3, 0.8, -0.3, 0.8, 0.3, 0.2, 0.3,
    ];
    let colors: [u8; 24] = [
        255, 255, 0, 255, 255, 255, 0, 255, 0, 255, 255, 255, 255, 255, 0, 255, 0, 255, 255, 255,
        0, 255, 255, 255,
    ];
    gl.BindBuffer(gl46::ARRAY_BUFFER, 0);
    gl.EnableClientState(gl46::VERTEX_ARRAY);
    gl.VertexPointer(2, gl46::FLOAT, 0, vertices.as_ptr() as *const GLvoid);
    gl.EnableClientState(gl46::COLOR_ARRAY);
    gl.ColorPointer(4, gl46::UNSIGNED_BYTE, 0, colors.as_ptr() as *const GLvoid);
    gl.DrawArrays(gl46::TRIANGLES, 0, 6);
    gl.DisableClientState(gl46::COLOR_ARRAY);
    gl.DisableClientState(gl46::VERTEX_ARRAY);

    // Read back the center pixel, like a screenshot or picking pass would.
    let mut pixel = [0u8; 4];
    gl.ReadPixels(
        (viewport.0 / 2) as _,
        (viewport.1 / 2) as _,
        1,
        1,
        gl46::RGBA,
        gl46::UNSIGNED_BYTE,
        pixel.as_mut_ptr() as *mut GLvoid,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::{CallLog, DebugGL, GLFunc, RecordingGL};

    #[test]
    fn frame_statistics_of_test_pattern() {
        let log = CallLog::new();
        let mut gl = DebugGL::wrapping(Box::new(RecordingGL::new(log.clone())));
        unsafe { draw_test_pattern(&mut gl, (320, 240), 0) };
        let stats = gl.take_frame_statistics();
        assert_eq!(stats.draw_calls, 1);
        assert_eq!(stats.read_pixels, 1);
        assert_eq!(stats.total_calls, log.len() as u64);
        assert_eq!(gl.counters().total(), 0);

        gl.set_suppress_draws(true);
        log.clear();
        unsafe { draw_test_pattern(&mut gl, (320, 240), 1) };
        let stats = gl.take_frame_statistics();
        assert_eq!(stats.draw_calls, 0);
        assert_eq!(stats.read_pixels, 1);
        assert_eq!(log.count(GLFunc::Vertex2f), 0);
        assert_eq!(log.count(GLFunc::Color3f), 0);
        assert_eq!(log.count(GLFunc::Begin), 1);
    }
}
