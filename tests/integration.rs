/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Tests of the instrumentation layer through the crate's public API, using
//! the headless recorder as the delegate so no driver or window is needed.

use debugGL::gl::gl46compat_raw as gl46;
use debugGL::gl::{CallCounters, CallLog, DebugGL, GLFunc, RecordedCall, RecordingGL, GL};

fn recording_debug_gl() -> (DebugGL, CallLog) {
    let log = CallLog::new();
    let gl = DebugGL::wrapping(Box::new(RecordingGL::new(log.clone())));
    (gl, log)
}

#[test]
fn calls_are_forwarded_unchanged_and_counted() {
    let (mut gl, log) = recording_debug_gl();
    unsafe {
        gl.Enable(gl46::BLEND);
        gl.BlendFunc(gl46::SRC_ALPHA, gl46::ONE_MINUS_SRC_ALPHA);
        gl.Enable(gl46::BLEND);
    }
    assert_eq!(gl.counter(GLFunc::Enable), 2);
    assert_eq!(gl.counter(GLFunc::BlendFunc), 1);
    assert_eq!(gl.counter(GLFunc::Disable), 0);
    assert_eq!(
        log.calls(),
        vec![
            RecordedCall {
                func: GLFunc::Enable,
                args: "3042".to_string(),
            },
            RecordedCall {
                func: GLFunc::BlendFunc,
                args: "770, 771".to_string(),
            },
            RecordedCall {
                func: GLFunc::Enable,
                args: "3042".to_string(),
            },
        ]
    );
}

#[test]
fn suppression_drops_draws_until_lifted() {
    let (mut gl, log) = recording_debug_gl();
    assert!(!gl.suppress_draws());

    gl.set_suppress_draws(true);
    unsafe {
        for i in 0..5 {
            gl.Vertex3f(i as f32, 0.0, 0.0);
        }
        gl.DrawElements(gl46::TRIANGLES, 6, gl46::UNSIGNED_SHORT, std::ptr::null());
        // State changes are never suppressed.
        gl.BindTexture(gl46::TEXTURE_2D, 1);
    }
    assert_eq!(gl.counter(GLFunc::Vertex3f), 0);
    assert_eq!(gl.counter(GLFunc::DrawElements), 0);
    assert_eq!(gl.counter(GLFunc::BindTexture), 1);
    assert_eq!(log.funcs(), vec![GLFunc::BindTexture]);

    gl.set_suppress_draws(false);
    unsafe { gl.Vertex3f(1.0, 2.0, 3.0) };
    assert_eq!(gl.counter(GLFunc::Vertex3f), 1);
    assert_eq!(log.calls().last().unwrap().args, "1.0, 2.0, 3.0");
}

#[test]
fn suppressed_query_returns_zero() {
    let (mut gl, log) = recording_debug_gl();
    gl.set_suppress_draws(true);
    // Not suppressible, so this reaches the recorder, which answers with zero.
    assert_eq!(unsafe { gl.IsEnabled(gl46::DEPTH_TEST) }, 0);
    assert_eq!(log.len(), 1);
}

#[test]
fn reset_zeroes_every_counter() {
    let (mut gl, _log) = recording_debug_gl();
    unsafe {
        gl.Clear(gl46::COLOR_BUFFER_BIT);
        gl.Flush();
        gl.DrawArrays(gl46::POINTS, 0, 1);
    }
    assert_eq!(gl.counters().total(), 3);
    gl.reset_counters();
    assert_eq!(gl.counters(), &CallCounters::new());
    assert!(GLFunc::ALL.iter().all(|&func| gl.counter(func) == 0));
}

#[test]
fn call_from_foreign_thread_is_fatal() {
    let (mut gl, log) = recording_debug_gl();
    gl.bind_to_current_thread();
    unsafe { gl.Clear(gl46::COLOR_BUFFER_BIT) };

    let result = std::thread::scope(|scope| {
        scope
            .spawn(|| unsafe { gl.Clear(gl46::COLOR_BUFFER_BIT) })
            .join()
    });
    assert!(result.is_err());

    // The rejected call neither reached the delegate nor was counted.
    assert_eq!(log.len(), 1);
    assert_eq!(gl.counter(GLFunc::Clear), 1);

    // The owner can carry on.
    unsafe { gl.Clear(gl46::COLOR_BUFFER_BIT) };
    assert_eq!(gl.counter(GLFunc::Clear), 2);
}

#[test]
fn unbound_context_may_move_between_threads() {
    let (mut gl, log) = recording_debug_gl();
    assert_eq!(gl.owner_thread(), None);
    std::thread::scope(|scope| {
        scope.spawn(|| unsafe { gl.Finish() });
    });
    unsafe { gl.Finish() };
    assert_eq!(gl.counter(GLFunc::Finish), 2);
    assert_eq!(log.len(), 2);
}

#[test]
fn every_entry_point_has_a_counter() {
    let mut counters = CallCounters::new();
    for func in GLFunc::ALL {
        counters.increment(func);
    }
    assert_eq!(counters.total(), GLFunc::COUNT as u64);
    assert_eq!(counters.iter_nonzero().count(), GLFunc::COUNT);
    for func in GLFunc::ALL {
        assert_eq!(GLFunc::from_name(func.name()), Some(func));
    }
}
