/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Instrumenting decorator for any [GL] implementation.
//!
//! [DebugGL] forwards every call to a delegate, and on the way:
//! - checks that the call comes from the thread that owns the context, and
//!   panics if it doesn't,
//! - counts how often each entry point is called (see [CallCounters]),
//! - optionally drops geometry-emitting calls (see
//!   [GLFunc::is_suppressible]), which is useful for telling CPU-side
//!   overhead apart from the cost of actually drawing.
//!
//! Apart from that it is fully transparent: arguments and results are passed
//! through untouched and the delegate's GL errors are left for the caller to
//! query as usual.

use super::gl46compat_raw::types::*;
use super::gl_functions::{with_gl_functions, NullReturn};
use super::{CallCounters, FrameStatistics, GLFunc, GL};
use std::thread::ThreadId;

/// A call was made from a thread other than the one that owns the context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadAffinityError {
    pub func: GLFunc,
    pub owner: ThreadId,
    pub caller: ThreadId,
    pub caller_name: Option<String>,
}

impl std::fmt::Display for ThreadAffinityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} called on thread {:?} ({}), but the OpenGL context belongs to thread {:?}",
            self.func,
            self.caller,
            self.caller_name.as_deref().unwrap_or("unnamed"),
            self.owner,
        )
    }
}

impl std::error::Error for ThreadAffinityError {}

/// [GL] implementation that checks, counts and optionally suppresses calls
/// before forwarding them to a delegate [GL].
pub struct DebugGL {
    delegate: Option<Box<dyn GL + Send>>,
    owner_thread: Option<ThreadId>,
    suppress_draws: bool,
    counters: CallCounters,
}

impl Default for DebugGL {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugGL {
    /// Create a decorator with no delegate yet. Any GL call made before
    /// [Self::set_delegate] panics.
    pub fn new() -> Self {
        DebugGL {
            delegate: None,
            owner_thread: None,
            suppress_draws: false,
            counters: CallCounters::new(),
        }
    }

    /// Create a decorator that forwards to `delegate`.
    pub fn wrapping(delegate: Box<dyn GL + Send>) -> Self {
        DebugGL {
            delegate: Some(delegate),
            ..Self::new()
        }
    }

    /// Set the implementation calls are forwarded to. This can only be done
    /// once.
    pub fn set_delegate(&mut self, delegate: Box<dyn GL + Send>) -> Result<(), String> {
        if self.delegate.is_some() {
            return Err("DebugGL already has a delegate".to_string());
        }
        self.delegate = Some(delegate);
        Ok(())
    }

    /// Whether a delegate has been set.
    pub fn is_initialized(&self) -> bool {
        self.delegate.is_some()
    }

    /// Restrict use of this context to one thread, or lift the restriction
    /// with [None].
    pub fn set_owner_thread(&mut self, owner: Option<ThreadId>) {
        log_dbg!("Owner thread: {:?}", owner);
        self.owner_thread = owner;
    }

    /// Restrict use of this context to the current thread.
    pub fn bind_to_current_thread(&mut self) {
        self.set_owner_thread(Some(std::thread::current().id()));
    }

    pub fn owner_thread(&self) -> Option<ThreadId> {
        self.owner_thread
    }

    /// While enabled, suppressible calls return immediately without being
    /// forwarded or counted.
    pub fn set_suppress_draws(&mut self, suppress: bool) {
        if suppress != self.suppress_draws {
            log_dbg!(
                "Draw suppression {}",
                if suppress { "enabled" } else { "disabled" }
            );
        }
        self.suppress_draws = suppress;
    }

    pub fn suppress_draws(&self) -> bool {
        self.suppress_draws
    }

    /// Number of calls forwarded to `func` since the last reset.
    pub fn counter(&self, func: GLFunc) -> u64 {
        self.counters.get(func)
    }

    pub fn counters(&self) -> &CallCounters {
        &self.counters
    }

    pub fn reset_counters(&mut self) {
        self.counters.reset();
    }

    /// Summarize the counters since the last reset.
    pub fn frame_statistics(&self) -> FrameStatistics {
        FrameStatistics::from_counters(&self.counters)
    }

    /// Summarize the counters since the last reset, then reset them, ready for
    /// the next frame.
    pub fn take_frame_statistics(&mut self) -> FrameStatistics {
        let stats = self.frame_statistics();
        self.reset_counters();
        stats
    }

    /// Check that the current thread may call `func`.
    pub fn check_thread(&self, func: GLFunc) -> Result<(), ThreadAffinityError> {
        let Some(owner) = self.owner_thread else {
            return Ok(());
        };
        let current = std::thread::current();
        if current.id() == owner {
            Ok(())
        } else {
            Err(ThreadAffinityError {
                func,
                owner,
                caller: current.id(),
                caller_name: current.name().map(str::to_string),
            })
        }
    }

    /// Prologue shared by every wrapped entry point. Returns the delegate to
    /// forward the call to, or [None] if the call is suppressed.
    fn enter(&mut self, func: GLFunc) -> Option<&mut (dyn GL + Send + 'static)> {
        if let Err(err) = self.check_thread(func) {
            panic!("{}", err);
        }
        if self.suppress_draws && func.is_suppressible() {
            return None;
        }
        let Some(delegate) = self.delegate.as_deref_mut() else {
            panic!("{} called before DebugGL was given a delegate", func);
        };
        self.counters.increment(func);
        Some(delegate)
    }
}

macro_rules! impl_gl_for_debug_gl {
    ($(
        $(#[$flag:ident])?
        fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;
    )*) => {
        impl GL for DebugGL {
            $(
                unsafe fn $name(&mut self, $($arg: $ty),*) $(-> $ret)? {
                    match self.enter(GLFunc::$name) {
                        Some(delegate) => delegate.$name($($arg),*),
                        None => NullReturn::null_return(),
                    }
                }
            )*
        }
    };
}

with_gl_functions!(impl_gl_for_debug_gl);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::gl_functions::{with_gl_functions, NullReturn};
    use crate::gl::{gl46compat_raw as gl46, CallLog, RecordingGL};

    fn recording_debug_gl() -> (DebugGL, CallLog) {
        let log = CallLog::new();
        let gl = DebugGL::wrapping(Box::new(RecordingGL::new(log.clone())));
        (gl, log)
    }

    // Calls every wrapped entry point once, in table order, with zero or null
    // for every argument.
    macro_rules! define_call_every_function {
        ($(
            $(#[$flag:ident])?
            fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;
        )*) => {
            fn call_every_function(gl: &mut dyn GL) {
                $(
                    let _ = unsafe { gl.$name($(<$ty as NullReturn>::null_return()),*) };
                )*
            }
        };
    }

    with_gl_functions!(define_call_every_function);

    #[test]
    fn every_function_is_counted_and_forwarded_once() {
        let (mut gl, log) = recording_debug_gl();
        call_every_function(&mut gl);
        for func in GLFunc::ALL {
            assert_eq!(gl.counter(func), 1, "{}", func);
            assert_eq!(log.count(func), 1, "{}", func);
        }
        // Same order as the table, so each stub reached its own method.
        assert_eq!(log.funcs(), GLFunc::ALL.to_vec());
    }

    #[test]
    fn every_suppressible_function_is_dropped() {
        let (mut gl, log) = recording_debug_gl();
        gl.set_suppress_draws(true);
        call_every_function(&mut gl);
        let mut suppressed = 0;
        for func in GLFunc::ALL {
            let expected = if func.is_suppressible() {
                suppressed += 1;
                0
            } else {
                1
            };
            assert_eq!(gl.counter(func), expected, "{}", func);
            assert_eq!(log.count(func), expected as usize, "{}", func);
        }
        assert!(suppressed > 0);
        assert_eq!(log.len(), GLFunc::COUNT - suppressed);

        gl.set_suppress_draws(false);
        gl.reset_counters();
        log.clear();
        call_every_function(&mut gl);
        assert!(GLFunc::ALL.iter().all(|&func| gl.counter(func) == 1));
        assert_eq!(log.len(), GLFunc::COUNT);
    }

    #[test]
    fn delegate_can_only_be_set_once() {
        let mut gl = DebugGL::new();
        assert!(!gl.is_initialized());
        assert!(gl.set_delegate(Box::new(RecordingGL::new(CallLog::new()))).is_ok());
        assert!(gl.is_initialized());
        assert!(gl.set_delegate(Box::new(RecordingGL::new(CallLog::new()))).is_err());
    }

    #[test]
    #[should_panic(expected = "before DebugGL was given a delegate")]
    fn call_without_delegate_panics() {
        let mut gl = DebugGL::new();
        unsafe { gl.Clear(gl46::COLOR_BUFFER_BIT) };
    }

    #[test]
    fn suppressed_call_returns_null_value() {
        let (mut gl, log) = recording_debug_gl();
        gl.set_suppress_draws(true);
        unsafe { gl.DrawArrays(gl46::TRIANGLES, 0, 3) };
        assert!(log.is_empty());
        assert_eq!(gl.counter(GLFunc::DrawArrays), 0);
        // Non-suppressible calls still go through.
        assert_eq!(unsafe { gl.GetError() }, gl46::NO_ERROR);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn owner_thread_may_call() {
        let (mut gl, log) = recording_debug_gl();
        gl.bind_to_current_thread();
        assert_eq!(gl.owner_thread(), Some(std::thread::current().id()));
        assert!(gl.check_thread(GLFunc::Clear).is_ok());
        unsafe { gl.Flush() };
        assert_eq!(log.funcs(), vec![GLFunc::Flush]);
    }

    #[test]
    fn affinity_error_message() {
        let (mut gl, _log) = recording_debug_gl();
        let main_thread = std::thread::current().id();
        gl.set_owner_thread(Some(main_thread));
        let err = std::thread::Builder::new()
            .name("intruder".to_string())
            .spawn(move || gl.check_thread(GLFunc::Clear))
            .unwrap()
            .join()
            .unwrap()
            .unwrap_err();
        assert_eq!(err.func, GLFunc::Clear);
        assert_eq!(err.owner, main_thread);
        assert_eq!(err.caller_name.as_deref(), Some("intruder"));
        let message = err.to_string();
        assert!(message.starts_with("glClear called on thread"), "{}", message);
        assert!(message.contains("(intruder)"), "{}", message);
    }

    #[test]
    fn debug_gl_can_wrap_debug_gl() {
        let (inner, log) = recording_debug_gl();
        let mut outer = DebugGL::wrapping(Box::new(inner));
        unsafe { outer.Viewport(0, 0, 640, 480) };
        assert_eq!(outer.counter(GLFunc::Viewport), 1);
        assert_eq!(log.funcs(), vec![GLFunc::Viewport]);
    }
}
