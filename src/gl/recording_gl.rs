/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Headless [GL] implementation that only records what it is asked to do.
//!
//! Nothing is rendered: every call is appended to a [CallLog] and returns
//! zero or a null pointer. Out-parameters are left untouched. This makes it
//! possible to run code written against [GL] without a window or a driver,
//! and to check exactly which calls reached the bottom of a stack of
//! decorators, with which arguments.

use super::gl46compat_raw::types::*;
use super::gl_functions::{with_gl_functions, NullReturn};
use super::{GLFunc, GL};
use std::sync::{Arc, Mutex};

/// One call received by a [RecordingGL].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub func: GLFunc,
    /// The arguments, formatted with [std::fmt::Debug] and separated by `, `.
    pub args: String,
}

/// Shared list of calls received by a [RecordingGL]. Clones refer to the same
/// list, so a clone can be kept to inspect calls after the [RecordingGL] has
/// been handed off to a decorator.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Just the functions called, in order.
    pub fn funcs(&self) -> Vec<GLFunc> {
        self.calls.lock().unwrap().iter().map(|call| call.func).collect()
    }

    /// How many times `func` was called.
    pub fn count(&self, func: GLFunc) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.func == func)
            .count()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

pub struct RecordingGL {
    log: CallLog,
}

impl RecordingGL {
    pub fn new(log: CallLog) -> Self {
        RecordingGL { log }
    }

    pub fn log(&self) -> &CallLog {
        &self.log
    }

    fn record(&self, func: GLFunc, args: Vec<String>) {
        self.log.push(RecordedCall {
            func,
            args: args.join(", "),
        });
    }
}

macro_rules! impl_gl_for_recording_gl {
    ($(
        $(#[$flag:ident])?
        fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;
    )*) => {
        impl GL for RecordingGL {
            $(
                unsafe fn $name(&mut self, $($arg: $ty),*) $(-> $ret)? {
                    let args: Vec<String> = vec![$(format!("{:?}", $arg)),*];
                    self.record(GLFunc::$name, args);
                    NullReturn::null_return()
                }
            )*
        }
    };
}

with_gl_functions!(impl_gl_for_recording_gl);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::gl46compat_raw as gl46;

    #[test]
    fn records_calls_and_arguments() {
        let log = CallLog::new();
        let mut gl = RecordingGL::new(log.clone());
        unsafe {
            gl.ClearColor(0.0, 0.5, 1.0, 1.0);
            gl.Clear(gl46::COLOR_BUFFER_BIT);
            gl.Finish();
        }
        assert_eq!(
            log.calls(),
            vec![
                RecordedCall {
                    func: GLFunc::ClearColor,
                    args: "0.0, 0.5, 1.0, 1.0".to_string()
                },
                RecordedCall {
                    func: GLFunc::Clear,
                    args: "16384".to_string()
                },
                RecordedCall {
                    func: GLFunc::Finish,
                    args: String::new()
                },
            ]
        );
        assert_eq!(log.count(GLFunc::Clear), 1);
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn returns_null_values() {
        let mut gl = RecordingGL::new(CallLog::new());
        unsafe {
            assert_eq!(gl.CreateProgram(), 0);
            assert_eq!(gl.IsEnabled(gl46::BLEND), gl46::FALSE);
            assert!(gl.GetString(gl46::VERSION).is_null());
            assert!(gl.MapBuffer(gl46::ARRAY_BUFFER, gl46::READ_ONLY).is_null());
        }
        assert_eq!(gl.log().len(), 4);

        gl.log().clear();
        assert_eq!(
            unsafe { gl.driver_description() },
            "OpenGL (unknown) / (unknown) / (unknown)"
        );
        assert_eq!(
            gl.log().funcs(),
            vec![GLFunc::GetString, GLFunc::GetString, GLFunc::GetString]
        );
    }
}
