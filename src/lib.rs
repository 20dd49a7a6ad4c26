/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! debugGL is an instrumenting pass-through layer for OpenGL.
//!
//! A [gl::DebugGL] sits in front of some other implementation of the [gl::GL]
//! trait (the "delegate", usually the host's driver) and forwards every call to
//! it unchanged, while:
//! - checking that the context is only used from the thread that owns it,
//! - counting how many times each entry point was called,
//! - optionally dropping draw calls and vertex submission, so that the
//!   application's CPU-side cost can be measured without the GPU's.
//!
//! The binary built from this crate drives a test pattern through the layer
//! and prints per-frame statistics.

// Allow the crate to have a non-snake-case name (debugGL).
// This also allows items in the crate to have non-snake-case names.
#![allow(non_snake_case)]
// The documentation for this crate is intended to include private items.
#![allow(rustdoc::private_intra_doc_links)]

#[macro_use]
mod log;
pub mod gl;
mod options;
#[cfg(feature = "window")]
mod window;

use gl::test_pattern::draw_test_pattern;
use gl::{CallLog, DebugGL, FpsCounter, GLImplementation, RecordingGL, GL};
use options::Options;

/// Current version.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Size of the window, and of the viewport for headless runs.
const WINDOW_SIZE: (u32, u32) = (640, 480);

const USAGE: &str = "\
Usage:
    debugGL [options]

Renders a test pattern through the instrumented OpenGL layer and prints how
many calls each frame made.

Special options:
    --help
        Display this help text.
";

pub fn main<T: Iterator<Item = String>>(mut args: T) -> Result<(), String> {
    echo!("debugGL {}", VERSION);
    echo!();

    let _ = args.next(); // skip argv[0]

    let mut file_option_args = Vec::new();
    let mut option_args = Vec::new();

    for arg in args {
        if arg == "--help" {
            echo!("{}", USAGE);
            echo!("{}", options::DOCUMENTATION);
            return Ok(());
        } else if let Some(path) = arg.strip_prefix("--options-file=") {
            let file = std::fs::File::open(path)
                .map_err(|e| format!("Could not open options file {:?}: {}", path, e))?;
            file_option_args.extend(options::get_options_from_file(file)?);
        // Parse an option but discard the value, to test whether it's valid.
        // We don't want to apply it immediately, because then options loaded
        // from a file would take precedence over options from the command line.
        } else if Options::default().parse_argument(&arg)? {
            option_args.push(arg);
        } else {
            echo!("{}", USAGE);
            echo!("{}", options::DOCUMENTATION);
            return Err(format!("Unexpected argument: {:?}", arg));
        }
    }

    let mut options = Options::default();
    for arg in &file_option_args {
        if !options.parse_argument(arg)? {
            return Err(format!("Unexpected argument in options file: {:?}", arg));
        }
    }
    for arg in &option_args {
        let parse_result = options.parse_argument(arg);
        assert!(parse_result == Ok(true));
    }

    echo!(
        "Using {} for {} frame(s).",
        options.gl_implementation.description(),
        options.frames
    );

    match options.gl_implementation {
        GLImplementation::Recording => run_recording(&options),
        GLImplementation::Native => run_native(&options),
    }
}

/// Put a [DebugGL] in front of `delegate`, configured by `options`.
fn instrument(delegate: Box<dyn GL + Send>, options: &Options) -> DebugGL {
    let mut gl = DebugGL::wrapping(delegate);
    if options.verify_thread {
        gl.bind_to_current_thread();
    }
    gl.set_suppress_draws(options.suppress_draws);
    gl
}

/// Draw `options.frames` frames of the test pattern and print statistics for
/// each. `end_frame` is called after each frame and returns [false] to stop
/// early.
fn render_frames<F>(gl: &mut DebugGL, options: &Options, viewport: (u32, u32), mut end_frame: F)
where
    F: FnMut() -> bool,
{
    let mut fps_counter = FpsCounter::start();
    for frame in 0..options.frames.get() {
        gl.reset_counters();
        unsafe { draw_test_pattern(gl, viewport, frame) };

        if options.dump_counters {
            for (func, count) in gl.counters().iter_nonzero() {
                echo!("    {}: {}", func, count);
            }
        }
        echo!("Frame {}: {}", frame, gl.take_frame_statistics());

        if !end_frame() {
            log!("Stopping after frame {}", frame);
            break;
        }
        fps_counter.count_frame(format_args!("test pattern"));
    }
}

fn run_recording(options: &Options) -> Result<(), String> {
    let log = CallLog::new();
    let mut gl = instrument(Box::new(RecordingGL::new(log.clone())), options);
    echo!("Driver: {}", unsafe { gl.driver_description() });

    render_frames(&mut gl, options, WINDOW_SIZE, || true);

    echo!("{} calls reached the recorder.", log.len());
    Ok(())
}

#[cfg(feature = "window")]
fn run_native(options: &Options) -> Result<(), String> {
    let mut window = window::Window::new(&format!("debugGL {}", VERSION), WINDOW_SIZE)?;

    let mut gl_ctx = Err(String::new());
    for &version in window::GLVersion::PREFERENCE {
        gl_ctx = window.create_gl_context(version);
        match gl_ctx {
            Ok(_) => break,
            Err(ref err) => {
                log!("Couldn't create {} context: {}", version.description(), err);
            }
        }
    }
    let gl_ctx = gl_ctx.map_err(|e| format!("Couldn't create an OpenGL context: {}", e))?;
    window.make_gl_context_current(&gl_ctx)?;
    echo!("Created {} context.", gl_ctx.version().description());

    let native = gl::GLNative::load_with(|name| window.gl_get_proc_address(name))?;
    let mut gl = instrument(Box::new(native), options);
    echo!("Driver: {}", unsafe { gl.driver_description() });

    let viewport = window.drawable_size();
    render_frames(&mut gl, options, viewport, || {
        window.swap_window();
        window.poll_for_events();
        !window.quit_requested()
    });

    Ok(())
}

#[cfg(not(feature = "window"))]
fn run_native(_options: &Options) -> Result<(), String> {
    Err("This build of debugGL has no window support, so only --gl-implementation=recording is available.".to_string())
}
