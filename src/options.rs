/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Parsing and management of user-configurable options.

use crate::gl::GLImplementation;
use std::io::Read;
use std::num::NonZeroU32;

pub const DOCUMENTATION: &str = "\
Rendering options:
    --gl-implementation=...
        Choose what the instrumented OpenGL context forwards its calls to.

        native     The host's OpenGL driver, in a window. Only available if
                   debugGL was built with the `window` feature.
        recording  Nothing is rendered; calls are only recorded. This is
                   useful for headless runs.

        The default is native if available, otherwise recording.

    --frames=...
        Number of frames to render before exiting. The default is 60.

        This is a natural number that is at least 1.

Instrumentation options:
    --suppress-draws
        Drop vertex, color and texture coordinate submission and all draw
        calls before they reach the driver. Everything else is still
        forwarded. Suppressed calls are not counted.

    --no-verify-thread
        By default, the context may only be used from the thread that created
        it, and use from any other thread is a fatal error. This option lifts
        that restriction.

    --dump-counters
        After each frame, print how many times each OpenGL function was
        called.

Other options:
    --options-file=...
        Read further options from a file. Options are separated by whitespace,
        and everything after a '#' on a line is ignored. Options from files are
        applied before options given on the command line, whatever their
        order.
";

/// Struct containing all user-configurable options.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub gl_implementation: GLImplementation,
    pub frames: NonZeroU32,
    pub suppress_draws: bool,
    pub verify_thread: bool,
    pub dump_counters: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            gl_implementation: GLImplementation::default_for_build(),
            frames: NonZeroU32::new(60).unwrap(),
            suppress_draws: false,
            verify_thread: true,
            dump_counters: false,
        }
    }
}

impl Options {
    /// Parse the command-line argument syntax for an option. Returns `Ok(true)`
    /// if the option was valid and has been applied, and `Ok(false)` if the
    /// option was not recognized.
    ///
    /// `--options-file=` is not handled here, see [get_options_from_file].
    pub fn parse_argument(&mut self, arg: &str) -> Result<bool, String> {
        if let Some(value) = arg.strip_prefix("--gl-implementation=") {
            self.gl_implementation = GLImplementation::from_short_name(value)
                .map_err(|_| format!("Unrecognized OpenGL implementation: {:?}", value))?;
        } else if let Some(value) = arg.strip_prefix("--frames=") {
            self.frames = value
                .parse()
                .map_err(|_| "Invalid frame count".to_string())?;
        } else if arg == "--suppress-draws" {
            self.suppress_draws = true;
        } else if arg == "--no-verify-thread" {
            self.verify_thread = false;
        } else if arg == "--dump-counters" {
            self.dump_counters = true;
        } else {
            return Ok(false);
        };
        Ok(true)
    }
}

/// Read an options file and return the options in it, without applying them.
pub fn get_options_from_file<F: Read>(mut file: F) -> Result<Vec<String>, String> {
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| format!("Could not read options file: {}", e))?;
    let mut options = Vec::new();
    for line in contents.lines() {
        let line = line.split_once('#').map_or(line, |(before, _comment)| before);
        options.extend(line.split_ascii_whitespace().map(str::to_string));
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_arguments() {
        let mut options = Options::default();
        assert!(options.verify_thread);
        assert_eq!(options.parse_argument("--suppress-draws"), Ok(true));
        assert_eq!(options.parse_argument("--no-verify-thread"), Ok(true));
        assert_eq!(options.parse_argument("--dump-counters"), Ok(true));
        assert_eq!(options.parse_argument("--frames=3"), Ok(true));
        assert_eq!(
            options.parse_argument("--gl-implementation=recording"),
            Ok(true)
        );
        assert_eq!(
            options,
            Options {
                gl_implementation: GLImplementation::Recording,
                frames: NonZeroU32::new(3).unwrap(),
                suppress_draws: true,
                verify_thread: false,
                dump_counters: true,
            }
        );
        assert_eq!(options.parse_argument("some.app"), Ok(false));
    }

    #[test]
    fn reject_bad_values() {
        let mut options = Options::default();
        assert!(options.parse_argument("--frames=0").is_err());
        assert!(options.parse_argument("--frames=many").is_err());
        assert!(options.parse_argument("--gl-implementation=gles").is_err());
        assert_eq!(options, Options::default());
    }

    #[test]
    fn options_file() {
        let file = "\
# Profile CPU overhead only
--suppress-draws   --frames=10
--dump-counters # per frame
";
        assert_eq!(
            get_options_from_file(file.as_bytes()),
            Ok(vec![
                "--suppress-draws".to_string(),
                "--frames=10".to_string(),
                "--dump-counters".to_string(),
            ])
        );
    }
}
