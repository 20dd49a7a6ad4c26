/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
//! Per-frame statistics derived from [CallCounters].

use super::{CallCounters, GLFunc};
use std::time::{Duration, Instant};

/// Summary of the calls made while rendering one frame.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct FrameStatistics {
    /// Calls to any of [GLFunc::DRAW_CALLS].
    pub draw_calls: u64,
    /// Calls to `glReadPixels`, which usually stall the pipeline.
    pub read_pixels: u64,
    /// Calls to any wrapped entry point.
    pub total_calls: u64,
}

impl FrameStatistics {
    pub fn from_counters(counters: &CallCounters) -> Self {
        FrameStatistics {
            draw_calls: counters.sum(GLFunc::DRAW_CALLS),
            read_pixels: counters.get(GLFunc::ReadPixels),
            total_calls: counters.total(),
        }
    }
}

impl std::fmt::Display for FrameStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} draw calls, {} pixel reads, {} GL calls in total",
            self.draw_calls, self.read_pixels, self.total_calls
        )
    }
}

pub struct FpsCounter {
    time: Instant,
    frames: u32,
}
impl FpsCounter {
    pub fn start() -> Self {
        FpsCounter {
            time: Instant::now(),
            frames: 0,
        }
    }

    /// Count a frame. Once a second, this prints and returns the frame rate.
    pub fn count_frame(&mut self, label: std::fmt::Arguments<'_>) -> Option<f32> {
        self.frames += 1;
        let now = Instant::now();
        let duration = now - self.time;
        if duration >= Duration::from_secs(1) {
            self.time = now;
            let fps = std::mem::take(&mut self.frames) as f32 / duration.as_secs_f32();
            echo!("debugGL: {} FPS: {:.2}", label, fps);
            Some(fps)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_from_counters() {
        let mut counters = CallCounters::new();
        for _ in 0..3 {
            counters.increment(GLFunc::DrawArrays);
        }
        counters.increment(GLFunc::DrawElementsInstanced);
        counters.increment(GLFunc::ReadPixels);
        counters.increment(GLFunc::Clear);
        // Not a draw call, despite the name.
        counters.increment(GLFunc::DrawBuffer);

        let stats = FrameStatistics::from_counters(&counters);
        assert_eq!(
            stats,
            FrameStatistics {
                draw_calls: 4,
                read_pixels: 1,
                total_calls: 7,
            }
        );
        assert_eq!(
            stats.to_string(),
            "4 draw calls, 1 pixel reads, 7 GL calls in total"
        );
    }

    #[test]
    fn fps_counter_waits_a_second() {
        let mut fps = FpsCounter::start();
        assert_eq!(fps.count_frame(format_args!("test")), None);
        fps.time -= Duration::from_secs(2);
        let rate = fps.count_frame(format_args!("test")).unwrap();
        assert!(rate > 0.0 && rate <= 1.0, "{}", rate);
    }
}
