//! Engines used by the unit tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::config::ImpulseResource;
use crate::engine::ConvolutionEngine;
use crate::error::EngineError;

/// Records everything it is handed and renders a deterministic stereo mix:
/// left is the plain sum of the frame, right weights channel `c` by `c + 1`.
pub(crate) struct RecordingEngine {
    pub impulse: ImpulseResource,
    pub sample_rate: f64,
    pub input_channels: usize,
    pub received: Vec<f32>,
    pub frame_counts: Vec<usize>,
    pub resets: usize,
}

impl ConvolutionEngine for RecordingEngine {
    fn load(
        impulse: &ImpulseResource,
        sample_rate: f64,
        input_channels: usize,
    ) -> Result<Self, EngineError> {
        Ok(Self {
            impulse: *impulse,
            sample_rate,
            input_channels,
            received: Vec::new(),
            frame_counts: Vec::new(),
            resets: 0,
        })
    }

    fn process(&mut self, input: &[f32], frame_count: usize, output: &mut [f32]) {
        assert_eq!(input.len(), frame_count * self.input_channels);
        assert_eq!(output.len(), frame_count * 2);
        self.received.extend_from_slice(input);
        self.frame_counts.push(frame_count);
        if self.input_channels == 0 {
            output.fill(0.0);
            return;
        }

        let (left, right) = mix(input, self.input_channels);
        for f in 0..frame_count {
            output[f * 2] = left[f];
            output[f * 2 + 1] = right[f];
        }
    }

    fn reset(&mut self) {
        self.resets += 1;
    }
}

/// The stereo result [`RecordingEngine`] produces for an interleaved block.
pub(crate) fn mix(interleaved: &[f32], channels: usize) -> (Vec<f32>, Vec<f32>) {
    if channels == 0 {
        return (Vec::new(), Vec::new());
    }
    interleaved
        .chunks_exact(channels)
        .map(|frame| {
            let left: f32 = frame.iter().sum();
            let right: f32 = frame
                .iter()
                .enumerate()
                .map(|(c, s)| s * (c + 1) as f32)
                .sum();
            (left, right)
        })
        .unzip()
}

/// Never loads.
pub(crate) struct FailingEngine;

impl ConvolutionEngine for FailingEngine {
    fn load(impulse: &ImpulseResource, _: f64, _: usize) -> Result<Self, EngineError> {
        Err(EngineError::new(format!("{} not found", impulse)))
    }

    fn process(&mut self, _: &[f32], _: usize, output: &mut [f32]) {
        output.fill(0.0);
    }

    fn reset(&mut self) {}
}

/// Shared observations of a [`SlowEngine`].
#[derive(Default)]
pub(crate) struct TeardownTrace {
    pub finished: AtomicBool,
    pub released: AtomicBool,
    pub released_after_finish: AtomicBool,
}

/// Takes a while inside `process` and reports when it is entered, finished
/// and dropped.
#[derive(Default)]
pub(crate) struct SlowEngine {
    entered: Option<Sender<()>>,
    trace: Option<Arc<TeardownTrace>>,
}

impl SlowEngine {
    pub fn attach(&mut self, entered: Sender<()>, trace: Arc<TeardownTrace>) {
        self.entered = Some(entered);
        self.trace = Some(trace);
    }
}

impl ConvolutionEngine for SlowEngine {
    fn load(_: &ImpulseResource, _: f64, _: usize) -> Result<Self, EngineError> {
        Ok(Self::default())
    }

    fn process(&mut self, _: &[f32], _: usize, output: &mut [f32]) {
        if let Some(entered) = &self.entered {
            let _ = entered.send(());
        }
        thread::sleep(Duration::from_millis(100));
        output.fill(0.25);
        if let Some(trace) = &self.trace {
            trace.finished.store(true, Ordering::SeqCst);
        }
    }

    fn reset(&mut self) {}
}

impl Drop for SlowEngine {
    fn drop(&mut self) {
        if let Some(trace) = &self.trace {
            let finished = trace.finished.load(Ordering::SeqCst);
            trace.released_after_finish.store(finished, Ordering::SeqCst);
            trace.released.store(true, Ordering::SeqCst);
        }
    }
}
