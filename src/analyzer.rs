// src/analyzer.rs
//
// Windowed walk analyser. Owns the ring buffer of recent samples and
// derives the current walking-velocity estimate on demand:
//
//   1. Tilt test: squared planar magnitude of the latest sample against
//      the detection threshold (exclusive).
//   2. Direction: the latest sample's own bearing, as the reference
//      vector (1, 0) rotated by atan2(y, x).
//   3. Qualifiers: shake / buffer amplitude / mean-crossing frequency.
//      Advisory only — surfaced as diagnostics and log events, never fed
//      into the returned vector.
//   4. Speed: piecewise-linear map of the squared magnitude, clamped at
//      the top of the input domain.

use crate::metrics::AnalyzerMetrics;
use crate::types::{Config, MotionSample, WalkVector};
use crate::window::SampleWindow;
use tracing::{debug, trace};

/// Qualifier signals computed for one tilted query.
///
/// The speed computation is still a placeholder in the detection policy;
/// these signals are intended as future gating inputs and are exposed so
/// the host can log or inspect them. They never influence the estimate.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct MotionDiagnostics {
    /// Sum of absolute acceleration components of the latest sample.
    pub shake: f32,
    /// sqrt(max) - sqrt(min) of squared scale across the window, truncated
    /// to whole length units.
    pub amplitude: i64,
    /// Mean-crossings of squared scale across the window, newest to oldest.
    pub freq_estimate: u32,
    pub shake_high: bool,
    pub amplitude_high: bool,
    pub freq_high: bool,
}

/// Windowed analyser over the N most recent samples.
///
/// Single-threaded by design: `push` mutates the ring and `query` runs
/// multi-pass scans over it, so a shared instance needs external locking.
///
/// Input sanity is the caller's job. NaN or infinite acceleration values
/// are neither validated nor clamped; they propagate through the shake
/// qualifier and leave the velocity arithmetic untouched (the planar
/// reading is integral and cannot be non-finite).
pub struct WalkAnalyzer<const N: usize> {
    window: SampleWindow<N>,
    config: Config,
    estimate: WalkVector,
    diagnostics: Option<MotionDiagnostics>,
    metrics: AnalyzerMetrics,
}

impl<const N: usize> WalkAnalyzer<N> {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            window: SampleWindow::new(),
            config,
            estimate: WalkVector::ZERO,
            diagnostics: None,
            metrics: AnalyzerMetrics::new(),
        }
    }

    /// Feed one sensor reading into the window. Always succeeds; the
    /// oldest surviving sample is discarded once the window is full.
    pub fn push(&mut self, sample: MotionSample) {
        self.window.push(sample);
        self.metrics.inc(&self.metrics.samples_pushed);
    }

    /// Current walking-velocity estimate, recomputed from the window
    /// contents. Returns the zero vector until N samples have been pushed
    /// (not-yet-warm is a defined output, not a fault) and whenever the
    /// platform is not tilted past the detection threshold.
    pub fn query(&mut self) -> WalkVector {
        self.metrics.inc(&self.metrics.queries);

        if !self.window.is_warm() {
            self.metrics.inc(&self.metrics.warmup_queries);
            trace!(
                "window not warm ({}/{} samples), returning zero vector",
                self.window.pushed(),
                N
            );
            return WalkVector::ZERO;
        }

        self.compute();
        self.estimate
    }

    /// Qualifier signals from the most recent tilted query, if any.
    pub fn diagnostics(&self) -> Option<MotionDiagnostics> {
        self.diagnostics
    }

    /// The estimate from the most recent warm query.
    pub fn last_estimate(&self) -> WalkVector {
        self.estimate
    }

    pub fn is_warm(&self) -> bool {
        self.window.is_warm()
    }

    pub fn metrics(&self) -> &AnalyzerMetrics {
        &self.metrics
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn compute(&mut self) {
        let latest = *self.window.latest();
        let lsq = latest.squared_scale();

        if lsq <= self.config.detection.detection_threshold {
            debug!("platform not tilted (lsq={})", lsq);
            self.estimate = WalkVector::ZERO;
            self.diagnostics = None;
            return;
        }

        self.metrics.inc(&self.metrics.tilted_queries);

        let angle = (latest.y as f32).atan2(latest.x as f32);
        let (s, c) = angle.sin_cos();
        // Reference direction (1, 0) rotated by the tilt bearing
        let mut estimate = WalkVector::new(c, s);

        let diag = self.compute_diagnostics(&latest);
        let multiplier = self.speed_multiplier(lsq);
        estimate *= multiplier;

        debug!(
            "platform tilted (lsq={}, angle={:.3}, speed={:.3})",
            lsq, angle, multiplier
        );

        self.estimate = estimate;
        self.diagnostics = Some(diag);
    }

    fn compute_diagnostics(&self, latest: &MotionSample) -> MotionDiagnostics {
        let thresholds = &self.config.qualifiers;

        let shake = latest.shake_magnitude();
        let amplitude = self.buffer_amplitude();
        let freq_estimate = self.freq_estimate();

        let diag = MotionDiagnostics {
            shake,
            amplitude,
            freq_estimate,
            shake_high: shake > thresholds.shake_high,
            amplitude_high: amplitude > thresholds.amplitude_high,
            freq_high: freq_estimate > thresholds.freq_high,
        };

        if diag.shake_high {
            self.metrics.inc(&self.metrics.shake_flags);
            debug!("accelerometer shake detected (shake={:.3})", shake);
        }
        if diag.amplitude_high {
            self.metrics.inc(&self.metrics.amplitude_flags);
            debug!("high buffer amplitude detected (amplitude={})", amplitude);
        }
        if diag.freq_high {
            self.metrics.inc(&self.metrics.freq_flags);
            debug!("high frequency estimate detected (freq={})", freq_estimate);
        }

        diag
    }

    /// Min and max squared scale across the window. Pure scan, no state
    /// retained between calls.
    fn min_max_squared_scale(&self) -> (i64, i64) {
        let mut min = self.window.latest().squared_scale();
        let mut max = min;
        for sample in self.window.iter() {
            let scale = sample.squared_scale();
            if scale < min {
                min = scale;
            }
            if scale > max {
                max = scale;
            }
        }
        (min, max)
    }

    /// Spread of the tilt signal across the window in length units.
    /// Computed in floating point, then truncated to whole units.
    fn buffer_amplitude(&self) -> i64 {
        let (min, max) = self.min_max_squared_scale();
        ((max as f64).sqrt() - (min as f64).sqrt()) as i64
    }

    /// Arithmetic mean of squared scale over all N samples, integer
    /// division.
    fn mean_squared_scale(&self) -> i64 {
        let sum: i64 = self.window.iter().map(|s| s.squared_scale()).sum();
        sum / N as i64
    }

    /// Count of sign changes of (squared_scale - mean) scanning newest to
    /// oldest. Samples equal to the mean flip nothing. Approximates the
    /// oscillation rate of the tilt signal within the window.
    fn freq_estimate(&self) -> u32 {
        let mean = self.mean_squared_scale();
        let mut positive = self.window.latest().squared_scale() > mean;
        let mut crossings = 0;

        for sample in self.window.iter() {
            let scale = sample.squared_scale();
            if positive && scale < mean {
                positive = false;
                crossings += 1;
            } else if !positive && scale > mean {
                positive = true;
                crossings += 1;
            }
        }

        crossings
    }

    fn speed_multiplier(&self, lsq: i64) -> f32 {
        let map = &self.config.speed;
        if (lsq as f32) < map.input_max {
            linear_map(
                lsq as f32,
                map.input_min,
                map.input_max,
                map.output_min,
                map.output_max,
            )
        } else {
            map.output_max
        }
    }
}

impl<const N: usize> Default for WalkAnalyzer<N> {
    fn default() -> Self {
        Self::new()
    }
}

fn linear_map(x: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}
