// src/lib.rs

//! Windowed tilt/motion analyser for a walk-in-place locomotion platform.
//!
//! Converts a stream of timestamped motion samples (planar position/tilt
//! plus three-axis acceleration) into a continuously updated 2D walking
//! velocity estimate. The host feeds readings with [`WalkAnalyzer::push`]
//! and asks "what is the current walking velocity?" with
//! [`WalkAnalyzer::query`] — typically once per simulation tick.
//!
//! The analyser keeps the N most recent samples in a ring buffer. Once the
//! buffer has warmed up, each query runs a tilt test on the latest sample,
//! derives a direction from its bearing, scales it by a piecewise-linear
//! speed map, and computes three advisory qualifier signals (shake, buffer
//! amplitude, mean-crossing frequency) exposed as [`MotionDiagnostics`].
//!
//! ```
//! use walk_detector::{MotionSample, WalkAnalyzer};
//!
//! let mut analyzer: WalkAnalyzer<16> = WalkAnalyzer::new();
//! for t in 0..16 {
//!     analyzer.push(MotionSample::new(t, 0, 10, [0.02, 0.01, 0.0]));
//! }
//! let velocity = analyzer.query();
//! assert!(velocity.y > 0.0);
//! ```

mod analyzer;
mod config;
mod metrics;
mod types;
mod window;

pub use analyzer::{MotionDiagnostics, WalkAnalyzer};
pub use metrics::{AnalyzerMetrics, MetricsSummary};
pub use types::{
    Config, DetectionConfig, LoggingConfig, MotionSample, QualifierConfig, SpeedMapConfig,
    WalkVector,
};
pub use window::SampleWindow;
