// src/types.rs

use serde::{Deserialize, Serialize};

/// One timestamped reading from the platform: planar position/tilt plus
/// three-axis acceleration.
///
/// Samples are plain values. The squared planar magnitude is computed once
/// at construction (it is read repeatedly by every buffer scan during a
/// query), so copies carry it along and repeated reads are free.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    /// Monotonically increasing timestamp, arbitrary unit.
    pub timestamp: i64,
    /// Planar position/tilt reading.
    pub x: i32,
    pub y: i32,
    /// Acceleration reading [ax, ay, az].
    pub accel: [f32; 3],
    squared_scale: i64,
}

impl MotionSample {
    pub fn new(timestamp: i64, x: i32, y: i32, accel: [f32; 3]) -> Self {
        Self {
            timestamp,
            x,
            y,
            accel,
            squared_scale: x as i64 * x as i64 + y as i64 * y as i64,
        }
    }

    /// Squared magnitude of the planar reading, the primary tilt signal.
    pub fn squared_scale(&self) -> i64 {
        self.squared_scale
    }

    /// Coarse vibration indicator: sum of absolute acceleration components.
    /// Computed fresh on every call.
    pub fn shake_magnitude(&self) -> f32 {
        self.accel[0].abs() + self.accel[1].abs() + self.accel[2].abs()
    }
}

/// A 2D walking-velocity vector. Value semantics throughout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WalkVector {
    pub x: f32,
    pub y: f32,
}

impl WalkVector {
    pub const ZERO: WalkVector = WalkVector { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn squared_length(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(&self) -> f32 {
        self.squared_length().sqrt()
    }

    /// Scale to unit length. No-op when the length is zero.
    pub fn normalize(&mut self) {
        let l = self.length();
        if l > 0.0 {
            self.x /= l;
            self.y /= l;
        }
    }
}

impl std::ops::Mul<f32> for WalkVector {
    type Output = WalkVector;

    fn mul(self, s: f32) -> WalkVector {
        WalkVector {
            x: self.x * s,
            y: self.y * s,
        }
    }
}

impl std::ops::MulAssign<f32> for WalkVector {
    fn mul_assign(&mut self, s: f32) {
        *self = *self * s;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub detection: DetectionConfig,
    pub qualifiers: QualifierConfig,
    pub speed: SpeedMapConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Tilt threshold in squared-scale units. Exclusive: a sample at
    /// exactly this value counts as not tilted.
    pub detection_threshold: i64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            detection_threshold: 15,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QualifierConfig {
    /// Shake magnitude above which the accelerometer is flagged.
    pub shake_high: f32,
    /// Buffer amplitude (length units) above which the spread is flagged.
    pub amplitude_high: i64,
    /// Mean-crossing count above which oscillation is flagged.
    pub freq_high: u32,
}

impl Default for QualifierConfig {
    fn default() -> Self {
        Self {
            shake_high: 0.25,
            amplitude_high: 6,
            freq_high: 3,
        }
    }
}

/// Piecewise-linear mapping from squared tilt magnitude to a speed
/// multiplier. Inputs past `input_max` clamp to `output_max`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedMapConfig {
    pub input_min: f32,
    pub input_max: f32,
    pub output_min: f32,
    pub output_max: f32,
}

impl Default for SpeedMapConfig {
    fn default() -> Self {
        Self {
            input_min: 15.0,
            input_max: 300.0,
            output_min: 1.0,
            output_max: 3.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
