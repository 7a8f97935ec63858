//! Beat (onset) detection over baked amplitude curves.
//!
//! Scans an integer frame range and picks the frames where a smoothed
//! amplitude peaks and starts falling while still above a threshold. A
//! hysteresis latch suppresses re-triggering on sustained loud passages:
//! once an onset fires, no further onset is emitted until the amplitude
//! drops back under the threshold.

use beatmark_core::{Curve, FrameRange};

/// Evaluation offsets of the four-tap peak-hold smoothing window.
///
/// Taking the maximum over a short window behind and just ahead of the
/// queried position damps single-sample noise spikes.
const SMOOTHING_OFFSETS: [f64; 4] = [-0.5, -0.25, 0.0, 0.25];

/// Falling-edge-after-peak onset detector with hysteresis.
///
/// # Example
///
/// ```rust
/// use beatmark_analysis::OnsetDetector;
/// use beatmark_core::{Curve, CurvePath, FrameRange, Sample};
///
/// let samples = (0..20)
///     .map(|f| Sample::new(f, if f == 10 { 1.0 } else { 0.0 }))
///     .collect();
/// let curve = Curve::from_samples(CurvePath::new("bake.intensity", 0), samples);
///
/// let detector = OnsetDetector::new(0.4);
/// let onsets = detector.detect(&curve, FrameRange::new(0, 20));
/// assert_eq!(onsets, vec![10]);
/// ```
#[derive(Debug, Clone)]
pub struct OnsetDetector {
    threshold: f32,
}

impl OnsetDetector {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold;
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Peak-hold amplitude around `frame`: the maximum of curve
    /// evaluations at offsets {-0.5, -0.25, 0, +0.25}.
    pub fn smoothed_value(curve: &Curve, frame: f64) -> f32 {
        SMOOTHING_OFFSETS
            .iter()
            .map(|offset| curve.evaluate(frame + offset))
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// Detect onsets over `[range.start, range.end)`, ordered by frame.
    ///
    /// An onset fires at frame `f` when the smoothed amplitude is
    /// descending (`value(f) > value(f+1)`), the next value is still
    /// strictly above the threshold, and the detector is not armed.
    /// Dropping strictly below the threshold disarms it. All comparisons
    /// are strict; a value exactly at the threshold neither triggers nor
    /// disarms. An empty range yields no onsets.
    pub fn detect(&self, curve: &Curve, range: FrameRange) -> Vec<i32> {
        let mut onsets = Vec::new();
        let mut armed = false;

        for frame in range.start..range.end {
            let value = Self::smoothed_value(curve, frame as f64);
            let next = Self::smoothed_value(curve, (frame + 1) as f64);

            if value > next && next > self.threshold && !armed {
                armed = true;
                onsets.push(frame);
            }
            if value < self.threshold {
                armed = false;
            }
        }

        onsets
    }
}
