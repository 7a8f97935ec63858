//! # Beatmark Analysis
//!
//! Analysis passes over baked amplitude curves:
//! - **Onset detection**: falling-edge-after-peak beat detection with
//!   four-tap peak-hold smoothing and hysteresis
//! - **Curve reduction**: collapsing a dense sample stream into the
//!   minimal keyframe set ("unbake")
//!
//! Both passes are pure functions of curve data, with no host dependencies.
//!
//! ## Example
//!
//! ```rust
//! use beatmark_analysis::{reduce_samples, OnsetDetector};
//! use beatmark_core::{Curve, CurvePath, FrameRange, Sample};
//!
//! let samples: Vec<Sample> = (0..40)
//!     .map(|f| Sample::new(f, if f % 10 == 0 { 1.0 } else { 0.0 }))
//!     .collect();
//! let curve = Curve::from_samples(CurvePath::new("bake.intensity", 0), samples);
//!
//! let detector = OnsetDetector::new(0.4);
//! let onsets = detector.detect(&curve, FrameRange::new(0, 40));
//! assert!(!onsets.is_empty());
//!
//! let keyframes = reduce_samples(curve.samples());
//! assert!(!keyframes.is_empty());
//! ```

pub mod onset;
pub mod reduce;

pub use onset::OnsetDetector;
pub use reduce::{reduce_curve, reduce_samples};
