//! # Beatmark Core
//!
//! Data model for audio-driven animation curves and timeline markers.
//!
//! This crate provides the types the analysis and session layers operate on:
//! - **Curves**: sampled (dense, baked) and keyframed (sparse, editable)
//!   frame→value functions with fractional-frame evaluation
//! - **Markers**: the ordered scene-level marker set
//! - **Frequency bands**: the fixed band table and bake identity
//! - **Frame ranges**: half-open ranges plus the insertion-range policy
//!
//! All types are plain data with no host dependencies.
//!
//! ## Example
//!
//! ```rust
//! use beatmark_core::{Curve, CurvePath, Sample};
//!
//! let samples = vec![Sample::new(0, 0.0), Sample::new(1, 0.5), Sample::new(2, 1.0)];
//! let curve = Curve::from_samples(CurvePath::new("bake.intensity", 0), samples);
//!
//! // Defined at fractional frames via linear interpolation.
//! assert_eq!(curve.evaluate(0.5), 0.25);
//! ```

pub mod band;
pub mod curve;
pub mod error;
pub mod marker;
pub mod range;

pub use band::{BakeDescriptor, FrequencyBand, DEFAULT_BAND, FREQUENCY_BANDS};
pub use curve::{Curve, CurvePath, Interpolation, Keyframe, Sample};
pub use error::{Error, Result};
pub use marker::{Marker, MarkerSet};
pub use range::{FrameRange, InsertionRange};
