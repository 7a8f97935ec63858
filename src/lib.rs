//! # Beatmark - Audio-Driven Timeline Markers
//!
//! Bake audio amplitude into animation curves and convert those curves
//! into discrete timeline markers ("beats").
//!
//! ## Architecture
//!
//! Beatmark is an umbrella crate that coordinates:
//! - **beatmark-core** - Data model (curves, keyframes, markers, bands, ranges)
//! - **beatmark-analysis** - Analysis passes (onset detection, curve reduction)
//! - **beatmark-session** - Session state, operators, and the cooperative
//!   tick scheduler for long-running work
//!
//! ## Quick Start
//!
//! ```rust
//! use beatmark::prelude::*;
//!
//! // Build a scene with a baked amplitude curve selected.
//! let mut scene = Scene::new(0, 100);
//! let samples = (0..100)
//!     .map(|f| Sample::new(f, if f % 20 == 5 { 1.0 } else { 0.0 }))
//!     .collect();
//! let mut curve = Curve::from_samples(CurvePath::new("bake.intensity", 0), samples);
//! curve.selected = true;
//! scene.add_curve(curve);
//!
//! // Detect beats and mark them on the timeline.
//! let mut session = Session::new(scene, NullBaker);
//! session
//!     .insert_beat_markers(InsertionRange::FullLength, 0.4)
//!     .unwrap();
//! assert!(!session.scene.markers.is_empty());
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - Everything (`full`)
//! - `analysis` - Onset detection and curve reduction
//! - `session` - Session state, operators, scheduler (implies `analysis`)
//! - `serialization` - Serde support on the core data types

/// Re-export of beatmark-core for direct access
pub use beatmark_core as core;

// Core types
pub use beatmark_core::{
    BakeDescriptor,
    Curve,
    CurvePath,
    // Error
    Error,
    FrameRange,
    FrequencyBand,
    InsertionRange,
    Interpolation,
    Keyframe,
    Marker,
    MarkerSet,
    Result,
    Sample,
    DEFAULT_BAND,
    FREQUENCY_BANDS,
};

/// Re-export of beatmark-analysis for direct access
#[cfg(feature = "analysis")]
pub use beatmark_analysis as analysis;

#[cfg(feature = "analysis")]
pub use beatmark_analysis::{reduce_curve, reduce_samples, OnsetDetector};

/// Re-export of beatmark-session for direct access
#[cfg(feature = "session")]
pub use beatmark_session as session;

#[cfg(feature = "session")]
pub use beatmark_session::{
    sync_markers, unbake_selected, BakeError, BakeRegistry, BandBaker, BatchBakeOp, CopyBuffer,
    ManualTimer, ModalEvent, ModalOp, ModalRunner, NullBaker, OpStatus, PasteOp, RunState, Scene,
    Session, SessionConfig, SessionError, TimerHandle, TimerService,
};

/// Commonly used types, for glob import.
pub mod prelude {
    pub use beatmark_core::{
        BakeDescriptor, Curve, CurvePath, FrameRange, FrequencyBand, InsertionRange, Interpolation,
        Keyframe, Marker, MarkerSet, Sample, DEFAULT_BAND, FREQUENCY_BANDS,
    };

    #[cfg(feature = "analysis")]
    pub use beatmark_analysis::{reduce_curve, reduce_samples, OnsetDetector};

    #[cfg(feature = "session")]
    pub use beatmark_session::{
        BandBaker, BatchBakeOp, ManualTimer, ModalEvent, ModalOp, ModalRunner, NullBaker, OpStatus,
        PasteOp, RunState, Scene, Session, SessionConfig, SessionError, TimerService,
    };
}
