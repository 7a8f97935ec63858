//! # Beatmark Session
//!
//! Session state and the operator surface over it:
//! - **Scene**: curves, markers, frame bounds, selection
//! - **Operators**: insert beat markers, unbake, copy/paste, band bake
//! - **Scheduler**: the cooperative tick-driven driver for long-running
//!   operations (chunked paste, batch bake)
//!
//! Everything is single-threaded and tick-driven: long-running work is a
//! state machine advanced by host timer events, doing a bounded amount of
//! work per tick and yielding back to the host event loop in between.
//!
//! ## Example
//!
//! ```rust
//! use beatmark_core::{Curve, CurvePath, InsertionRange, Sample};
//! use beatmark_session::{NullBaker, Scene, Session};
//!
//! let mut scene = Scene::new(0, 100);
//! let samples = (0..100)
//!     .map(|f| Sample::new(f, if f % 25 == 10 { 1.0 } else { 0.0 }))
//!     .collect();
//! let mut curve = Curve::from_samples(CurvePath::new("bake.intensity", 0), samples);
//! curve.selected = true;
//! scene.add_curve(curve);
//!
//! let mut session = Session::new(scene, NullBaker);
//! let inserted = session
//!     .insert_beat_markers(InsertionRange::FullLength, 0.4)
//!     .unwrap();
//! assert_eq!(inserted, 4);
//! ```

pub mod bake;
pub mod config;
pub mod error;
pub mod markers;
pub mod scene;
pub mod sched;
pub mod session;
pub mod transfer;
pub mod unbake;

pub use bake::{BakeError, BakeRegistry, BandBaker, BatchBakeOp, NullBaker};
pub use config::SessionConfig;
pub use error::{Result, SessionError};
pub use markers::sync_markers;
pub use scene::Scene;
pub use sched::{
    ManualTimer, ModalEvent, ModalOp, ModalRunner, OpStatus, RunState, TimerHandle, TimerService,
};
pub use session::Session;
pub use transfer::{CopyBuffer, PasteOp};
pub use unbake::unbake_selected;
