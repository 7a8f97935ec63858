//! Sound-to-curve bake orchestration.
//!
//! The actual frequency-band bake is the host's job; this module wires an
//! external [`BandBaker`] into the session: a registry that remembers
//! which bands are already baked, and a batch operation that walks the
//! fixed band table one bake per throttle window.

use beatmark_core::{BakeDescriptor, CurvePath, FREQUENCY_BANDS};
use thiserror::Error;

use crate::error::Result;
use crate::sched::{ModalOp, OpStatus};
use crate::session::Session;

/// Failure reported by a [`BandBaker`].
///
/// Treated as a hard stop of the running operation, not a retry.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct BakeError {
    pub message: String,
}

impl BakeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// External single-band bake collaborator.
///
/// Given a source file and a frequency band, produces the baked amplitude
/// samples. Implemented by host glue; closures work for tests.
pub trait BandBaker {
    fn bake(&mut self, descriptor: &BakeDescriptor)
        -> core::result::Result<Vec<beatmark_core::Sample>, BakeError>;
}

impl<F> BandBaker for F
where
    F: FnMut(&BakeDescriptor) -> core::result::Result<Vec<beatmark_core::Sample>, BakeError>,
{
    fn bake(
        &mut self,
        descriptor: &BakeDescriptor,
    ) -> core::result::Result<Vec<beatmark_core::Sample>, BakeError> {
        self(descriptor)
    }
}

/// Baker for sessions that never bake; fails every request.
#[derive(Debug, Default)]
pub struct NullBaker;

impl BandBaker for NullBaker {
    fn bake(
        &mut self,
        _descriptor: &BakeDescriptor,
    ) -> core::result::Result<Vec<beatmark_core::Sample>, BakeError> {
        Err(BakeError::new("no band baker attached"))
    }
}

/// Registry of bands baked in this session.
///
/// Each registered descriptor owns one curve slot; a lookup hit means
/// "already baked this exact band" and skips recomputation.
#[derive(Debug, Default)]
pub struct BakeRegistry {
    entries: Vec<BakeDescriptor>,
}

impl BakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Curve path assigned to registry slot `index`.
    pub fn curve_path(index: usize) -> CurvePath {
        CurvePath::new(format!("bake.bands[{index}].intensity"), 0)
    }

    pub fn find(&self, descriptor: &BakeDescriptor) -> Option<usize> {
        self.entries.iter().position(|e| e == descriptor)
    }

    pub fn register(&mut self, descriptor: BakeDescriptor) -> usize {
        self.entries.push(descriptor);
        self.entries.len() - 1
    }

    /// Paths of every registered bake curve, in slot order.
    pub fn paths(&self) -> impl Iterator<Item = CurvePath> + '_ {
        (0..self.entries.len()).map(Self::curve_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Batch bake of every band in the fixed frequency table for one source.
///
/// Acts once per throttle window of timer ticks; the index starts at the
/// -1 pre-start sentinel so the first acting tick only surfaces progress
/// text before any bake runs. A baker failure stops the batch.
pub struct BatchBakeOp {
    bands: Vec<BakeDescriptor>,
    index: isize,
    counter: usize,
    throttle: usize,
    cancelled: bool,
}

impl BatchBakeOp {
    pub(crate) fn new(source: &str, throttle: usize) -> Self {
        let bands = FREQUENCY_BANDS
            .iter()
            .map(|band| BakeDescriptor::for_band(source, band))
            .collect();
        Self {
            bands,
            index: -1,
            counter: 0,
            throttle,
            cancelled: false,
        }
    }

    /// Bands fully baked so far.
    pub fn bands_baked(&self) -> usize {
        self.index.max(0) as usize
    }

    pub fn band_count(&self) -> usize {
        self.bands.len()
    }
}

impl ModalOp for BatchBakeOp {
    fn tick(&mut self, session: &mut Session) -> Result<OpStatus> {
        if self.cancelled {
            return Ok(OpStatus::Cancelled);
        }
        if self.index >= self.bands.len() as isize {
            return Ok(OpStatus::Finished);
        }

        self.counter += 1;
        if self.counter % self.throttle != 0 {
            return Ok(OpStatus::Running);
        }

        if self.index == -1 {
            // Warm-up tick: surface progress before the first bake.
            self.index = 0;
            return Ok(OpStatus::Running);
        }

        let descriptor = self.bands[self.index as usize].clone();
        session.bake_band(descriptor)?;
        self.index += 1;

        if self.index >= self.bands.len() as isize {
            tracing::info!(bands = self.bands.len(), "batch bake finished");
            Ok(OpStatus::Finished)
        } else {
            Ok(OpStatus::Running)
        }
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }

    fn is_done(&self) -> bool {
        self.cancelled || self.index >= self.bands.len() as isize
    }

    fn progress(&self) -> Option<String> {
        let current = (self.index + 1).min(self.bands.len() as isize);
        Some(format!("Bake: {} of {}", current, self.bands.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;
    use beatmark_core::Sample;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_baker(calls: Rc<Cell<usize>>) -> impl BandBaker {
        move |descriptor: &BakeDescriptor| -> core::result::Result<Vec<Sample>, BakeError> {
            calls.set(calls.get() + 1);
            let base = descriptor.low as i32 % 10;
            Ok((0..4).map(|f| Sample::new(f, (f + base) as f32)).collect())
        }
    }

    #[test]
    fn test_registry_assigns_slot_paths() {
        let mut registry = BakeRegistry::new();
        let idx = registry.register(BakeDescriptor::new("song.ogg", 80.0, 250.0));
        assert_eq!(idx, 0);
        assert_eq!(
            BakeRegistry::curve_path(idx).data_path,
            "bake.bands[0].intensity"
        );
        assert_eq!(
            registry.find(&BakeDescriptor::new("song.ogg", 80.0, 250.0)),
            Some(0)
        );
        assert_eq!(
            registry.find(&BakeDescriptor::new("song.ogg", 20.0, 40.0)),
            None
        );
    }

    #[test]
    fn test_batch_throttles_and_walks_all_bands() {
        let calls = Rc::new(Cell::new(0));
        let mut session = Session::new(Scene::new(1, 250), counting_baker(calls.clone()));
        let mut op = session.start_batch_bake("song.ogg");

        // Warm-up window plus one window per band.
        let windows = 1 + op.band_count();
        for tick in 1..=(windows * 30) {
            let status = op.tick(&mut session).unwrap();
            if tick < windows * 30 {
                assert_eq!(status, OpStatus::Running);
            } else {
                assert_eq!(status, OpStatus::Finished);
            }
        }

        assert_eq!(calls.get(), FREQUENCY_BANDS.len());
        assert_eq!(session.registry.len(), FREQUENCY_BANDS.len());
        for path in session.registry.paths().collect::<Vec<_>>() {
            assert!(session.scene.curve(&path).is_some_and(|c| c.is_baked()));
        }
    }

    #[test]
    fn test_batch_progress_text() {
        let calls = Rc::new(Cell::new(0));
        let mut session = Session::new(Scene::new(1, 250), counting_baker(calls));
        let mut op = session.start_batch_bake("song.ogg");

        assert_eq!(op.progress().as_deref(), Some("Bake: 0 of 8"));
        for _ in 0..30 {
            op.tick(&mut session).unwrap();
        }
        // Warm-up done, first bake pending.
        assert_eq!(op.progress().as_deref(), Some("Bake: 1 of 8"));
        for _ in 0..30 {
            op.tick(&mut session).unwrap();
        }
        assert_eq!(op.progress().as_deref(), Some("Bake: 2 of 8"));
    }

    #[test]
    fn test_bake_failure_stops_batch() {
        let failing = |_: &BakeDescriptor| -> core::result::Result<Vec<Sample>, BakeError> {
            Err(BakeError::new("decode error"))
        };
        let mut session = Session::new(Scene::new(1, 250), failing);
        let mut op = session.start_batch_bake("song.ogg");

        // Warm-up window succeeds; the first real bake fails.
        let mut failed = false;
        for _ in 0..60 {
            if op.tick(&mut session).is_err() {
                failed = true;
                break;
            }
        }
        assert!(failed);
        assert_eq!(op.bands_baked(), 0);
    }

    #[test]
    fn test_rebake_same_band_reuses_curve() {
        let calls = Rc::new(Cell::new(0));
        let mut session = Session::new(Scene::new(1, 250), counting_baker(calls.clone()));

        let descriptor = BakeDescriptor::new("song.ogg", 80.0, 250.0);
        let first = session.bake_band(descriptor.clone()).unwrap();
        let second = session.bake_band(descriptor).unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
        assert_eq!(session.registry.len(), 1);
    }
}
