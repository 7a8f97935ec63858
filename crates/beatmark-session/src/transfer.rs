//! Copy/paste of baked sample streams.
//!
//! Copy snapshots a source curve's samples into the session's
//! [`CopyBuffer`]; paste replays the snapshot onto target curves as
//! keyframes, chunked across scheduler ticks so the host UI thread is
//! never blocked.

use std::sync::Arc;

use beatmark_core::{CurvePath, Keyframe, Sample};

use crate::error::Result;
use crate::sched::{ModalOp, OpStatus};
use crate::session::Session;

/// Snapshot buffer for copied samples.
///
/// Owned by the [`Session`] and replaced wholesale by each copy. Pastes
/// hold the underlying [`Arc`] snapshot, so neither a later copy nor an
/// edit of the source curve can affect a paste already in flight.
#[derive(Debug, Clone)]
pub struct CopyBuffer {
    entries: Arc<[Sample]>,
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self {
            entries: Vec::new().into(),
        }
    }
}

impl CopyBuffer {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Immutable handle on the current contents.
    pub fn snapshot(&self) -> Arc<[Sample]> {
        Arc::clone(&self.entries)
    }

    pub(crate) fn replace(&mut self, samples: &[Sample]) {
        self.entries = samples.to_vec().into();
    }
}

/// Incremental paste of a buffer snapshot onto target curves.
///
/// Inserts `chunk_size` keyframes per tick into *every* target curve
/// simultaneously, with linear interpolation, until the snapshot is
/// exhausted. The target set is fixed at invocation; targets that
/// disappear or become locked mid-run are skipped, not fatal.
pub struct PasteOp {
    buffer: Arc<[Sample]>,
    targets: Vec<CurvePath>,
    inserted: usize,
    chunk_size: usize,
    cancelled: bool,
}

impl PasteOp {
    pub(crate) fn new(buffer: Arc<[Sample]>, targets: Vec<CurvePath>, chunk_size: usize) -> Self {
        Self {
            buffer,
            targets,
            inserted: 0,
            chunk_size,
            cancelled: false,
        }
    }

    /// Keyframes inserted so far, per target.
    pub fn inserted(&self) -> usize {
        self.inserted
    }

    pub fn total(&self) -> usize {
        self.buffer.len()
    }

    pub fn targets(&self) -> &[CurvePath] {
        &self.targets
    }
}

impl ModalOp for PasteOp {
    fn tick(&mut self, session: &mut Session) -> Result<OpStatus> {
        if self.cancelled {
            return Ok(OpStatus::Cancelled);
        }
        if self.inserted >= self.buffer.len() {
            return Ok(OpStatus::Finished);
        }

        let upper = (self.inserted + self.chunk_size).min(self.buffer.len());
        let chunk = &self.buffer[self.inserted..upper];

        for path in &self.targets {
            let Some(curve) = session.scene.curve_mut(path) else {
                tracing::warn!(%path, "paste target disappeared, skipping");
                continue;
            };
            if curve.locked {
                tracing::warn!(%path, "paste target is locked, skipping");
                continue;
            }
            for sample in chunk {
                curve.insert_keyframe(Keyframe::new(sample.frame as f64, sample.value));
            }
        }

        self.inserted = upper;
        tracing::debug!(
            inserted = self.inserted,
            total = self.buffer.len(),
            "pasted chunk"
        );

        if self.inserted >= self.buffer.len() {
            Ok(OpStatus::Finished)
        } else {
            Ok(OpStatus::Running)
        }
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }

    fn is_done(&self) -> bool {
        self.cancelled || self.inserted >= self.buffer.len()
    }

    fn progress(&self) -> Option<String> {
        Some(format!(
            "{} of {} keyframes",
            self.inserted,
            self.buffer.len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bake::NullBaker;
    use crate::scene::Scene;
    use beatmark_core::Curve;

    fn session_with_source_and_targets(points: usize) -> Session {
        let mut scene = Scene::new(1, 250);

        let samples: Vec<Sample> = (0..points)
            .map(|f| Sample::new(f as i32, (f % 7) as f32))
            .collect();
        let mut source = Curve::from_samples(CurvePath::new("bake.intensity", 0), samples);
        source.selected = true;
        scene.add_curve(source);

        for name in ["target_a", "target_b"] {
            let mut target = Curve::new(CurvePath::new(name, 0));
            target.selected = true;
            scene.add_curve(target);
        }

        Session::new(scene, NullBaker)
    }

    #[test]
    fn test_paste_completes_in_ceil_chunks() {
        let mut session = session_with_source_and_targets(100);
        session.copy_samples().unwrap();
        let mut op = session.start_paste().unwrap();

        // ceil(100 / 30) = 4 ticks with work.
        let mut ticks = 0;
        loop {
            ticks += 1;
            match op.tick(&mut session).unwrap() {
                OpStatus::Running => continue,
                OpStatus::Finished => break,
                OpStatus::Cancelled => panic!("unexpected cancel"),
            }
        }
        assert_eq!(ticks, 4);

        for name in ["target_a", "target_b"] {
            let target = session.scene.curve(&CurvePath::new(name, 0)).unwrap();
            assert_eq!(target.keyframes().len(), 100);
        }
    }

    #[test]
    fn test_cancel_keeps_partial_work_and_buffer() {
        let mut session = session_with_source_and_targets(100);
        session.copy_samples().unwrap();
        let mut op = session.start_paste().unwrap();

        assert_eq!(op.tick(&mut session).unwrap(), OpStatus::Running);
        assert_eq!(op.tick(&mut session).unwrap(), OpStatus::Running);
        op.cancel();
        assert_eq!(op.tick(&mut session).unwrap(), OpStatus::Cancelled);

        for name in ["target_a", "target_b"] {
            let target = session.scene.curve(&CurvePath::new(name, 0)).unwrap();
            assert_eq!(target.keyframes().len(), 60);
        }

        // The buffer is unaffected by the partial paste: a fresh paste
        // replays all 100 entries.
        let mut fresh = session.start_paste().unwrap();
        while fresh.tick(&mut session).unwrap() == OpStatus::Running {}
        let target = session.scene.curve(&CurvePath::new("target_a", 0)).unwrap();
        assert_eq!(target.keyframes().len(), 100);
    }

    #[test]
    fn test_progress_text_after_each_chunk() {
        let mut session = session_with_source_and_targets(100);
        session.copy_samples().unwrap();
        let mut op = session.start_paste().unwrap();

        op.tick(&mut session).unwrap();
        assert_eq!(op.progress().as_deref(), Some("30 of 100 keyframes"));
        op.tick(&mut session).unwrap();
        assert_eq!(op.progress().as_deref(), Some("60 of 100 keyframes"));
    }

    #[test]
    fn test_missing_target_is_skipped() {
        let mut session = session_with_source_and_targets(40);
        session.copy_samples().unwrap();
        let mut op = session.start_paste().unwrap();

        session.scene.remove_curve(&CurvePath::new("target_b", 0));
        while op.tick(&mut session).unwrap() == OpStatus::Running {}

        let target = session.scene.curve(&CurvePath::new("target_a", 0)).unwrap();
        assert_eq!(target.keyframes().len(), 40);
        assert!(session
            .scene
            .curve(&CurvePath::new("target_b", 0))
            .is_none());
    }
}
