//! Session context and operator surface.
//!
//! The [`Session`] owns everything the operators touch: scene state, the
//! copy buffer, the bake registry, the configuration, and the external
//! band baker. No process-wide state: a host embeds exactly one session
//! per scene and passes it to the scheduler.

use beatmark_analysis::OnsetDetector;
use beatmark_core::{BakeDescriptor, Curve, CurvePath, InsertionRange};

use crate::bake::{BakeRegistry, BandBaker, BatchBakeOp};
use crate::config::SessionConfig;
use crate::error::{Result, SessionError};
use crate::markers::sync_markers;
use crate::scene::Scene;
use crate::transfer::{CopyBuffer, PasteOp};
use crate::unbake;

/// Owns scene state and exposes the operator surface.
pub struct Session {
    pub scene: Scene,
    pub registry: BakeRegistry,
    pub config: SessionConfig,
    buffer: CopyBuffer,
    baker: Box<dyn BandBaker>,
}

impl Session {
    pub fn new(scene: Scene, baker: impl BandBaker + 'static) -> Self {
        Self {
            scene,
            registry: BakeRegistry::new(),
            config: SessionConfig::default(),
            buffer: CopyBuffer::default(),
            baker: Box::new(baker),
        }
    }

    /// Replace the default configuration; rejects invalid values.
    pub fn with_config(mut self, config: SessionConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn buffer(&self) -> &CopyBuffer {
        &self.buffer
    }

    /// Detect beats on the active curve and insert markers for them.
    ///
    /// The active curve is the first selected curve with baked samples.
    /// Inserts a `"#<frame>"` marker per onset frame not already marked;
    /// returns the number inserted.
    pub fn insert_beat_markers(&mut self, policy: InsertionRange, threshold: f32) -> Result<usize> {
        let range = self.scene.resolve_range(policy);
        let curve = self
            .scene
            .selected_curves()
            .find(|c| c.is_baked())
            .ok_or(SessionError::NoActiveCurve)?;

        let onsets = OnsetDetector::new(threshold).detect(curve, range);
        let inserted = sync_markers(&mut self.scene.markers, &onsets);
        tracing::info!(onsets = onsets.len(), inserted, "inserted beat markers");
        Ok(inserted)
    }

    /// Remove every marker in the scene, unconditionally.
    pub fn remove_all_markers(&mut self) {
        self.scene.markers.clear();
    }

    /// Unbake every eligible selected curve; see [`unbake::unbake_selected`].
    pub fn unbake_selected(&mut self) -> usize {
        unbake::unbake_selected(&mut self.scene)
    }

    pub fn can_copy(&self) -> bool {
        self.scene.selected_curves().any(Curve::is_baked)
    }

    /// Snapshot the first selected baked curve's samples into the buffer.
    ///
    /// Replaces any previous contents; returns the number of samples
    /// copied. A previously filled buffer is left untouched when no
    /// eligible source exists.
    pub fn copy_samples(&mut self) -> Result<usize> {
        let source = self
            .scene
            .selected_curves()
            .find(|c| c.is_baked())
            .ok_or(SessionError::NoSourceCurve)?;

        let count = source.samples().len();
        self.buffer.replace(source.samples());
        tracing::debug!(count, "copied samples into buffer");
        Ok(count)
    }

    pub fn can_paste(&self) -> bool {
        !self.buffer.is_empty() && self.scene.selected_curves().any(|c| !c.is_baked())
    }

    /// Begin an incremental paste onto the selected keyframe curves.
    ///
    /// Targets and buffer contents are snapshotted here; later selection
    /// or buffer changes do not affect the running operation.
    pub fn start_paste(&self) -> Result<PasteOp> {
        if self.buffer.is_empty() {
            return Err(SessionError::EmptyBuffer);
        }
        let targets: Vec<CurvePath> = self
            .scene
            .selected_curves()
            .filter(|c| !c.is_baked())
            .map(|c| c.path().clone())
            .collect();
        if targets.is_empty() {
            return Err(SessionError::NoTargetCurves);
        }
        Ok(PasteOp::new(
            self.buffer.snapshot(),
            targets,
            self.config.chunk_size,
        ))
    }

    /// Bake one frequency band, reusing an existing bake when possible.
    ///
    /// A registry hit whose curve still holds samples short-circuits the
    /// baker. Otherwise the external baker runs; its failure is a hard
    /// stop. The resulting curve is locked, registered, and becomes the
    /// only selected curve.
    pub fn bake_band(&mut self, descriptor: BakeDescriptor) -> Result<CurvePath> {
        if let Some(index) = self.registry.find(&descriptor) {
            let path = BakeRegistry::curve_path(index);
            if self.scene.curve(&path).is_some_and(Curve::is_baked) {
                tracing::debug!(%path, "band already baked, reusing");
                self.scene.select_only(&path);
                return Ok(path);
            }
        }

        let samples = self.baker.bake(&descriptor).map_err(|err| {
            tracing::warn!(error = %err, source = %descriptor.source, "band bake failed");
            SessionError::Bake(err.to_string())
        })?;

        let index = match self.registry.find(&descriptor) {
            Some(index) => index,
            None => self.registry.register(descriptor),
        };
        let path = BakeRegistry::curve_path(index);

        let mut curve = Curve::from_samples(path.clone(), samples);
        curve.locked = true;
        self.scene.add_curve(curve);
        self.scene.select_only(&path);
        Ok(path)
    }

    /// Begin a batch bake over the whole band table for `source`.
    pub fn start_batch_bake(&self, source: &str) -> BatchBakeOp {
        BatchBakeOp::new(source, self.config.tick_throttle)
    }

    /// Drop every registry-owned bake curve and forget the registry.
    pub fn remove_bake_data(&mut self) {
        for path in self.registry.paths().collect::<Vec<_>>() {
            self.scene.remove_curve(&path);
        }
        self.registry.clear();
    }

    /// Hide or reveal the baked band curves.
    ///
    /// With `hide_unused` set, every registry curve is hidden and
    /// deselected except the one matching `current`, which is revealed
    /// and selected.
    pub fn apply_bake_visibility(&mut self, hide_unused: bool, current: Option<&BakeDescriptor>) {
        let current_path = current
            .and_then(|d| self.registry.find(d))
            .map(BakeRegistry::curve_path);

        for path in self.registry.paths().collect::<Vec<_>>() {
            if let Some(curve) = self.scene.curve_mut(&path) {
                curve.hidden = hide_unused;
                curve.selected = false;
            }
        }
        if let Some(path) = current_path {
            if let Some(curve) = self.scene.curve_mut(&path) {
                curve.hidden = false;
                curve.selected = true;
            }
        }
    }
}
