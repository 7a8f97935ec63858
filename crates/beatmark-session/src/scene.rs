//! In-memory stand-in for the host scene graph.
//!
//! Owns the curves, the marker set, and the frame bounds the operators
//! act on, and provides the selection surface the host's graph editor
//! would otherwise supply.

use beatmark_core::{Curve, CurvePath, FrameRange, InsertionRange, MarkerSet};

/// Scene state: curves, markers, frame bounds, playhead, view edge.
#[derive(Debug)]
pub struct Scene {
    curves: Vec<Curve>,
    pub markers: MarkerSet,
    pub frame_start: i32,
    pub frame_end: i32,
    pub frame_current: i32,
    /// Leftmost visible frame in the graph view.
    pub view_left: i32,
}

impl Scene {
    pub fn new(frame_start: i32, frame_end: i32) -> Self {
        Self {
            curves: Vec::new(),
            markers: MarkerSet::new(),
            frame_start,
            frame_end,
            frame_current: frame_start,
            view_left: frame_start,
        }
    }

    /// Add a curve, replacing any existing curve at the same path.
    pub fn add_curve(&mut self, curve: Curve) {
        match self.curves.iter_mut().find(|c| c.path() == curve.path()) {
            Some(existing) => *existing = curve,
            None => self.curves.push(curve),
        }
    }

    pub fn curve(&self, path: &CurvePath) -> Option<&Curve> {
        self.curves.iter().find(|c| c.path() == path)
    }

    pub fn curve_mut(&mut self, path: &CurvePath) -> Option<&mut Curve> {
        self.curves.iter_mut().find(|c| c.path() == path)
    }

    pub fn remove_curve(&mut self, path: &CurvePath) -> Option<Curve> {
        let idx = self.curves.iter().position(|c| c.path() == path)?;
        Some(self.curves.remove(idx))
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Currently selected curves, in selection (insertion) order.
    pub fn selected_curves(&self) -> impl Iterator<Item = &Curve> {
        self.curves.iter().filter(|c| c.selected)
    }

    pub fn select_only(&mut self, path: &CurvePath) {
        for curve in &mut self.curves {
            curve.selected = curve.path() == path;
        }
    }

    pub fn deselect_all(&mut self) {
        for curve in &mut self.curves {
            curve.selected = false;
        }
    }

    /// Resolve an insertion-range policy against this scene's state.
    pub fn resolve_range(&self, policy: InsertionRange) -> FrameRange {
        policy.resolve(
            self.frame_start,
            self.frame_end,
            self.frame_current,
            self.view_left,
            &self.markers,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beatmark_core::{InsertionRange, Marker, Sample};

    fn baked(path: &str) -> Curve {
        Curve::from_samples(
            CurvePath::new(path, 0),
            vec![Sample::new(0, 0.0), Sample::new(1, 1.0)],
        )
    }

    #[test]
    fn test_add_curve_replaces_same_path() {
        let mut scene = Scene::new(1, 250);
        scene.add_curve(baked("a"));
        scene.add_curve(Curve::new(CurvePath::new("a", 0)));

        assert_eq!(scene.curves().len(), 1);
        assert!(!scene.curve(&CurvePath::new("a", 0)).unwrap().is_baked());
    }

    #[test]
    fn test_select_only() {
        let mut scene = Scene::new(1, 250);
        scene.add_curve(baked("a"));
        scene.add_curve(baked("b"));

        scene.select_only(&CurvePath::new("b", 0));

        let selected: Vec<&str> = scene
            .selected_curves()
            .map(|c| c.path().data_path.as_str())
            .collect();
        assert_eq!(selected, vec!["b"]);
    }

    #[test]
    fn test_resolve_range_uses_scene_state() {
        let mut scene = Scene::new(1, 250);
        scene.frame_current = 100;
        scene.view_left = 40;
        scene.markers.insert(Marker::at_frame(60));

        assert_eq!(
            scene.resolve_range(InsertionRange::FullLength),
            FrameRange::new(1, 250)
        );
        assert_eq!(
            scene.resolve_range(InsertionRange::FromLastMarker),
            FrameRange::new(60, 100)
        );
        assert_eq!(
            scene.resolve_range(InsertionRange::FromLeftBorder),
            FrameRange::new(40, 100)
        );
    }
}
