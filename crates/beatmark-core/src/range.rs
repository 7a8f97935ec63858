//! Frame ranges and the insertion-range policy.

use crate::marker::MarkerSet;

/// Half-open frame range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct FrameRange {
    pub start: i32,
    pub end: i32,
}

impl FrameRange {
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start) as usize
        }
    }
}

/// Which span of the timeline a marker-insertion pass scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum InsertionRange {
    /// Scene start to scene end.
    FullLength,
    /// Frame of the last marker strictly before the playhead (0 if none)
    /// to the playhead.
    #[default]
    FromLastMarker,
    /// Leftmost visible frame in the current view to the playhead.
    FromLeftBorder,
}

impl InsertionRange {
    /// Resolve the policy to a concrete range from scene inputs.
    pub fn resolve(
        self,
        scene_start: i32,
        scene_end: i32,
        playhead: i32,
        view_left: i32,
        markers: &MarkerSet,
    ) -> FrameRange {
        match self {
            InsertionRange::FullLength => FrameRange::new(scene_start, scene_end),
            InsertionRange::FromLastMarker => {
                FrameRange::new(markers.last_frame_before(playhead), playhead)
            }
            InsertionRange::FromLeftBorder => FrameRange::new(view_left, playhead),
        }
    }
}
