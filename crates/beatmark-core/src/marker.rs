//! Timeline markers.
//!
//! Markers live in a scene-level set ordered by frame. The set itself does
//! not deduplicate frames; suppressing duplicates is the marker
//! synchronizer's job, so storage stays a faithful mirror of the host's.

/// A timeline marker at an integer frame.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Marker {
    pub frame: i32,
    pub label: String,
}

impl Marker {
    pub fn new(frame: i32, label: impl Into<String>) -> Self {
        Self {
            frame,
            label: label.into(),
        }
    }

    /// A marker labeled after its frame, `"#<frame>"`.
    pub fn at_frame(frame: i32) -> Self {
        Self {
            frame,
            label: format!("#{frame}"),
        }
    }
}

/// Scene-level marker sequence, ordered by frame.
#[derive(Debug, Clone, Default)]
pub struct MarkerSet {
    markers: Vec<Marker>,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a marker, keeping the set ordered by frame.
    ///
    /// Duplicate frames are accepted; callers that need uniqueness must
    /// check [`contains_frame`](MarkerSet::contains_frame) first.
    pub fn insert(&mut self, marker: Marker) {
        let idx = self.markers.partition_point(|m| m.frame <= marker.frame);
        self.markers.insert(idx, marker);
    }

    pub fn contains_frame(&self, frame: i32) -> bool {
        self.markers
            .binary_search_by(|m| m.frame.cmp(&frame))
            .is_ok()
    }

    /// Frame of the last marker strictly before `frame`, or 0 if none.
    pub fn last_frame_before(&self, frame: i32) -> i32 {
        let idx = self.markers.partition_point(|m| m.frame < frame);
        if idx == 0 {
            0
        } else {
            self.markers[idx - 1].frame
        }
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Marker> {
        self.markers.iter()
    }
}

impl<'a> IntoIterator for &'a MarkerSet {
    type Item = &'a Marker;
    type IntoIter = core::slice::Iter<'a, Marker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.iter()
    }
}
