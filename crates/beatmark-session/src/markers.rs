//! Onset-to-marker synchronization.

use beatmark_core::{Marker, MarkerSet};

/// Insert a `"#<frame>"` marker for every onset frame not already marked.
///
/// Returns the number of markers inserted. Idempotent: re-running with
/// the same onsets inserts nothing.
pub fn sync_markers(markers: &mut MarkerSet, onsets: &[i32]) -> usize {
    let mut inserted = 0;
    for &frame in onsets {
        if !markers.contains_frame(frame) {
            markers.insert(Marker::at_frame(frame));
            inserted += 1;
        }
    }
    inserted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_is_idempotent() {
        let mut markers = MarkerSet::new();
        let onsets = [10, 25, 40];

        assert_eq!(sync_markers(&mut markers, &onsets), 3);
        assert_eq!(sync_markers(&mut markers, &onsets), 0);
        assert_eq!(markers.len(), 3);
    }

    #[test]
    fn test_sync_skips_existing_frames() {
        let mut markers = MarkerSet::new();
        markers.insert(Marker::new(25, "handmade"));

        assert_eq!(sync_markers(&mut markers, &[10, 25]), 1);
        assert_eq!(markers.len(), 2);
        // The pre-existing marker keeps its label.
        assert!(markers.iter().any(|m| m.label == "handmade"));
    }

    #[test]
    fn test_sync_labels_by_frame() {
        let mut markers = MarkerSet::new();
        sync_markers(&mut markers, &[7]);
        assert_eq!(markers.iter().next().unwrap().label, "#7");
    }
}
