//! Convert baked curves back into editable keyframes.

use beatmark_analysis::reduce_samples;
use beatmark_core::Curve;

use crate::scene::Scene;

/// Unbake every selected curve that has samples and is not locked.
///
/// Each eligible curve is reduced to its minimal keyframe set, destroyed,
/// and replaced by a fresh keyframed curve at the same path/index. The
/// replacement is irreversible. Locked and sample-less curves are skipped
/// per-curve. Returns the number of curves converted.
pub fn unbake_selected(scene: &mut Scene) -> usize {
    let candidates: Vec<_> = scene
        .selected_curves()
        .filter(|c| c.is_baked() && !c.locked)
        .map(|c| c.path().clone())
        .collect();

    let mut converted = 0;
    for path in candidates {
        let Some(curve) = scene.remove_curve(&path) else {
            continue;
        };
        let keyframes = reduce_samples(curve.samples());

        let mut replacement = Curve::new(path);
        for keyframe in keyframes {
            replacement.insert_keyframe(keyframe);
        }
        scene.add_curve(replacement);
        converted += 1;
    }

    if converted > 0 {
        tracing::info!(converted, "unbaked curves");
    }
    converted
}
