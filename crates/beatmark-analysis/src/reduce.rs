//! Sample-to-keyframe reduction ("unbake").
//!
//! Collapses a dense baked sample stream into the minimal keyframe set
//! that preserves every value change: one keyframe per run-start of
//! distinct consecutive values. The first sample is only a baseline for
//! comparison and never becomes a keyframe by itself.

use beatmark_core::{Curve, Error, Keyframe, Result, Sample};

/// Reduce a frame-ordered sample stream to linear keyframes.
///
/// For each sample after the first, a keyframe is emitted iff its value
/// differs from its predecessor's. A constant stream reduces to nothing.
pub fn reduce_samples(samples: &[Sample]) -> Vec<Keyframe> {
    samples
        .windows(2)
        .filter(|pair| pair[1].value != pair[0].value)
        .map(|pair| Keyframe::new(pair[1].frame as f64, pair[1].value))
        .collect()
}

/// Reduce a baked curve's samples, refusing curves that cannot be unbaked.
///
/// Locked curves and curves without samples are refused; the caller treats
/// those as per-curve skips, not batch failures.
pub fn reduce_curve(curve: &Curve) -> Result<Vec<Keyframe>> {
    if curve.locked {
        return Err(Error::Locked(curve.path().clone()));
    }
    if !curve.is_baked() {
        return Err(Error::NoSamples(curve.path().clone()));
    }
    Ok(reduce_samples(curve.samples()))
}
