//! Frequency bands and bake identity.

/// A named frequency band for sound-to-curve baking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyBand {
    pub label: &'static str,
    pub low: f32,
    pub high: f32,
}

/// The fixed band table iterated by batch baking, lowest band first.
pub const FREQUENCY_BANDS: [FrequencyBand; 8] = [
    FrequencyBand {
        label: "20 - 40 Hz",
        low: 20.0,
        high: 40.0,
    },
    FrequencyBand {
        label: "40 - 80 Hz",
        low: 40.0,
        high: 80.0,
    },
    FrequencyBand {
        label: "80 - 250 Hz",
        low: 80.0,
        high: 250.0,
    },
    FrequencyBand {
        label: "250 - 600 Hz",
        low: 250.0,
        high: 600.0,
    },
    FrequencyBand {
        label: "600 - 4000 Hz",
        low: 600.0,
        high: 4000.0,
    },
    FrequencyBand {
        label: "4 - 6 kHz",
        low: 4000.0,
        high: 6000.0,
    },
    FrequencyBand {
        label: "6 - 8 kHz",
        low: 6000.0,
        high: 8000.0,
    },
    FrequencyBand {
        label: "8 - 20 kHz",
        low: 8000.0,
        high: 20000.0,
    },
];

/// Band used when no explicit range has been chosen.
pub const DEFAULT_BAND: FrequencyBand = FREQUENCY_BANDS[2];

/// Identifies a previously baked curve: one source file, one band.
///
/// Equality over all three fields is what "already baked this exact band"
/// means; a registry hit skips recomputation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct BakeDescriptor {
    /// Path of the source audio file.
    pub source: String,
    pub low: f32,
    pub high: f32,
}

impl BakeDescriptor {
    pub fn new(source: impl Into<String>, low: f32, high: f32) -> Self {
        Self {
            source: source.into(),
            low,
            high,
        }
    }

    pub fn for_band(source: impl Into<String>, band: &FrequencyBand) -> Self {
        Self {
            source: source.into(),
            low: band.low,
            high: band.high,
        }
    }
}
