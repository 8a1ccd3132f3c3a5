use serde::{Deserialize, Serialize};

use crate::color::Plch;

/// Generation controls. Energy and tension arrive from the UI sliders in
/// `[0, 100]`; out-of-range values are clamped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Controls {
    pub energy: f64,
    pub tension: f64,
    /// Explicit hue anchor; when absent the generator derives one from
    /// energy and tension.
    pub hue_base: Option<f64>,
    /// Spectrum mode bypasses the energy-driven chroma formula.
    pub chroma_override: Option<f64>,
}

impl Controls {
    pub fn new(energy: f64, tension: f64) -> Self {
        Self {
            energy,
            tension,
            hue_base: None,
            chroma_override: None,
        }
    }

    pub fn with_hue_base(mut self, hue_base: f64) -> Self {
        self.hue_base = Some(hue_base);
        self
    }

    pub fn with_chroma_override(mut self, chroma: f64) -> Self {
        self.chroma_override = Some(chroma);
        self
    }
}

/// Diagnostic fit metrics for a generated pair.
///
/// `energy_fit` and `tension_fit` are reconstructed from the actual
/// generated colors, not echoed from the inputs, so `score` reports how
/// faithfully the pair matches the requested intent. A `chroma_override`
/// decouples chroma from energy and can legitimately depress the score;
/// that is documented behavior, not a defect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean chroma of the two colors.
    pub chroma: f64,
    /// Shortest-arc hue separation of the generated colors, degrees.
    pub hue_diff: f64,
    /// Absolute lightness difference between the two colors.
    pub lightness_contrast: f64,
    /// Normalized product of chroma and hue gap.
    pub vibration: f64,
    pub energy_fit: f64,
    pub tension_fit: f64,
    /// Composite self-consistency in `[0, 1]`; 1 means the generated pair
    /// reproduces the requested energy/tension exactly.
    pub score: f64,
}

/// A generated color pair plus its fit metrics. Immutable once created;
/// identical controls always produce a bit-identical pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    pub a: Plch,
    pub b: Plch,
    pub metrics: Metrics,
}
