//! The core pair generator: two scalar controls in, two colors and a
//! metrics bundle out.

use tracing::trace;

use tonal_model::color::{clamp, normalize_hue};
use tonal_model::{Controls, Metrics, Pair, Plch};

/// Generator-internal lightness range. Tighter than the global PLCH range
/// so neither color collapses into pure black or white.
const PAIR_L_MIN: f64 = 0.05;
const PAIR_L_MAX: f64 = 0.97;
/// Generator-internal chroma ceiling.
const PAIR_C_MAX: f64 = 0.37;

pub(crate) fn lerp(start: f64, end: f64, amount: f64) -> f64 {
    start + (end - start) * amount
}

/// Shortest-arc angular distance between two hues, at most 180°.
pub(crate) fn hue_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// Generate the A/B color pair for a set of controls.
///
/// Intermediate terms may transiently exceed the legal ranges; each
/// derived axis is clamped only after all contributions are combined.
/// The fit metrics are recomputed from the actual generated colors so
/// they report what was produced, not what was requested.
pub fn generate_pair(controls: &Controls) -> Pair {
    let energy_norm = clamp(controls.energy, 0.0, 100.0) / 100.0;
    let tension_norm = clamp(controls.tension, 0.0, 100.0) / 100.0;

    let auto_hue = lerp(20.0, 340.0, energy_norm) + lerp(-40.0, 40.0, tension_norm);
    let base_hue = normalize_hue(controls.hue_base.unwrap_or(auto_hue));
    let hue_diff = clamp(
        lerp(16.0, 170.0, tension_norm) + lerp(0.0, 18.0, energy_norm),
        8.0,
        180.0,
    );
    let lightness_delta =
        lerp(0.08, 0.38, tension_norm) + lerp(0.0, 0.05, energy_norm);
    let base_lightness = lerp(0.92, 0.62, energy_norm);

    // Spectrum mode supplies its own chroma; otherwise chroma tracks energy.
    let base_chroma = match controls.chroma_override {
        Some(chroma) => clamp(chroma, 0.0, PAIR_C_MAX),
        None => lerp(0.0, PAIR_C_MAX, energy_norm),
    };
    let accent_boost = lerp(0.0, 0.12, tension_norm);

    let hue_a = normalize_hue(base_hue - hue_diff / 2.0);
    let hue_b = normalize_hue(base_hue + hue_diff / 2.0);

    let lightness_a = clamp(base_lightness + lightness_delta / 2.0, PAIR_L_MIN, PAIR_L_MAX);
    let lightness_b = clamp(base_lightness - lightness_delta / 2.0, PAIR_L_MIN, PAIR_L_MAX);

    let chroma_a = clamp(base_chroma + accent_boost * 0.7, 0.0, PAIR_C_MAX);
    let chroma_b = clamp(base_chroma - accent_boost * 0.3, 0.0, PAIR_C_MAX);

    let a = Plch::new(lightness_a, chroma_a, hue_a);
    let b = Plch::new(lightness_b, chroma_b, hue_b);

    let chroma_avg = (chroma_a + chroma_b) / 2.0;
    let hue_gap = hue_distance(hue_a, hue_b);
    let contrast = (lightness_a - lightness_b).abs();
    let vibration = clamp((chroma_avg / PAIR_C_MAX) * (hue_gap / 180.0), 0.0, 1.0);
    let lightness_avg = (lightness_a + lightness_b) / 2.0;

    let energy_signal = clamp(
        0.6 * (chroma_avg / PAIR_C_MAX) + 0.4 * (1.0 - (lightness_avg - 0.7).abs()),
        0.0,
        1.0,
    );
    let tension_signal = clamp(
        0.5 * (hue_gap / 180.0) + 0.3 * contrast + 0.2 * vibration,
        0.0,
        1.0,
    );
    let score = clamp(
        1.0 - ((energy_signal - energy_norm).abs() + (tension_signal - tension_norm).abs()) / 2.0,
        0.0,
        1.0,
    );

    trace!(
        energy = controls.energy,
        tension = controls.tension,
        base_hue,
        hue_gap,
        score,
        "generated pair"
    );

    Pair {
        a,
        b,
        metrics: Metrics {
            chroma: chroma_avg,
            hue_diff: hue_gap,
            lightness_contrast: contrast,
            vibration,
            energy_fit: energy_signal,
            tension_fit: tension_signal,
            score,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_pair_matches_reference_values() {
        // energy=45, tension=35, automatic hue.
        let pair = generate_pair(&Controls::new(45.0, 35.0));

        assert!((pair.a.h - 113.0).abs() < 1e-9);
        assert!((pair.b.h - 191.0).abs() < 1e-9);
        assert!((pair.a.l - 0.88875).abs() < 1e-9);
        assert!((pair.b.l - 0.68125).abs() < 1e-9);
        assert!((pair.a.c - 0.1959).abs() < 1e-9);
        assert!((pair.b.c - 0.1539).abs() < 1e-9);

        assert!((pair.metrics.chroma - 0.1749).abs() < 1e-9);
        assert!((pair.metrics.hue_diff - 78.0).abs() < 1e-9);
        assert!((pair.metrics.lightness_contrast - 0.2075).abs() < 1e-9);
        assert!((pair.metrics.score - 0.8851313064).abs() < 1e-6);
    }

    #[test]
    fn generation_is_bitwise_deterministic() {
        let controls = Controls::new(72.0, 55.0).with_hue_base(310.0);
        let first = generate_pair(&controls);
        let second = generate_pair(&controls);
        assert_eq!(first.a.l.to_bits(), second.a.l.to_bits());
        assert_eq!(first.b.c.to_bits(), second.b.c.to_bits());
        assert_eq!(first.metrics.score.to_bits(), second.metrics.score.to_bits());
    }

    #[test]
    fn hue_base_overrides_automatic_hue() {
        let auto = generate_pair(&Controls::new(50.0, 50.0));
        let anchored = generate_pair(&Controls::new(50.0, 50.0).with_hue_base(10.0));
        assert_ne!(auto.a.h, anchored.a.h);
        // The anchor sits midway between the two generated hues.
        let mid = hue_distance(anchored.a.h, anchored.b.h) / 2.0;
        assert!((hue_distance(anchored.a.h, 10.0) - mid).abs() < 1e-9);
    }

    #[test]
    fn chroma_override_bypasses_energy_formula() {
        let pair = generate_pair(&Controls::new(100.0, 0.0).with_chroma_override(0.05));
        assert!((pair.a.c - 0.05).abs() < 1e-9);
        assert!((pair.b.c - 0.05).abs() < 1e-9);
    }

    #[test]
    fn zero_tension_still_separates_hues() {
        // The hue gap floor is 8 degrees even at zero tension.
        let pair = generate_pair(&Controls::new(0.0, 0.0));
        assert!(pair.metrics.hue_diff >= 8.0);
    }

    #[test]
    fn inputs_outside_range_are_clamped() {
        let wild = generate_pair(&Controls::new(250.0, -40.0));
        let pinned = generate_pair(&Controls::new(100.0, 0.0));
        assert_eq!(wild, pinned);
    }
}
