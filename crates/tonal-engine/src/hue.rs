//! Hue anchor strategies.

use tonal_model::color::{clamp, normalize_hue};
use tonal_model::Controls;

/// How the base hue is chosen for generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HueStrategy {
    /// Let the generator derive the hue from energy and tension.
    Auto,
    /// A fixed manual anchor in degrees.
    Manual(f64),
    /// Spectrum mode: the 2D control position maps onto the full hue
    /// wheel through `atan2`. Near the center of the field the angle is
    /// undefined, so the manual anchor serves as the fallback.
    Spectrum { fallback: f64 },
}

/// Resolve the hue anchor for a control position. `None` means the
/// generator computes its own hue.
pub fn resolve_hue_base(strategy: &HueStrategy, energy: f64, tension: f64) -> Option<f64> {
    match *strategy {
        HueStrategy::Auto => None,
        HueStrategy::Manual(hue) => Some(hue),
        HueStrategy::Spectrum { fallback } => {
            let x = clamp(energy, 0.0, 100.0) - 50.0;
            let y = clamp(tension, 0.0, 100.0) - 50.0;
            if x.abs() + y.abs() < 1e-3 {
                return Some(fallback);
            }
            Some(normalize_hue(y.atan2(x).to_degrees()))
        }
    }
}

/// Assemble generation controls from a control position and a strategy.
pub fn controls_with_strategy(energy: f64, tension: f64, strategy: &HueStrategy) -> Controls {
    Controls {
        energy,
        tension,
        hue_base: resolve_hue_base(strategy, energy, tension),
        chroma_override: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_leaves_hue_to_the_generator() {
        assert_eq!(resolve_hue_base(&HueStrategy::Auto, 30.0, 70.0), None);
    }

    #[test]
    fn spectrum_maps_cardinal_directions() {
        let spectrum = HueStrategy::Spectrum { fallback: 220.0 };
        let angle_at = |energy, tension| {
            resolve_hue_base(&spectrum, energy, tension).expect("spectrum angle")
        };
        // Right, up, left, down from the field center.
        assert!(angle_at(100.0, 50.0).abs() < 1e-9);
        assert!((angle_at(50.0, 100.0) - 90.0).abs() < 1e-9);
        assert!((angle_at(0.0, 50.0) - 180.0).abs() < 1e-9);
        assert!((angle_at(50.0, 0.0) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn spectrum_center_falls_back_to_anchor() {
        let spectrum = HueStrategy::Spectrum { fallback: 220.0 };
        assert_eq!(resolve_hue_base(&spectrum, 50.0, 50.0), Some(220.0));
    }
}
