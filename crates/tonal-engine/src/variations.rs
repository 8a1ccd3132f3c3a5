//! The 3×3 neighbor grid around a control position.

use serde::Serialize;

use tonal_model::color::clamp;
use tonal_model::{Controls, Pair};

use crate::hue::{resolve_hue_base, HueStrategy};
use crate::pair::generate_pair;

/// Offsets explored on each axis around the current position.
const VARIATION_OFFSETS: [f64; 3] = [-12.0, 0.0, 12.0];

/// One cell of the variation grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Variation {
    pub energy: f64,
    pub tension: f64,
    pub pair: Pair,
}

/// Generate the 3×3 grid of neighboring pairs, row by row from lower to
/// higher tension. Each cell resolves its hue at its own position, so
/// spectrum mode sweeps the wheel across the grid.
pub fn variation_grid(energy: f64, tension: f64, strategy: &HueStrategy) -> Vec<Variation> {
    VARIATION_OFFSETS
        .into_iter()
        .flat_map(|tension_offset| {
            VARIATION_OFFSETS.into_iter().map(move |energy_offset| {
                let next_energy = clamp(energy + energy_offset, 0.0, 100.0);
                let next_tension = clamp(tension + tension_offset, 0.0, 100.0);
                let controls = Controls {
                    energy: next_energy,
                    tension: next_tension,
                    hue_base: resolve_hue_base(strategy, next_energy, next_tension),
                    chroma_override: None,
                };
                Variation {
                    energy: next_energy,
                    tension: next_tension,
                    pair: generate_pair(&controls),
                }
            })
        })
        .collect()
}
