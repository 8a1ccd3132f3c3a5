//! Curated starting points for the studio.

use serde::Serialize;

/// A named control position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub energy: f64,
    pub tension: f64,
}

/// The fixed preset table, ordered from calm to intense.
pub const PRESETS: [Preset; 6] = [
    Preset { id: "calm-sage", name: "Calm Sage", energy: 18.0, tension: 12.0 },
    Preset { id: "soft-sand", name: "Soft Sand", energy: 28.0, tension: 22.0 },
    Preset { id: "studio-blue", name: "Studio Blue", energy: 48.0, tension: 38.0 },
    Preset { id: "vivid-citrus", name: "Vivid Citrus", energy: 72.0, tension: 55.0 },
    Preset { id: "sharp-ink", name: "Sharp Ink", energy: 62.0, tension: 78.0 },
    Preset { id: "neon-dusk", name: "Neon Dusk", energy: 80.0, tension: 68.0 },
];

/// Look up a preset by id.
pub fn preset_by_id(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (index, preset) in PRESETS.iter().enumerate() {
            for other in &PRESETS[index + 1..] {
                assert_ne!(preset.id, other.id);
            }
        }
    }

    #[test]
    fn lookup_finds_known_presets() {
        let preset = preset_by_id("studio-blue").expect("studio-blue preset");
        assert_eq!(preset.energy, 48.0);
        assert_eq!(preset.tension, 38.0);
        assert!(preset_by_id("missing").is_none());
    }
}
