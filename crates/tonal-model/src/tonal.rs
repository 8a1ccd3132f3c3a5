use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::Plch;
use crate::palette::Palette;

/// Standard tone checkpoints, Material Design 3 style. Tone 0 is black,
/// tone 100 is white; the irregular top end (95, 99) gives finer control
/// over near-white surfaces.
pub const STANDARD_TONES: [u8; 13] = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 95, 99, 100];

/// A 13-stop lightness ramp sharing one hue. Lightness is monotonic in
/// tone order: tone `t` sits at lightness `t / 100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TonalRamp {
    stops: [Plch; 13],
}

impl TonalRamp {
    /// Build a ramp from stops listed in `STANDARD_TONES` order.
    pub fn from_stops(stops: [Plch; 13]) -> Self {
        Self { stops }
    }

    /// Look up the color at a standard tone. Returns `None` for tone
    /// values outside the 13-stop set.
    pub fn tone(&self, tone: u8) -> Option<Plch> {
        STANDARD_TONES
            .iter()
            .position(|&candidate| candidate == tone)
            .map(|index| self.stops[index])
    }

    /// Color at the standard tone nearest to `tone`. Total: arbitrary
    /// inputs snap to the closest checkpoint instead of failing.
    pub fn nearest(&self, tone: u8) -> Plch {
        let mut best_index = 0;
        let mut best_gap = u8::MAX;
        for (index, &candidate) in STANDARD_TONES.iter().enumerate() {
            let gap = candidate.abs_diff(tone);
            if gap < best_gap {
                best_gap = gap;
                best_index = index;
            }
        }
        self.stops[best_index]
    }

    /// Iterate `(tone, color)` stops in ascending tone order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Plch)> + '_ {
        STANDARD_TONES
            .into_iter()
            .zip(self.stops.iter().copied())
    }
}

/// Which of the five scheme ramps a role selects from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RampKind {
    Primary,
    Secondary,
    Tertiary,
    Neutral,
    Error,
}

impl RampKind {
    pub const ALL: [RampKind; 5] = [
        RampKind::Primary,
        RampKind::Secondary,
        RampKind::Tertiary,
        RampKind::Neutral,
        RampKind::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RampKind::Primary => "primary",
            RampKind::Secondary => "secondary",
            RampKind::Tertiary => "tertiary",
            RampKind::Neutral => "neutral",
            RampKind::Error => "error",
        }
    }
}

impl fmt::Display for RampKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The five tonal ramps a color scheme selects from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchemeRamps {
    pub primary: TonalRamp,
    pub secondary: TonalRamp,
    pub tertiary: TonalRamp,
    pub neutral: TonalRamp,
    pub error: TonalRamp,
}

impl SchemeRamps {
    pub fn get(&self, kind: RampKind) -> &TonalRamp {
        match kind {
            RampKind::Primary => &self.primary,
            RampKind::Secondary => &self.secondary,
            RampKind::Tertiary => &self.tertiary,
            RampKind::Neutral => &self.neutral,
            RampKind::Error => &self.error,
        }
    }

    /// Iterate `(kind, ramp)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (RampKind, &TonalRamp)> + '_ {
        RampKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}

/// Semantic scheme role, Material Design 3 vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SchemeRole {
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,
    Error,
    OnError,
    ErrorContainer,
    OnErrorContainer,
    Background,
    OnBackground,
    Surface,
    OnSurface,
    SurfaceVariant,
    OnSurfaceVariant,
    Outline,
    OutlineVariant,
}

impl SchemeRole {
    pub const ALL: [SchemeRole; 24] = [
        SchemeRole::Primary,
        SchemeRole::OnPrimary,
        SchemeRole::PrimaryContainer,
        SchemeRole::OnPrimaryContainer,
        SchemeRole::Secondary,
        SchemeRole::OnSecondary,
        SchemeRole::SecondaryContainer,
        SchemeRole::OnSecondaryContainer,
        SchemeRole::Tertiary,
        SchemeRole::OnTertiary,
        SchemeRole::TertiaryContainer,
        SchemeRole::OnTertiaryContainer,
        SchemeRole::Error,
        SchemeRole::OnError,
        SchemeRole::ErrorContainer,
        SchemeRole::OnErrorContainer,
        SchemeRole::Background,
        SchemeRole::OnBackground,
        SchemeRole::Surface,
        SchemeRole::OnSurface,
        SchemeRole::SurfaceVariant,
        SchemeRole::OnSurfaceVariant,
        SchemeRole::Outline,
        SchemeRole::OutlineVariant,
    ];

    /// Camel-cased token name as used in exported files.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeRole::Primary => "primary",
            SchemeRole::OnPrimary => "onPrimary",
            SchemeRole::PrimaryContainer => "primaryContainer",
            SchemeRole::OnPrimaryContainer => "onPrimaryContainer",
            SchemeRole::Secondary => "secondary",
            SchemeRole::OnSecondary => "onSecondary",
            SchemeRole::SecondaryContainer => "secondaryContainer",
            SchemeRole::OnSecondaryContainer => "onSecondaryContainer",
            SchemeRole::Tertiary => "tertiary",
            SchemeRole::OnTertiary => "onTertiary",
            SchemeRole::TertiaryContainer => "tertiaryContainer",
            SchemeRole::OnTertiaryContainer => "onTertiaryContainer",
            SchemeRole::Error => "error",
            SchemeRole::OnError => "onError",
            SchemeRole::ErrorContainer => "errorContainer",
            SchemeRole::OnErrorContainer => "onErrorContainer",
            SchemeRole::Background => "background",
            SchemeRole::OnBackground => "onBackground",
            SchemeRole::Surface => "surface",
            SchemeRole::OnSurface => "onSurface",
            SchemeRole::SurfaceVariant => "surfaceVariant",
            SchemeRole::OnSurfaceVariant => "onSurfaceVariant",
            SchemeRole::Outline => "outline",
            SchemeRole::OutlineVariant => "outlineVariant",
        }
    }
}

impl fmt::Display for SchemeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A complete light- or dark-mode color scheme: every scheme role mapped
/// to a concrete color selected from the five ramps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    pub primary: Plch,
    pub on_primary: Plch,
    pub primary_container: Plch,
    pub on_primary_container: Plch,
    pub secondary: Plch,
    pub on_secondary: Plch,
    pub secondary_container: Plch,
    pub on_secondary_container: Plch,
    pub tertiary: Plch,
    pub on_tertiary: Plch,
    pub tertiary_container: Plch,
    pub on_tertiary_container: Plch,
    pub error: Plch,
    pub on_error: Plch,
    pub error_container: Plch,
    pub on_error_container: Plch,
    pub background: Plch,
    pub on_background: Plch,
    pub surface: Plch,
    pub on_surface: Plch,
    pub surface_variant: Plch,
    pub on_surface_variant: Plch,
    pub outline: Plch,
    pub outline_variant: Plch,
}

impl ColorScheme {
    pub fn get(&self, role: SchemeRole) -> Plch {
        match role {
            SchemeRole::Primary => self.primary,
            SchemeRole::OnPrimary => self.on_primary,
            SchemeRole::PrimaryContainer => self.primary_container,
            SchemeRole::OnPrimaryContainer => self.on_primary_container,
            SchemeRole::Secondary => self.secondary,
            SchemeRole::OnSecondary => self.on_secondary,
            SchemeRole::SecondaryContainer => self.secondary_container,
            SchemeRole::OnSecondaryContainer => self.on_secondary_container,
            SchemeRole::Tertiary => self.tertiary,
            SchemeRole::OnTertiary => self.on_tertiary,
            SchemeRole::TertiaryContainer => self.tertiary_container,
            SchemeRole::OnTertiaryContainer => self.on_tertiary_container,
            SchemeRole::Error => self.error,
            SchemeRole::OnError => self.on_error,
            SchemeRole::ErrorContainer => self.error_container,
            SchemeRole::OnErrorContainer => self.on_error_container,
            SchemeRole::Background => self.background,
            SchemeRole::OnBackground => self.on_background,
            SchemeRole::Surface => self.surface,
            SchemeRole::OnSurface => self.on_surface,
            SchemeRole::SurfaceVariant => self.surface_variant,
            SchemeRole::OnSurfaceVariant => self.on_surface_variant,
            SchemeRole::Outline => self.outline,
            SchemeRole::OutlineVariant => self.outline_variant,
        }
    }

    /// Iterate `(role, color)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SchemeRole, Plch)> + '_ {
        SchemeRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}

/// Light or dark, detected from background lightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn opposite(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A light palette and its derived dark counterpart (or vice versa).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualTheme {
    pub light: Palette,
    pub dark: Palette,
}

impl DualTheme {
    pub fn for_mode(&self, mode: ThemeMode) -> &Palette {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_ramp() -> TonalRamp {
        let stops = STANDARD_TONES.map(|tone| Plch::new(f64::from(tone) / 100.0, 0.0, 0.0));
        TonalRamp::from_stops(stops)
    }

    #[test]
    fn tone_lookup_hits_only_standard_stops() {
        let ramp = gray_ramp();
        assert_eq!(ramp.tone(40).map(|color| color.l), Some(0.4));
        assert_eq!(ramp.tone(42), None);
    }

    #[test]
    fn nearest_snaps_to_the_closest_stop() {
        let ramp = gray_ramp();
        assert_eq!(ramp.nearest(42).l, 0.4);
        assert_eq!(ramp.nearest(97).l, 0.95);
        assert_eq!(ramp.nearest(100).l, 1.0);
    }

    #[test]
    fn scheme_roles_cover_every_field() {
        let color = Plch::new(0.5, 0.1, 180.0);
        let scheme = ColorScheme {
            primary: color,
            on_primary: color,
            primary_container: color,
            on_primary_container: color,
            secondary: color,
            on_secondary: color,
            secondary_container: color,
            on_secondary_container: color,
            tertiary: color,
            on_tertiary: color,
            tertiary_container: color,
            on_tertiary_container: color,
            error: color,
            on_error: color,
            error_container: color,
            on_error_container: color,
            background: color,
            on_background: color,
            surface: color,
            on_surface: color,
            surface_variant: color,
            on_surface_variant: color,
            outline: color,
            outline_variant: color,
        };
        assert_eq!(scheme.iter().count(), 24);
        assert_eq!(scheme.get(SchemeRole::OutlineVariant), color);
    }
}
