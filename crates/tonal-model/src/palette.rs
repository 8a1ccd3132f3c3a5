use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::color::Plch;
use crate::error::ParseError;

/// Semantic palette slot. A UI binds to roles, not to specific color
/// values, so the set is fixed and closed: every palette carries all six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteRole {
    Background,
    Surface,
    Primary,
    Accent,
    Text,
    Muted,
}

impl PaletteRole {
    /// All roles in canonical display order.
    pub const ALL: [PaletteRole; 6] = [
        PaletteRole::Background,
        PaletteRole::Surface,
        PaletteRole::Primary,
        PaletteRole::Accent,
        PaletteRole::Text,
        PaletteRole::Muted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteRole::Background => "background",
            PaletteRole::Surface => "surface",
            PaletteRole::Primary => "primary",
            PaletteRole::Accent => "accent",
            PaletteRole::Text => "text",
            PaletteRole::Muted => "muted",
        }
    }

    /// Title-cased label for display and token export.
    pub fn label(&self) -> &'static str {
        match self {
            PaletteRole::Background => "Background",
            PaletteRole::Surface => "Surface",
            PaletteRole::Primary => "Primary",
            PaletteRole::Accent => "Accent",
            PaletteRole::Text => "Text",
            PaletteRole::Muted => "Muted",
        }
    }

    fn index(self) -> usize {
        match self {
            PaletteRole::Background => 0,
            PaletteRole::Surface => 1,
            PaletteRole::Primary => 2,
            PaletteRole::Accent => 3,
            PaletteRole::Text => 4,
            PaletteRole::Muted => 5,
        }
    }
}

impl fmt::Display for PaletteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaletteRole {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "background" => Ok(PaletteRole::Background),
            "surface" => Ok(PaletteRole::Surface),
            "primary" => Ok(PaletteRole::Primary),
            "accent" => Ok(PaletteRole::Accent),
            "text" => Ok(PaletteRole::Text),
            "muted" => Ok(PaletteRole::Muted),
            _ => Err(ParseError::Role(s.to_string())),
        }
    }
}

/// The full six-role export set.
pub const FULL_ROLES: [PaletteRole; 6] = PaletteRole::ALL;

/// The reduced role set shown to free-tier users.
pub const PREVIEW_ROLES: [PaletteRole; 4] = [
    PaletteRole::Background,
    PaletteRole::Surface,
    PaletteRole::Primary,
    PaletteRole::Text,
];

/// A complete six-role semantic palette. All roles are always present;
/// transformations return a new palette rather than mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Plch,
    pub surface: Plch,
    pub primary: Plch,
    pub accent: Plch,
    pub text: Plch,
    pub muted: Plch,
}

impl Palette {
    pub fn get(&self, role: PaletteRole) -> Plch {
        match role {
            PaletteRole::Background => self.background,
            PaletteRole::Surface => self.surface,
            PaletteRole::Primary => self.primary,
            PaletteRole::Accent => self.accent,
            PaletteRole::Text => self.text,
            PaletteRole::Muted => self.muted,
        }
    }

    /// Return a copy with one role replaced.
    pub fn with_role(mut self, role: PaletteRole, color: Plch) -> Self {
        match role {
            PaletteRole::Background => self.background = color,
            PaletteRole::Surface => self.surface = color,
            PaletteRole::Primary => self.primary = color,
            PaletteRole::Accent => self.accent = color,
            PaletteRole::Text => self.text = color,
            PaletteRole::Muted => self.muted = color,
        }
        self
    }

    /// Iterate roles and colors in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (PaletteRole, Plch)> + '_ {
        PaletteRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}

/// Per-role user overrides. A locked role wins over any automatic repair:
/// the lock value is applied verbatim after auto-fix, never blended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleLocks {
    slots: [Option<Plch>; 6],
}

impl RoleLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, role: PaletteRole) -> Option<Plch> {
        self.slots[role.index()]
    }

    pub fn lock(&mut self, role: PaletteRole, color: Plch) {
        self.slots[role.index()] = Some(color);
    }

    pub fn unlock(&mut self, role: PaletteRole) {
        self.slots[role.index()] = None;
    }

    /// Toggle a lock: lock the role to `color` if unlocked, clear otherwise.
    pub fn toggle(&mut self, role: PaletteRole, color: Plch) {
        if self.get(role).is_some() {
            self.unlock(role);
        } else {
            self.lock(role, color);
        }
    }

    pub fn clear(&mut self) {
        self.slots = [None; 6];
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Iterate the locked roles in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (PaletteRole, Plch)> + '_ {
        PaletteRole::ALL
            .into_iter()
            .filter_map(|role| self.get(role).map(|color| (role, color)))
    }
}
