//! Role hierarchy and proportion guidance, based on the 60-30-10 rule.

use serde::Serialize;

use tonal_model::{Palette, PaletteRole, Plch};

/// Supported kit sizes: minimal, standard, complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KitSize {
    Three,
    Five,
    Seven,
}

impl KitSize {
    pub const ALL: [KitSize; 3] = [KitSize::Three, KitSize::Five, KitSize::Seven];

    /// The roles included at this kit size.
    pub fn roles(&self) -> &'static [PaletteRole] {
        match self {
            KitSize::Three => &[
                PaletteRole::Background,
                PaletteRole::Primary,
                PaletteRole::Text,
            ],
            KitSize::Five => &[
                PaletteRole::Background,
                PaletteRole::Surface,
                PaletteRole::Primary,
                PaletteRole::Accent,
                PaletteRole::Text,
            ],
            KitSize::Seven => &[
                PaletteRole::Background,
                PaletteRole::Surface,
                PaletteRole::Primary,
                PaletteRole::Accent,
                PaletteRole::Text,
                PaletteRole::Muted,
            ],
        }
    }
}

/// One rung of the hierarchy: a role, its visual share of a layout, and
/// how it is meant to be used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoleWeight {
    pub role: PaletteRole,
    /// Percentage of the layout this role should occupy.
    pub proportion: u8,
    pub usage: &'static str,
}

/// Proportion tables per kit size, the 60-30-10 rule adapted to each.
pub fn hierarchy(size: KitSize) -> &'static [RoleWeight] {
    match size {
        KitSize::Three => &[
            RoleWeight {
                role: PaletteRole::Background,
                proportion: 60,
                usage: "Dominant color - main backgrounds, large surfaces",
            },
            RoleWeight {
                role: PaletteRole::Primary,
                proportion: 30,
                usage: "Secondary color - interactive elements, emphasis",
            },
            RoleWeight {
                role: PaletteRole::Text,
                proportion: 10,
                usage: "Accent color - text, high contrast elements",
            },
        ],
        KitSize::Five => &[
            RoleWeight {
                role: PaletteRole::Background,
                proportion: 50,
                usage: "Dominant color - primary backgrounds",
            },
            RoleWeight {
                role: PaletteRole::Surface,
                proportion: 20,
                usage: "Secondary surface - cards and elevated elements",
            },
            RoleWeight {
                role: PaletteRole::Primary,
                proportion: 15,
                usage: "Primary actions - main interactive elements",
            },
            RoleWeight {
                role: PaletteRole::Accent,
                proportion: 10,
                usage: "Accent highlights - secondary interactions",
            },
            RoleWeight {
                role: PaletteRole::Text,
                proportion: 5,
                usage: "Text - high contrast for readability",
            },
        ],
        KitSize::Seven => &[
            RoleWeight {
                role: PaletteRole::Background,
                proportion: 45,
                usage: "Dominant color - main backgrounds",
            },
            RoleWeight {
                role: PaletteRole::Surface,
                proportion: 20,
                usage: "Secondary surface - elevated elements",
            },
            RoleWeight {
                role: PaletteRole::Primary,
                proportion: 15,
                usage: "Primary brand - main actions",
            },
            RoleWeight {
                role: PaletteRole::Accent,
                proportion: 10,
                usage: "Accent highlights - secondary actions",
            },
            RoleWeight {
                role: PaletteRole::Text,
                proportion: 5,
                usage: "Primary text - high contrast",
            },
            RoleWeight {
                role: PaletteRole::Muted,
                proportion: 5,
                usage: "Muted text - lower hierarchy",
            },
        ],
    }
}

/// Restrict a palette to the roles of a kit size, in hierarchy order.
pub fn filter_palette(palette: &Palette, size: KitSize) -> Vec<(PaletteRole, Plch)> {
    size.roles()
        .iter()
        .map(|&role| (role, palette.get(role)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proportions_sum_to_one_hundred() {
        for size in KitSize::ALL {
            let total: u32 = hierarchy(size)
                .iter()
                .map(|weight| u32::from(weight.proportion))
                .sum();
            assert_eq!(total, 100, "{size:?} proportions must cover the layout");
        }
    }

    #[test]
    fn hierarchy_roles_match_the_kit_roles() {
        for size in KitSize::ALL {
            let hierarchy_roles: Vec<PaletteRole> =
                hierarchy(size).iter().map(|weight| weight.role).collect();
            assert_eq!(hierarchy_roles.as_slice(), size.roles());
        }
    }
}
