//! Contrast repair: find the nearest lightness that satisfies a target
//! ratio while preserving hue and chroma.

use tracing::debug;

use tonal_model::{Palette, Plch, RepairTier, RoleLocks};

use crate::ratio::{contrast_ratio, DARK_TEXT, LIGHT_TEXT};

/// Number of discretization intervals for the lightness scan. 201 samples
/// at step 1/200 across `[0, 1]`.
const SCAN_STEPS: u32 = 200;

/// WCAG AA target for normal text.
const AA_TARGET: f64 = 4.5;
/// Relaxed target for muted/secondary text.
const MUTED_TARGET: f64 = 3.0;

/// Search the 201 discretized lightness values for the one closest to the
/// original that reaches `target` against every supplied background (a
/// worst-case/min constraint, which is why this is an explicit scan and
/// not a closed-form solve: the feasible set need not be convex once
/// multiple backgrounds are involved).
///
/// If no sample reaches the target, returns the sample with the highest
/// achieved minimum ratio. Best-effort by contract; callers observe
/// residual failures through evaluation, never through an error.
pub fn adjust_lightness_for_targets(color: Plch, backgrounds: &[Plch], target: f64) -> Plch {
    let mut best = color;
    let mut best_distance = f64::INFINITY;
    let mut best_min_ratio = -1.0;
    let mut found_target = false;

    for i in 0..=SCAN_STEPS {
        let l = f64::from(i) / f64::from(SCAN_STEPS);
        let candidate = color.with_l(l);
        let min_ratio = backgrounds
            .iter()
            .map(|bg| contrast_ratio(candidate, *bg))
            .fold(f64::INFINITY, f64::min);
        let distance = (l - color.l).abs();

        if min_ratio >= target {
            if !found_target || distance < best_distance {
                best = candidate;
                best_distance = distance;
            }
            found_target = true;
            continue;
        }

        if !found_target && min_ratio > best_min_ratio {
            best = candidate;
            best_min_ratio = min_ratio;
        }
    }

    if !found_target {
        debug!(
            target_ratio = target,
            achieved = best_min_ratio,
            "contrast target unreachable, returning best effort"
        );
    }

    best
}

/// Binary-search variant used where a single background is involved and
/// the direction of adjustment is known from its lightness. Converges to
/// within 0.1 of the target ratio in at most 20 iterations; colors that
/// already meet the target are returned unchanged.
pub fn adjust_for_contrast(color: Plch, background: Plch, target_ratio: f64) -> Plch {
    let mut adjusted = color;
    let mut current_ratio = contrast_ratio(adjusted, background);

    if current_ratio >= target_ratio {
        return adjusted;
    }

    let mut min_l = 0.0f64;
    let mut max_l = 1.0f64;

    for _ in 0..20 {
        if (current_ratio - target_ratio).abs() <= 0.1 {
            break;
        }
        let mid_l = (min_l + max_l) / 2.0;
        adjusted = color.with_l(mid_l);
        current_ratio = contrast_ratio(adjusted, background);

        if current_ratio < target_ratio {
            // Need more contrast: move away from the background's side.
            if background.l > 0.5 {
                max_l = mid_l;
            } else {
                min_l = mid_l;
            }
        } else if background.l > 0.5 {
            min_l = mid_l;
        } else {
            max_l = mid_l;
        }
    }

    adjusted
}

/// The joint result of repairing `primary`: the adjusted color and the
/// reference text color committed alongside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimaryFix {
    pub primary: Plch,
    pub text: Plch,
}

/// Repair `primary` jointly with its text color. Unlike the other roles,
/// primary's paired text is not fixed in advance: the repair tries to
/// satisfy the target with light text and with dark text separately, then
/// commits whichever succeeded with the smaller lightness displacement.
/// If only one succeeds, it wins; if neither does, the higher achieved
/// ratio wins.
pub fn fix_primary_for_contrast(primary: Plch, target: f64) -> PrimaryFix {
    let with_light = adjust_lightness_for_targets(primary, &[LIGHT_TEXT], target);
    let with_dark = adjust_lightness_for_targets(primary, &[DARK_TEXT], target);

    let light_ratio = contrast_ratio(LIGHT_TEXT, with_light);
    let dark_ratio = contrast_ratio(DARK_TEXT, with_dark);
    let light_distance = (with_light.l - primary.l).abs();
    let dark_distance = (with_dark.l - primary.l).abs();

    if light_ratio >= target && dark_ratio >= target {
        return if light_distance <= dark_distance {
            PrimaryFix {
                primary: with_light,
                text: LIGHT_TEXT,
            }
        } else {
            PrimaryFix {
                primary: with_dark,
                text: DARK_TEXT,
            }
        };
    }

    if light_ratio >= target {
        return PrimaryFix {
            primary: with_light,
            text: LIGHT_TEXT,
        };
    }

    if dark_ratio >= target {
        return PrimaryFix {
            primary: with_dark,
            text: DARK_TEXT,
        };
    }

    if light_ratio >= dark_ratio {
        PrimaryFix {
            primary: with_light,
            text: LIGHT_TEXT,
        }
    } else {
        PrimaryFix {
            primary: with_dark,
            text: DARK_TEXT,
        }
    }
}

/// A repaired palette plus the text color committed for `primary`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepairOutcome {
    pub palette: Palette,
    pub primary_text: Plch,
}

/// Basic-tier repair: `text` against background and surface at 4.5, and
/// the joint `primary` fix. `muted` and `accent` pass through untouched.
pub fn fix_palette_basic(palette: &Palette) -> RepairOutcome {
    let text = adjust_lightness_for_targets(
        palette.text,
        &[palette.background, palette.surface],
        AA_TARGET,
    );
    let primary_fix = fix_primary_for_contrast(palette.primary, AA_TARGET);

    RepairOutcome {
        palette: Palette {
            text,
            primary: primary_fix.primary,
            ..*palette
        },
        primary_text: primary_fix.text,
    }
}

/// Advanced-tier repair: everything the basic tier does, plus `muted`
/// against background and surface at 3.0 and `accent` against background
/// only at 4.5. Accent is deliberately not checked against surface.
pub fn fix_palette_advanced(palette: &Palette) -> RepairOutcome {
    let text = adjust_lightness_for_targets(
        palette.text,
        &[palette.background, palette.surface],
        AA_TARGET,
    );
    let muted = adjust_lightness_for_targets(
        palette.muted,
        &[palette.background, palette.surface],
        MUTED_TARGET,
    );
    let accent = adjust_lightness_for_targets(palette.accent, &[palette.background], AA_TARGET);
    let primary_fix = fix_primary_for_contrast(palette.primary, AA_TARGET);

    RepairOutcome {
        palette: Palette {
            text,
            muted,
            accent,
            primary: primary_fix.primary,
            ..*palette
        },
        primary_text: primary_fix.text,
    }
}

/// Tier dispatch. The tier is a plain capability flag; which one a caller
/// holds is the billing collaborator's business.
pub fn fix_palette(palette: &Palette, tier: RepairTier) -> RepairOutcome {
    match tier {
        RepairTier::Basic => fix_palette_basic(palette),
        RepairTier::Advanced => fix_palette_advanced(palette),
    }
}

/// Apply user locks on top of a (possibly repaired) palette. Locks always
/// win: the locked value replaces the computed one verbatim.
pub fn apply_locks(palette: Palette, locks: &RoleLocks) -> Palette {
    let mut result = palette;
    for (role, color) in locks.iter() {
        result = result.with_role(role, color);
    }
    result
}
