//! Load-separation decisions across multiple garments
//!
//! The whole-image classifier answers "what group does this photo belong
//! to"; this module answers "can the garments in one basket go in the same
//! machine". Each kept dominant color maps to a garment group, and the set
//! of groups reduces to a wash-together or separate verdict with tips.
//! The interactive review flow (excluding detected colors) lives outside
//! the core; this is the decision logic it calls into.

use palette::Hsv;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Coarse garment category for load separation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GarmentGroup {
    White,
    LightGray,
    DarkGray,
    Dark,
    Strong,
    Light,
    Colors,
}

impl GarmentGroup {
    /// Stable label for tables and serialized reports
    pub fn as_str(&self) -> &'static str {
        match self {
            GarmentGroup::White => "WHITE",
            GarmentGroup::LightGray => "LIGHT GRAY",
            GarmentGroup::DarkGray => "DARK GRAY",
            GarmentGroup::Dark => "DARK",
            GarmentGroup::Strong => "STRONG",
            GarmentGroup::Light => "LIGHT",
            GarmentGroup::Colors => "COLORS",
        }
    }
}

impl fmt::Display for GarmentGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict over one basket's garment groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadDecision {
    /// Whether the basket should be split into separate loads
    pub separate: bool,
    /// One-line verdict
    pub verdict: String,
    /// Separation or washing tips, one per conflict found
    pub tips: Vec<String>,
}

/// Map one garment's dominant color to its group
///
/// Achromatic checks run first, then darkness, then color strength. The
/// cutoffs differ from the whole-image rule table: a single garment is
/// judged on its own color, not on a proportion-weighted mixture.
pub fn garment_group(hsv: Hsv) -> GarmentGroup {
    let sat = hsv.saturation;
    let val = hsv.value;

    if val > 0.92 && sat < 0.15 {
        GarmentGroup::White
    } else if sat < 0.18 && val >= 0.25 {
        if val > 0.6 {
            GarmentGroup::LightGray
        } else {
            GarmentGroup::DarkGray
        }
    } else if val < 0.25 {
        GarmentGroup::Dark
    } else if sat > 0.6 && val > 0.5 {
        GarmentGroup::Strong
    } else if val >= 0.8 {
        GarmentGroup::Light
    } else {
        GarmentGroup::Colors
    }
}

/// Reduce a basket's garment groups to a separation verdict
///
/// Conflicts checked, in order: whites mixed with anything else, lights
/// mixed with darks, strong colors mixed with lights or whites. With no
/// conflict the basket washes together with a cold-water tip.
pub fn load_decision(groups: &BTreeSet<GarmentGroup>) -> LoadDecision {
    let has_white = groups.contains(&GarmentGroup::White);
    let has_dark =
        groups.contains(&GarmentGroup::Dark) || groups.contains(&GarmentGroup::DarkGray);
    let has_light =
        groups.contains(&GarmentGroup::Light) || groups.contains(&GarmentGroup::LightGray);
    let has_strong = groups.contains(&GarmentGroup::Strong);

    let mut tips = Vec::new();
    if has_white && groups.len() > 1 {
        tips.push("Wash the whites separately.".to_string());
    }
    if has_light && has_dark {
        tips.push("Keep lights and light grays away from darks.".to_string());
    }
    if has_strong && (has_light || has_white) {
        tips.push(
            "Strong colors go alone for the first wash, or with similar colors, in cold water."
                .to_string(),
        );
    }

    if tips.is_empty() {
        LoadDecision {
            separate: false,
            verdict: "These garments can be washed together.".to_string(),
            tips: vec!["Use cold water and a regular cycle.".to_string()],
        }
    } else {
        LoadDecision {
            separate: true,
            verdict: "Separation recommended.".to_string(),
            tips,
        }
    }
}
