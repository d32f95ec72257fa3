//! Wash-group classification
//!
//! Applies an ordered rule table to the aggregated color statistics. The
//! table is evaluated top to bottom and the first matching rule wins, so
//! precedence is auditable in one place: an image that is bright in value
//! with a strong red share still lands in WHITE or LIGHT because those
//! rules are checked first.

use crate::constants::rules;
use crate::stats::ColorStatistics;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Laundry wash group assigned to one image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WashGroup {
    White,
    Light,
    Bright,
    Dark,
    General,
}

impl WashGroup {
    /// Stable label for tables and serialized reports
    pub fn as_str(&self) -> &'static str {
        match self {
            WashGroup::White => "WHITE",
            WashGroup::Light => "LIGHT",
            WashGroup::Bright => "BRIGHT",
            WashGroup::Dark => "DARK",
            WashGroup::General => "GENERAL",
        }
    }

    /// Wash temperature and grouping guidance for this group
    fn advice(&self) -> &'static str {
        match self {
            WashGroup::White => "Wash alone or with whites only; warm or hot water.",
            WashGroup::Light => "Wash with light colors only; cold or lukewarm water.",
            WashGroup::Bright => {
                "Wash alone the first few times or with similarly strong colors; cold water, inside out."
            }
            WashGroup::Dark => "Wash with darks only; cold water; turn garments inside out.",
            WashGroup::General => "Wash with similar mid-tone colors; cold water.",
        }
    }
}

impl fmt::Display for WashGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for one image: group, advisory text, rounded bleed score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Assigned wash group
    pub group: WashGroup,
    /// Human-readable advisory, with a bleed warning appended when due
    pub advice: String,
    /// Bleed score rounded to 3 decimal places
    pub bleed_score: f32,
}

/// Warning appended to the advice of any group once the bleed score
/// reaches [`rules::BLEED_WARNING_THRESHOLD`]
const BLEED_WARNING: &str =
    "High color-bleed risk: use a color-catcher sheet or a short soak in diluted vinegar before the first wash.";

/// One entry of the ordered rule table
struct Rule {
    group: WashGroup,
    applies: fn(&ColorStatistics) -> bool,
}

fn is_white(stats: &ColorStatistics) -> bool {
    stats.mean_value > rules::WHITE_MIN_VALUE && stats.mean_saturation < rules::WHITE_MAX_SATURATION
}

fn is_light(stats: &ColorStatistics) -> bool {
    stats.mean_value > rules::LIGHT_MIN_VALUE && stats.mean_saturation < rules::LIGHT_MAX_SATURATION
}

fn is_bright(stats: &ColorStatistics) -> bool {
    stats.mean_saturation > rules::BRIGHT_MIN_SATURATION && stats.red_ratio > rules::BRIGHT_MIN_RED_RATIO
}

fn is_dark(stats: &ColorStatistics) -> bool {
    stats.mean_value < rules::DARK_MAX_VALUE
}

fn always(_: &ColorStatistics) -> bool {
    true
}

/// Rule order is load-bearing; see module docs
const RULES: &[Rule] = &[
    Rule { group: WashGroup::White, applies: is_white },
    Rule { group: WashGroup::Light, applies: is_light },
    Rule { group: WashGroup::Bright, applies: is_bright },
    Rule { group: WashGroup::Dark, applies: is_dark },
    Rule { group: WashGroup::General, applies: always },
];

fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

/// Classify aggregated statistics into a wash-group verdict
///
/// Deterministic and pure: the first matching rule of the ordered table
/// assigns the group, the group maps to a fixed advisory string, and a
/// color-bleed warning is appended regardless of group once the bleed
/// score reaches the warning threshold.
pub fn classify(stats: &ColorStatistics) -> Classification {
    let group = RULES
        .iter()
        .find(|rule| (rule.applies)(stats))
        .map_or(WashGroup::General, |rule| rule.group);
    debug!(group = group.as_str(), bleed_score = stats.bleed_score, "classified");

    let mut advice = group.advice().to_string();
    if stats.bleed_score >= rules::BLEED_WARNING_THRESHOLD {
        advice.push(' ');
        advice.push_str(BLEED_WARNING);
    }

    Classification {
        group,
        advice,
        bleed_score: round3(stats.bleed_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(mean_saturation: f32, mean_value: f32, red_ratio: f32) -> ColorStatistics {
        let bleed_score = mean_saturation * (1.0 - (mean_value - 0.5).abs() * 2.0);
        ColorStatistics {
            mean_saturation,
            mean_value,
            red_ratio,
            blue_ratio: 0.0,
            bleed_score,
        }
    }

    #[test]
    fn test_rule_table_order() {
        let order: Vec<WashGroup> = RULES.iter().map(|rule| rule.group).collect();
        assert_eq!(
            order,
            vec![
                WashGroup::White,
                WashGroup::Light,
                WashGroup::Bright,
                WashGroup::Dark,
                WashGroup::General,
            ]
        );
    }

    #[test]
    fn test_each_group_is_reachable() {
        assert_eq!(classify(&stats(0.05, 0.95, 0.0)).group, WashGroup::White);
        assert_eq!(classify(&stats(0.25, 0.80, 0.0)).group, WashGroup::Light);
        assert_eq!(classify(&stats(0.70, 0.50, 0.40)).group, WashGroup::Bright);
        assert_eq!(classify(&stats(0.40, 0.30, 0.0)).group, WashGroup::Dark);
        assert_eq!(classify(&stats(0.45, 0.60, 0.0)).group, WashGroup::General);
    }

    #[test]
    fn test_white_outranks_light() {
        // Satisfies both rule 1 and rule 2; rule 1 wins
        let verdict = classify(&stats(0.10, 0.90, 0.0));
        assert_eq!(verdict.group, WashGroup::White);
    }

    #[test]
    fn test_white_outranks_bright_boundary() {
        // A bright-value image with a dominant red share: rules 1-2 are
        // checked before rule 3, so the red ratio alone cannot pull the
        // verdict to BRIGHT
        let verdict = classify(&stats(0.10, 0.90, 0.90));
        assert_eq!(verdict.group, WashGroup::White);
    }

    #[test]
    fn test_bright_outranks_dark() {
        let verdict = classify(&stats(0.70, 0.30, 0.40));
        assert_eq!(verdict.group, WashGroup::Bright);
    }

    #[test]
    fn test_thresholds_are_strict() {
        // Exactly at the WHITE bounds fails both strict comparisons and
        // falls through to LIGHT
        let verdict = classify(&stats(0.18, 0.85, 0.0));
        assert_eq!(verdict.group, WashGroup::Light);
    }

    #[test]
    fn test_bleed_warning_appended() {
        let risky = classify(&stats(0.70, 0.50, 0.40));
        assert!(risky.advice.contains("color-bleed"));

        let safe = classify(&stats(0.05, 0.95, 0.0));
        assert!(!safe.advice.contains("color-bleed"));
    }

    #[test]
    fn test_warning_is_group_independent() {
        // DARK group, mean value just below the cutoff but saturated
        // enough to cross the warning threshold
        let verdict = classify(&stats(0.90, 0.44, 0.0));
        assert_eq!(verdict.group, WashGroup::Dark);
        assert!(verdict.advice.contains("color-bleed"));
    }

    #[test]
    fn test_bleed_score_rounded_to_three_decimals() {
        let verdict = classify(&stats(0.7777, 0.5, 0.0));
        assert_eq!(verdict.bleed_score, 0.778);
    }
}
