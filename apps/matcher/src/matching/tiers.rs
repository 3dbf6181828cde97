//! Tiered base-score table — an ordered list of (predicate, formula) pairs
//! evaluated top to bottom, first match wins.

/// Match ratios over the requirement vocabulary (duplicates counted).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchRatios {
    pub exact: f64,
    pub partial: f64,
    pub important: f64,
    pub total: f64,
}

pub(crate) struct ScoreTier {
    pub applies: fn(&MatchRatios) -> bool,
    pub base: fn(&MatchRatios) -> f64,
}

/// The last tier accepts everything, so lookup always lands somewhere.
pub(crate) const SCORE_TIERS: &[ScoreTier] = &[
    ScoreTier {
        applies: |r| r.exact >= 0.7 && r.important >= 0.5,
        base: |r| 90.0 + r.exact * 10.0 + r.important * 5.0,
    },
    ScoreTier {
        applies: |r| r.exact >= 0.5 || (r.total >= 0.8 && r.important >= 0.3),
        base: |r| 85.0 + r.exact * 10.0 + r.total * 8.0 + r.important * 5.0,
    },
    ScoreTier {
        applies: |r| r.exact >= 0.3 || (r.total >= 0.6 && r.important >= 0.2),
        base: |r| 80.0 + r.exact * 12.0 + r.total * 8.0 + r.important * 8.0,
    },
    ScoreTier {
        applies: |r| r.exact >= 0.2 || r.total >= 0.4,
        base: |r| 75.0 + r.exact * 15.0 + r.total * 10.0 + r.important * 10.0,
    },
    ScoreTier {
        applies: |_| true,
        base: |r| 70.0 + r.total * 10.0 + r.exact * 20.0,
    },
];

/// Base score for the given ratios: the first applicable tier's formula.
pub fn base_score(ratios: &MatchRatios) -> f64 {
    for tier in SCORE_TIERS {
        if (tier.applies)(ratios) {
            return (tier.base)(ratios);
        }
    }
    unreachable!("tier table ends with a catch-all entry")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratios(exact: f64, partial: f64, important: f64, total: f64) -> MatchRatios {
        MatchRatios {
            exact,
            partial,
            important,
            total,
        }
    }

    #[test]
    fn test_top_tier_needs_exact_and_important() {
        // 90 + 0.8*10 + 0.6*5 = 101
        let base = base_score(&ratios(0.8, 0.0, 0.6, 0.8));
        assert!((base - 101.0).abs() < 1e-9, "base was {base}");
    }

    #[test]
    fn test_first_match_wins_over_later_tiers() {
        // important 0.4 misses the top tier; exact 0.8 lands in the second:
        // 85 + 0.8*10 + 0.9*8 + 0.4*5 = 102.2
        let base = base_score(&ratios(0.8, 0.1, 0.4, 0.9));
        assert!((base - 102.2).abs() < 1e-9, "base was {base}");
    }

    #[test]
    fn test_third_tier_via_total_and_important() {
        // exact 0.1 skips tiers 1-2; total 0.6 + important 0.2 hits tier 3:
        // 80 + 0.1*12 + 0.6*8 + 0.2*8 = 87.6
        let base = base_score(&ratios(0.1, 0.5, 0.2, 0.6));
        assert!((base - 87.6).abs() < 1e-9, "base was {base}");
    }

    #[test]
    fn test_fourth_tier_via_total_alone() {
        // 75 + 0*15 + 0.5*10 + 0*10 = 80
        let base = base_score(&ratios(0.0, 0.5, 0.0, 0.5));
        assert!((base - 80.0).abs() < 1e-9, "base was {base}");
    }

    #[test]
    fn test_catch_all_tier() {
        // 70 + 0.15*10 + 0.1*20 = 73.5
        let base = base_score(&ratios(0.1, 0.05, 0.0, 0.15));
        assert!((base - 73.5).abs() < 1e-9, "base was {base}");
    }

    #[test]
    fn test_catch_all_floor_is_70() {
        let base = base_score(&ratios(0.0, 0.0, 0.0, 0.0));
        assert!((base - 70.0).abs() < 1e-9, "base was {base}");
    }
}
