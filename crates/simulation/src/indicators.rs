//! Circularity indicators derived from the lever positions.

use catch_core::Levers;
use serde::{Deserialize, Serialize};

/// Coarse rating of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    /// `Low` below `medium`, `High` from `high` upwards.
    fn rate(value: u8, medium: u8, high: u8) -> Self {
        if value < medium {
            Tier::Low
        } else if value < high {
            Tier::Medium
        } else {
            Tier::High
        }
    }
}

/// How circular the simulated process is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicators {
    /// `recycling - processing / 2`, in `0..=100`.
    pub circularity_pct: u8,
    pub circularity_tier: Tier,
    /// `recycling / 10 - processing / 10`, in `0..=10`.
    pub green_action_score: u8,
    pub green_action_tier: Tier,
}

impl Indicators {
    pub fn from_levers(levers: Levers) -> Self {
        let recycling = levers.recycling_pct as i32;
        let processing = levers.processing_pct as i32;

        let circularity_pct = (recycling - processing / 2).clamp(0, 100) as u8;
        let green_action_score = (recycling / 10 - processing / 10).clamp(0, 10) as u8;

        Self {
            circularity_pct,
            circularity_tier: Tier::rate(circularity_pct, 50, 80),
            green_action_score,
            green_action_tier: Tier::rate(green_action_score, 4, 8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicators(recycling: u32, processing: u32) -> Indicators {
        Indicators::from_levers(Levers::new(recycling, processing).unwrap())
    }

    #[test]
    fn test_at_rest() {
        let ind = indicators(0, 0);
        assert_eq!(ind.circularity_pct, 0);
        assert_eq!(ind.green_action_score, 0);
        assert_eq!(ind.circularity_tier, Tier::Low);
    }

    #[test]
    fn test_full_recycling() {
        let ind = indicators(100, 0);
        assert_eq!(ind.circularity_pct, 100);
        assert_eq!(ind.circularity_tier, Tier::High);
        assert_eq!(ind.green_action_score, 10);
        assert_eq!(ind.green_action_tier, Tier::High);
    }

    #[test]
    fn test_processing_pulls_down() {
        let ind = indicators(75, 25);
        // 75 - 12
        assert_eq!(ind.circularity_pct, 63);
        assert_eq!(ind.circularity_tier, Tier::Medium);
        // 7 - 2
        assert_eq!(ind.green_action_score, 5);
        assert_eq!(ind.green_action_tier, Tier::Medium);
    }

    #[test]
    fn test_clamped_at_zero() {
        let ind = indicators(25, 100);
        assert_eq!(ind.circularity_pct, 0);
        assert_eq!(ind.green_action_score, 0);
    }
}
