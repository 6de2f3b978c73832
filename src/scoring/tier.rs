use serde::Serialize;
use std::ops::RangeInclusive;

/// Which of the three outcomes a total falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TierLevel {
    OperationalDebt,
    EfficiencyTrap,
    AiFirstLeader,
}

/// Display tone for a tier. The TUI theme and the text report map these to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Danger,
    Caution,
    Success,
}

/// Static outcome record selected by total score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskTier {
    pub level: TierLevel,
    pub label: &'static str,
    pub description: &'static str,
    pub tone: Tone,
    pub range: RangeInclusive<u32>,
}

/// Ordered, contiguous and exhaustive over 1..=30.
pub static RISK_TIERS: [RiskTier; 3] = [
    RiskTier {
        level: TierLevel::OperationalDebt,
        label: "Operational Debt Risk",
        description: "Your revenue engine is running on 'Manual Pilot'. High risk of competitor 'tech-theft' of your key accounts.",
        tone: Tone::Danger,
        range: 1..=12,
    },
    RiskTier {
        level: TierLevel::EfficiencyTrap,
        label: "The Efficiency Trap",
        description: "You have digital tools, but they are 'Passive'. You are paying for a CRM that acts as a graveyard, not a growth engine.",
        tone: Tone::Caution,
        range: 13..=20,
    },
    RiskTier {
        level: TierLevel::AiFirstLeader,
        label: "AI-First Sales Leader",
        description: "You operate with 'Active Intelligence'. Your reps focus on closing, while AI handles the technical and administrative heavy lifting.",
        tone: Tone::Success,
        range: 21..=30,
    },
];

/// Map a total to its tier. A total of zero means nothing has been scored yet.
pub fn classify(total: u32) -> Option<&'static RiskTier> {
    if total == 0 {
        return None;
    }
    // Totals never exceed 30; anything above still belongs to the top tier
    RISK_TIERS
        .iter()
        .find(|tier| tier.range.contains(&total))
        .or(RISK_TIERS.last())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_has_no_tier() {
        assert!(classify(0).is_none());
    }

    #[test]
    fn test_lower_boundary() {
        assert_eq!(classify(1).unwrap().level, TierLevel::OperationalDebt);
        assert_eq!(classify(12).unwrap().level, TierLevel::OperationalDebt);
        assert_eq!(classify(13).unwrap().level, TierLevel::EfficiencyTrap);
    }

    #[test]
    fn test_upper_boundary() {
        assert_eq!(classify(20).unwrap().level, TierLevel::EfficiencyTrap);
        assert_eq!(classify(21).unwrap().level, TierLevel::AiFirstLeader);
        assert_eq!(classify(30).unwrap().level, TierLevel::AiFirstLeader);
    }

    #[test]
    fn test_ranges_are_contiguous_and_exhaustive() {
        for total in 1..=30 {
            let matching = RISK_TIERS
                .iter()
                .filter(|t| t.range.contains(&total))
                .count();
            assert_eq!(matching, 1, "total {} matched {} tiers", total, matching);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(classify(5).unwrap().label, "Operational Debt Risk");
        assert_eq!(classify(15).unwrap().label, "The Efficiency Trap");
        assert_eq!(classify(25).unwrap().label, "AI-First Sales Leader");
    }

    #[test]
    fn test_tones_follow_severity() {
        assert_eq!(classify(1).unwrap().tone, Tone::Danger);
        assert_eq!(classify(13).unwrap().tone, Tone::Caution);
        assert_eq!(classify(21).unwrap().tone, Tone::Success);
    }
}
