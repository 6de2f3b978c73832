pub mod rating;
pub mod scorer;
pub mod tier;
pub mod validation;

pub use rating::Rating;
pub use scorer::{ScoreSet, Scorer, CATEGORY_COUNT, MAX_TOTAL};
pub use tier::{classify, RiskTier, TierLevel, Tone, RISK_TIERS};
pub use validation::parse_answers;
