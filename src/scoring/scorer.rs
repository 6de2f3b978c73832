use super::rating::Rating;
use super::tier::{classify, RiskTier};

/// Number of scored categories.
pub const CATEGORY_COUNT: usize = 6;

/// Highest reachable total (every category rated 5).
pub const MAX_TOTAL: u32 = (CATEGORY_COUNT as u32) * (Rating::MAX as u32);

/// The six per-category ratings, in category order.
///
/// Unanswered entries are `None` rather than zero. The raw view
/// ([`ScoreSet::raw`]) still reports them as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSet {
    entries: [Option<Rating>; CATEGORY_COUNT],
}

impl ScoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rating at `index`.
    ///
    /// # Panics
    /// Panics if `index >= CATEGORY_COUNT`.
    pub fn set(&mut self, index: usize, rating: Rating) {
        self.entries[index] = Some(rating);
    }

    pub fn get(&self, index: usize) -> Option<Rating> {
        self.entries.get(index).copied().flatten()
    }

    pub fn total(&self) -> u32 {
        self.entries
            .iter()
            .flatten()
            .map(|r| u32::from(r.value()))
            .sum()
    }

    pub fn answered(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn raw(&self) -> [u8; CATEGORY_COUNT] {
        self.entries.map(|e| e.map_or(0, Rating::value))
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<Rating>> + '_ {
        self.entries.iter().copied()
    }
}

/// Owns the session's [`ScoreSet`] and answers total/tier queries against it.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    scores: ScoreSet,
}

impl Scorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scores(scores: ScoreSet) -> Self {
        Self { scores }
    }

    /// Record the rating for one category, overwriting any earlier answer.
    ///
    /// # Panics
    /// Panics if `index >= CATEGORY_COUNT`.
    pub fn set_score(&mut self, index: usize, value: Rating) {
        self.scores.set(index, value);
    }

    pub fn score(&self, index: usize) -> Option<Rating> {
        self.scores.get(index)
    }

    /// Sum of all six entries, 0..=30. Recomputed on every call.
    pub fn total_score(&self) -> u32 {
        self.scores.total()
    }

    /// Tier for the current total, or `None` while nothing has been scored.
    pub fn risk_tier(&self) -> Option<&'static RiskTier> {
        classify(self.total_score())
    }

    pub fn answered_count(&self) -> usize {
        self.scores.answered()
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == CATEGORY_COUNT
    }

    pub fn raw_scores(&self) -> [u8; CATEGORY_COUNT] {
        self.scores.raw()
    }

    pub fn scores(&self) -> &ScoreSet {
        &self.scores
    }
}
