use anyhow::{bail, Result};
use serde::Serialize;
use std::fmt;

/// A single category rating on the 1 (manual) to 5 (AI-first) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Starting point when a category is first nudged up
    pub const LOWEST: Rating = Rating(Self::MIN);

    pub fn new(value: u8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            bail!(
                "rating must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            );
        }
        Ok(Rating(value))
    }

    pub fn parse(s: &str) -> Result<Self> {
        let value: u8 = s.trim().parse()?;
        Self::new(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Every rating in ascending order, one per score button.
    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }

    /// Next rating up, saturating at the top of the scale
    pub fn raised(self) -> Self {
        Rating((self.0 + 1).min(Self::MAX))
    }

    /// Next rating down, saturating at the bottom of the scale
    pub fn lowered(self) -> Self {
        Rating((self.0 - 1).max(Self::MIN))
    }
}

impl TryFrom<u8> for Rating {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self> {
        Rating::new(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
