//! Evaluation axes.

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::normalise::linear_normalise;
use tierlist_common::{Result, TierlistError};

/// Stable identity of a [`Category`], assigned at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CategoryId(Uuid);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An axis subjects are evaluated on, with the raw range used to normalise
/// values into fractional scores.
///
/// Categories compare by identity: clones share an id and are the same key,
/// while two separately constructed categories are distinct even when their
/// name and range match.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    min: f64,
    max: f64,
}

impl Category {
    pub fn new(name: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            id: CategoryId(Uuid::new_v4()),
            name: name.into(),
            min,
            max,
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Normalise a raw value: `(value - min) / (max - min)`, unclamped.
    ///
    /// Fails on a degenerate range and on any raw value or result that is
    /// not finite.
    pub fn get_score(&self, value: f64) -> Result<f64> {
        let score = linear_normalise(value, self.min, self.max).ok_or_else(|| {
            TierlistError::DegenerateCategory {
                category: self.name.clone(),
                min: self.min,
                max: self.max,
            }
        })?;
        if !value.is_finite() || !score.is_finite() {
            return Err(TierlistError::NonFiniteScore {
                category: self.name.clone(),
                value,
            });
        }
        Ok(score)
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

impl std::hash::Hash for Category {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
