//! Weighting schemes over categories.

use serde::Serialize;
use tracing::debug;

use crate::category::Category;
use tierlist_common::{Result, TierlistError};

/// A named mapping from categories to relative weights.
///
/// `total_mass` is the sum of all weights and is recomputed on every
/// mutation. Entries keep insertion order, so weighted sums are accumulated
/// in a deterministic order.
#[derive(Debug, Clone, Serialize)]
pub struct Rubric {
    name: String,
    mapping: Vec<(Category, f64)>,
    total_mass: f64,
}

impl Rubric {
    /// Every category gets weight 1.
    pub fn uniform(name: impl Into<String>, categories: &[Category]) -> Self {
        let mut rubric = Self {
            name: name.into(),
            mapping: Vec::with_capacity(categories.len()),
            total_mass: 0.0,
        };
        for category in categories {
            rubric.upsert(category.clone(), 1.0);
        }
        rubric.recompute_mass();
        rubric
    }

    /// Explicit weights. A category listed twice keeps its last weight.
    pub fn with_weights<I>(name: impl Into<String>, weights: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Category, f64)>,
    {
        let mut rubric = Self {
            name: name.into(),
            mapping: Vec::new(),
            total_mass: 0.0,
        };
        for (category, weight) in weights {
            check_weight(&category, weight)?;
            rubric.upsert(category, weight);
        }
        rubric.recompute_mass();
        Ok(rubric)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_mass(&self) -> f64 {
        self.total_mass
    }

    /// Set the weight of `category`, adding it if the rubric did not weight it yet.
    pub fn set_weight(&mut self, category: &Category, weight: f64) -> Result<()> {
        check_weight(category, weight)?;
        self.upsert(category.clone(), weight);
        self.recompute_mass();
        debug!(
            rubric = %self.name,
            category = category.name(),
            weight,
            total_mass = self.total_mass,
            "Rubric weight set"
        );
        Ok(())
    }

    pub fn weight(&self, category: &Category) -> Option<f64> {
        self.mapping
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, w)| *w)
    }

    /// Share of the total mass carried by `category`.
    /// `None` when the category is not weighted or the rubric has no mass.
    pub fn fraction(&self, category: &Category) -> Option<f64> {
        if self.total_mass == 0.0 {
            return None;
        }
        self.weight(category).map(|w| w / self.total_mass)
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.weight(category).is_some()
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.mapping.iter().map(|(c, _)| c)
    }

    pub fn weights(&self) -> impl Iterator<Item = (&Category, f64)> {
        self.mapping.iter().map(|(c, w)| (c, *w))
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    fn upsert(&mut self, category: Category, weight: f64) {
        match self.mapping.iter_mut().find(|(c, _)| *c == category) {
            Some(entry) => entry.1 = weight,
            None => self.mapping.push((category, weight)),
        }
    }

    fn recompute_mass(&mut self) {
        self.total_mass = self.mapping.iter().map(|(_, w)| w).sum();
    }
}

/// Rejects negative, NaN and infinite weights.
fn check_weight(category: &Category, weight: f64) -> Result<()> {
    if weight >= 0.0 && weight.is_finite() {
        Ok(())
    } else {
        Err(TierlistError::NegativeWeight {
            category: category.name().to_string(),
            weight,
        })
    }
}
