//! Evaluated entities and their weighted overall score.

use serde::Serialize;
use tracing::trace;

use crate::category::Category;
use crate::rubric::Rubric;
use tierlist_common::{Result, TierlistError};

/// An entity under evaluation.
///
/// Holds one normalised score per declared category; a score stays `None`
/// until [`Subject::set_score`] is called for that category.
#[derive(Debug, Clone, Serialize)]
pub struct Subject {
    name: String,
    scores: Vec<(Category, Option<f64>)>,
}

impl Subject {
    pub fn new(name: impl Into<String>, categories: &[Category]) -> Self {
        let mut scores: Vec<(Category, Option<f64>)> = Vec::with_capacity(categories.len());
        for category in categories {
            if !scores.iter().any(|(c, _)| c == category) {
                scores.push((category.clone(), None));
            }
        }
        Self {
            name: name.into(),
            scores,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalise `value` against `category` and store it, replacing any
    /// earlier score for that category.
    ///
    /// Categories the subject was not created with are rejected rather than
    /// silently added.
    pub fn set_score(&mut self, category: &Category, value: f64) -> Result<()> {
        let entry = self
            .scores
            .iter_mut()
            .find(|(c, _)| c == category)
            .ok_or_else(|| TierlistError::ForeignCategory {
                subject: self.name.clone(),
                category: category.name().to_string(),
            })?;
        entry.1 = Some(category.get_score(value)?);
        Ok(())
    }

    /// Normalised score for `category`, if one has been recorded.
    pub fn score(&self, category: &Category) -> Option<f64> {
        self.scores
            .iter()
            .find(|(c, _)| c == category)
            .and_then(|(_, s)| *s)
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.scores.iter().map(|(c, _)| c)
    }

    pub fn is_complete(&self) -> bool {
        self.scores.iter().all(|(_, s)| s.is_some())
    }

    pub fn unset_categories(&self) -> Vec<&Category> {
        self.scores
            .iter()
            .filter(|(_, s)| s.is_none())
            .map(|(c, _)| c)
            .collect()
    }

    /// Weighted overall score: Σ score(c) × weight(c) / total_mass.
    ///
    /// The subject's categories and the rubric's categories must match
    /// exactly, and every category must have a score.
    pub fn get_overall_score(&self, rubric: &Rubric) -> Result<f64> {
        let unset = self.unset_categories();
        if !unset.is_empty() {
            return Err(TierlistError::IncompleteEvaluation {
                subject: self.name.clone(),
                categories: unset.iter().map(|c| c.name().to_string()).collect(),
            });
        }

        let mut weighted = Vec::with_capacity(self.scores.len());
        for (category, score) in &self.scores {
            let weight = rubric.weight(category).ok_or_else(|| TierlistError::UnweightedCategory {
                subject: self.name.clone(),
                category: category.name().to_string(),
                rubric: rubric.name().to_string(),
            })?;
            if let Some(score) = score {
                weighted.push((*score, weight));
            }
        }

        if let Some(category) = rubric
            .categories()
            .find(|c| !self.scores.iter().any(|(own, _)| own == *c))
        {
            return Err(TierlistError::UnevaluatedCategory {
                subject: self.name.clone(),
                category: category.name().to_string(),
                rubric: rubric.name().to_string(),
            });
        }

        let total_mass = rubric.total_mass();
        if total_mass == 0.0 {
            return Err(TierlistError::ZeroMassRubric {
                rubric: rubric.name().to_string(),
            });
        }

        let overall: f64 = weighted
            .iter()
            .map(|(score, weight)| score * (weight / total_mass))
            .sum();

        trace!(subject = %self.name, rubric = rubric.name(), overall, "Overall score computed");
        Ok(overall)
    }
}
