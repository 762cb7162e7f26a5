//! Tierlist configuration.
//!
//! A tierlist can be described in YAML, JSON or TOML: the categories with
//! their ranges and weights, the subjects with raw per-category values, and
//! the tier cut-offs used to bucket the final ranking.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::error::{Result, TierlistError};

/// Complete tierlist definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierlistConfig {
    /// Display name of the tierlist
    #[serde(default = "default_name")]
    pub name: String,

    /// Name given to the rubric built from the category weights
    #[serde(default = "default_rubric")]
    pub rubric: String,

    /// Evaluation axes
    #[serde(default)]
    pub categories: Vec<CategorySpec>,

    /// Evaluated entities
    #[serde(default)]
    pub subjects: Vec<SubjectSpec>,

    /// Tier cut-offs, highest first
    #[serde(default = "default_tiers")]
    pub tiers: Vec<TierSpec>,
}

fn default_name() -> String { "tierlist".to_string() }
fn default_rubric() -> String { "default".to_string() }

impl Default for TierlistConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            rubric: default_rubric(),
            categories: vec![],
            subjects: vec![],
            tiers: default_tiers(),
        }
    }
}

// ── Categories ────────────────────────────────────────────────────────────────

/// A category definition with its normalisation range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpec {
    pub name: String,

    /// Raw value mapped to a score of 0
    pub min: f64,

    /// Raw value mapped to a score of 1
    pub max: f64,

    /// Relative importance in the rubric
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 { 1.0 }

// ── Subjects ──────────────────────────────────────────────────────────────────

/// A subject and its raw values, keyed by category name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectSpec {
    pub name: String,

    #[serde(default)]
    pub scores: BTreeMap<String, f64>,
}

// ── Tiers ─────────────────────────────────────────────────────────────────────

/// One tier: subjects whose overall score is at least `min_score` land here
/// unless a higher tier already took them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierSpec {
    pub label: String,
    pub min_score: f64,
}

fn default_tiers() -> Vec<TierSpec> {
    [("S", 0.9), ("A", 0.75), ("B", 0.5), ("C", 0.25), ("D", 0.0)]
        .into_iter()
        .map(|(label, min_score)| TierSpec { label: label.to_string(), min_score })
        .collect()
}

// ── Helper Methods ─────────────────────────────────────────────────────────────

impl TierlistConfig {
    /// Load from YAML file
    pub fn from_yaml(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load from JSON file
    pub fn from_json(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load from TOML file
    pub fn from_toml(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save to YAML file
    pub fn to_yaml(&self, path: &str) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check name uniqueness, category ranges, weights, score references
    /// and tier ordering.
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for category in &self.categories {
            if !names.insert(category.name.as_str()) {
                return Err(TierlistError::DuplicateCategory(category.name.clone()));
            }
            if !category.min.is_finite() || !category.max.is_finite() || category.min == category.max {
                return Err(TierlistError::DegenerateCategory {
                    category: category.name.clone(),
                    min: category.min,
                    max: category.max,
                });
            }
            if !(category.weight >= 0.0 && category.weight.is_finite()) {
                return Err(TierlistError::NegativeWeight {
                    category: category.name.clone(),
                    weight: category.weight,
                });
            }
        }

        let mut subjects = HashSet::new();
        for subject in &self.subjects {
            if !subjects.insert(subject.name.as_str()) {
                return Err(TierlistError::Config(format!(
                    "subject '{}' is listed more than once",
                    subject.name
                )));
            }
            if let Some(unknown) = subject.scores.keys().find(|k| !names.contains(k.as_str())) {
                return Err(TierlistError::UnknownCategory(unknown.clone()));
            }
        }

        if let Some(tier) = self.tiers.iter().find(|t| !t.min_score.is_finite()) {
            return Err(TierlistError::Config(format!(
                "tier '{}' has a non-finite min_score",
                tier.label
            )));
        }

        if self.tiers.windows(2).any(|w| w[0].min_score < w[1].min_score) {
            return Err(TierlistError::Config(
                "tiers must be listed from highest to lowest min_score".to_string(),
            ));
        }

        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
