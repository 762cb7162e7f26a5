//! Building a [`Tierlist`] from a [`TierlistConfig`].
//!
//! Category names are only meaningful inside a config file: each declared
//! name becomes exactly one [`Category`] instance, and scores and weights
//! are resolved against those instances.

use tracing::info;

use crate::category::Category;
use crate::rubric::Rubric;
use crate::subject::Subject;
use crate::tierlist::Tierlist;
use crate::tiers::TierThresholds;
use tierlist_common::{Result, TierlistConfig, TierlistError};

/// Validate `config` and construct the scored tierlist it describes.
///
/// Subjects without a value for some category are kept unscored there;
/// ranking them reports an incomplete evaluation.
pub fn build_tierlist(config: &TierlistConfig) -> Result<Tierlist> {
    config.validate()?;

    let categories: Vec<Category> = config
        .categories
        .iter()
        .map(|spec| Category::new(spec.name.clone(), spec.min, spec.max))
        .collect();

    let rubric = Rubric::with_weights(
        config.rubric.clone(),
        categories
            .iter()
            .cloned()
            .zip(config.categories.iter().map(|spec| spec.weight)),
    )?;

    let mut subjects = Vec::with_capacity(config.subjects.len());
    for spec in &config.subjects {
        let mut subject = Subject::new(spec.name.clone(), &categories);
        for (category_name, value) in &spec.scores {
            let category = categories
                .iter()
                .find(|c| c.name() == category_name.as_str())
                .ok_or_else(|| TierlistError::UnknownCategory(category_name.clone()))?;
            subject.set_score(category, *value)?;
        }
        subjects.push(subject);
    }

    info!(
        tierlist = %config.name,
        subjects = subjects.len(),
        categories = categories.len(),
        "Tierlist loaded from configuration"
    );
    Ok(Tierlist::from_subjects_and_rubric(subjects, rubric, categories))
}

/// Tier cut-offs declared in `config`.
pub fn thresholds(config: &TierlistConfig) -> TierThresholds {
    TierThresholds::new(config.tiers.clone())
}
