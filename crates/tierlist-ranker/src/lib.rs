//! tierlist-ranker — Weighted composite scoring and ranking of evaluated subjects.
//!
//! Raw per-category values are normalised against each [`Category`]'s range,
//! weighted by a [`Rubric`] and summed into an overall score per [`Subject`].
//! A [`Tierlist`] ranks its subjects by that score.

pub mod normalise;
pub mod category;
pub mod rubric;
pub mod subject;
pub mod tierlist;
pub mod tiers;
pub mod loader;

pub use category::{Category, CategoryId};
pub use rubric::Rubric;
pub use subject::Subject;
pub use tierlist::{RankedSubject, Tierlist};
pub use tiers::{TierBucket, TierThresholds};
pub use tierlist_common::{Result, TierlistError};
