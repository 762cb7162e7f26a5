//! Bucketing a ranking into labelled tiers.

use serde::Serialize;

use crate::tierlist::{RankedSubject, Tierlist};
use tierlist_common::{Result, TierSpec};

/// Label of the bucket holding subjects below every tier's cut-off.
pub const UNRANKED_LABEL: &str = "Unranked";

/// Ordered tier cut-offs, highest first.
#[derive(Debug, Clone, PartialEq)]
pub struct TierThresholds {
    tiers: Vec<TierSpec>,
}

impl TierThresholds {
    /// Tiers are sorted by descending `min_score` regardless of input order.
    pub fn new(mut tiers: Vec<TierSpec>) -> Self {
        tiers.sort_by(|a, b| b.min_score.total_cmp(&a.min_score));
        Self { tiers }
    }

    pub fn tiers(&self) -> &[TierSpec] {
        &self.tiers
    }

    /// Label of the first tier whose cut-off `score` meets.
    pub fn classify(&self, score: f64) -> Option<&str> {
        self.tiers
            .iter()
            .find(|t| score >= t.min_score)
            .map(|t| t.label.as_str())
    }
}

impl Default for TierThresholds {
    /// S ≥ 0.9, A ≥ 0.75, B ≥ 0.5, C ≥ 0.25, D ≥ 0.0
    fn default() -> Self {
        Self::new(tierlist_common::TierlistConfig::default().tiers)
    }
}

/// Ranked subjects sharing one tier, in ranking order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierBucket {
    pub label: String,
    pub subjects: Vec<RankedSubject>,
}

impl Tierlist {
    /// Rank subjects and group them by tier.
    ///
    /// Every configured tier gets a bucket, empty or not; an extra
    /// [`UNRANKED_LABEL`] bucket is appended only when some subject falls
    /// below all cut-offs.
    pub fn get_tiers(&self, thresholds: &TierThresholds) -> Result<Vec<TierBucket>> {
        let mut buckets: Vec<TierBucket> = thresholds
            .tiers()
            .iter()
            .map(|t| TierBucket {
                label: t.label.clone(),
                subjects: vec![],
            })
            .collect();
        let mut unranked = Vec::new();

        for ranked in self.get_ranked_list()? {
            let slot = thresholds
                .tiers()
                .iter()
                .position(|t| ranked.overall_score >= t.min_score);
            match slot {
                Some(i) => buckets[i].subjects.push(ranked),
                None => unranked.push(ranked),
            }
        }

        if !unranked.is_empty() {
            buckets.push(TierBucket {
                label: UNRANKED_LABEL.to_string(),
                subjects: unranked,
            });
        }
        Ok(buckets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    fn tier(label: &str, min_score: f64) -> TierSpec {
        TierSpec { label: label.to_string(), min_score }
    }

    #[test]
    fn test_classify_default() {
        let thresholds = TierThresholds::default();
        assert_eq!(thresholds.classify(0.95), Some("S"));
        assert_eq!(thresholds.classify(0.75), Some("A"));
        assert_eq!(thresholds.classify(0.3), Some("C"));
        assert_eq!(thresholds.classify(0.0), Some("D"));
        assert_eq!(thresholds.classify(-0.1), None);
    }

    #[test]
    fn test_thresholds_sorted() {
        let thresholds = TierThresholds::new(vec![tier("low", 0.1), tier("high", 0.8)]);
        assert_eq!(thresholds.tiers()[0].label, "high");
    }

    #[test]
    fn test_get_tiers_buckets() {
        let c = Category::new("C", 0.0, 10.0);
        let mut tierlist = Tierlist::from_names_and_shared_categories(
            ["a", "b", "c", "d"],
            "R",
            vec![c.clone()],
        );
        tierlist.set_score("a", &c, 9.5).unwrap();
        tierlist.set_score("b", &c, 6.0).unwrap();
        tierlist.set_score("c", &c, 7.0).unwrap();
        // Below min: negative normalised score
        tierlist.set_score("d", &c, -2.0).unwrap();

        let thresholds = TierThresholds::new(vec![tier("top", 0.9), tier("mid", 0.5), tier("empty", 0.3)]);
        let buckets = tierlist.get_tiers(&thresholds).unwrap();
        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["top", "mid", "empty", UNRANKED_LABEL]);

        let mid: Vec<&str> = buckets[1].subjects.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(mid, vec!["c", "b"]);
        assert!(buckets[2].subjects.is_empty());
        assert_eq!(buckets[3].subjects[0].name, "d");
        assert_eq!(buckets[3].subjects[0].rank, 4);
    }
}
