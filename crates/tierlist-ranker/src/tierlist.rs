//! Tierlist composition and ranking.

use serde::Serialize;
use tracing::{debug, warn};

use crate::category::Category;
use crate::rubric::Rubric;
use crate::subject::Subject;
use tierlist_common::{Result, TierlistError};

/// Subjects evaluated over a shared category list and ranked with one rubric.
#[derive(Debug, Clone, Serialize)]
pub struct Tierlist {
    subjects: Vec<Subject>,
    categories: Vec<Category>,
    rubric: Rubric,
}

/// One row of a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSubject {
    /// 1-based position; tied scores still get consecutive ranks.
    pub rank: usize,
    pub name: String,
    pub overall_score: f64,
}

impl Tierlist {
    /// Compose already-built subjects and rubric.
    ///
    /// Subjects are taken as given; with duplicate names, lookups by name
    /// only reach the first of them.
    pub fn from_subjects_and_rubric(
        subjects: Vec<Subject>,
        rubric: Rubric,
        categories: Vec<Category>,
    ) -> Self {
        debug!(
            subjects = subjects.len(),
            categories = categories.len(),
            rubric = rubric.name(),
            "Tierlist composed"
        );
        Self {
            subjects,
            categories,
            rubric,
        }
    }

    /// Build one unscored subject per distinct name and a uniform rubric,
    /// all over the shared `categories`. Repeated names are skipped.
    pub fn from_names_and_shared_categories<I, S>(
        subject_names: I,
        rubric_name: impl Into<String>,
        categories: Vec<Category>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut subjects: Vec<Subject> = Vec::new();
        for name in subject_names {
            let name = name.into();
            if subjects.iter().any(|s| s.name() == name) {
                debug!(subject = %name, "Skipping duplicate subject name");
                continue;
            }
            subjects.push(Subject::new(name, &categories));
        }
        let rubric = Rubric::uniform(rubric_name, &categories);
        Self::from_subjects_and_rubric(subjects, rubric, categories)
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    pub fn rubric_mut(&mut self) -> &mut Rubric {
        &mut self.rubric
    }

    /// First category with the given name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    pub fn subject(&self, name: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.name() == name)
    }

    pub fn subject_mut(&mut self, name: &str) -> Result<&mut Subject> {
        self.subjects
            .iter_mut()
            .find(|s| s.name() == name)
            .ok_or_else(|| TierlistError::UnknownSubject(name.to_string()))
    }

    /// Record a raw value for the named subject.
    pub fn set_score(&mut self, subject: &str, category: &Category, value: f64) -> Result<()> {
        self.subject_mut(subject)?.set_score(category, value)
    }

    /// Subjects sorted by overall score, highest first.
    ///
    /// Equal scores keep their insertion order. Scores are recomputed on
    /// every call; the first subject that cannot be scored fails the whole
    /// ranking.
    pub fn get_ordered_list(&self) -> Result<Vec<&Subject>> {
        Ok(self.scored()?.into_iter().map(|(subject, _)| subject).collect())
    }

    /// Like [`Tierlist::get_ordered_list`], with ranks and scores attached.
    pub fn get_ranked_list(&self) -> Result<Vec<RankedSubject>> {
        Ok(self
            .scored()?
            .into_iter()
            .enumerate()
            .map(|(i, (subject, overall_score))| RankedSubject {
                rank: i + 1,
                name: subject.name().to_string(),
                overall_score,
            })
            .collect())
    }

    fn scored(&self) -> Result<Vec<(&Subject, f64)>> {
        let mut scored = Vec::with_capacity(self.subjects.len());
        for subject in &self.subjects {
            match subject.get_overall_score(&self.rubric) {
                Ok(score) => scored.push((subject, score)),
                Err(e) => {
                    warn!(subject = subject.name(), error = %e, "Cannot rank subject");
                    return Err(e);
                }
            }
        }

        // Stable sort, descending
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored_tierlist(values: &[(&str, f64)]) -> (Tierlist, Category) {
        let c = Category::new("C", 0.0, 1.0);
        let mut tierlist = Tierlist::from_names_and_shared_categories(
            values.iter().map(|(n, _)| *n),
            "R",
            vec![c.clone()],
        );
        for (name, value) in values {
            tierlist.set_score(name, &c, *value).unwrap();
        }
        (tierlist, c)
    }

    #[test]
    fn test_names_constructor_builds_uniform_rubric() {
        let a = Category::new("A", 0.0, 1.0);
        let b = Category::new("B", 0.0, 1.0);
        let tierlist = Tierlist::from_names_and_shared_categories(["X", "Y"], "R", vec![a.clone(), b]);
        assert_eq!(tierlist.subjects().len(), 2);
        assert_eq!(tierlist.rubric().name(), "R");
        assert_eq!(tierlist.rubric().total_mass(), 2.0);
        assert_eq!(tierlist.category("A"), Some(&a));
        assert!(!tierlist.subject("X").unwrap().is_complete());
    }

    #[test]
    fn test_ordered_descending() {
        let (tierlist, _) = scored_tierlist(&[("low", 0.1), ("high", 0.9), ("mid", 0.5)]);
        let names: Vec<&str> = tierlist
            .get_ordered_list()
            .unwrap()
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let (tierlist, _) = scored_tierlist(&[("first", 0.5), ("top", 0.8), ("second", 0.5)]);
        let ranked = tierlist.get_ranked_list().unwrap();
        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["top", "first", "second"]);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn test_unscored_subjects_fail_ranking() {
        let c = Category::new("C", 0.0, 1.0);
        let tierlist = Tierlist::from_names_and_shared_categories(["A", "B"], "R", vec![c]);
        assert!(matches!(
            tierlist.get_ordered_list(),
            Err(TierlistError::IncompleteEvaluation { .. })
        ));
        for subject in tierlist.subjects() {
            assert!(matches!(
                subject.get_overall_score(tierlist.rubric()),
                Err(TierlistError::IncompleteEvaluation { .. })
            ));
        }
    }

    #[test]
    fn test_nan_value_rejected_and_order_kept() {
        let (mut tierlist, c) = scored_tierlist(&[("low", 0.1), ("mid", 0.5), ("high", 0.9)]);
        assert!(matches!(
            tierlist.set_score("mid", &c, f64::NAN),
            Err(TierlistError::NonFiniteScore { .. })
        ));
        // The rejected value leaves the previous score in place
        assert_eq!(tierlist.subject("mid").unwrap().score(&c), Some(0.5));

        let names: Vec<&str> = tierlist
            .get_ordered_list()
            .unwrap()
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_duplicate_names_collapse() {
        let c = Category::new("C", 0.0, 1.0);
        let mut tierlist =
            Tierlist::from_names_and_shared_categories(["A", "B", "A"], "R", vec![c.clone()]);
        assert_eq!(tierlist.subjects().len(), 2);
        tierlist.set_score("A", &c, 0.4).unwrap();
        tierlist.set_score("B", &c, 0.6).unwrap();
        assert_eq!(tierlist.get_ranked_list().unwrap().len(), 2);
    }

    #[test]
    fn test_unknown_subject() {
        let (mut tierlist, c) = scored_tierlist(&[("A", 0.5)]);
        assert!(matches!(
            tierlist.set_score("Z", &c, 1.0),
            Err(TierlistError::UnknownSubject(name)) if name == "Z"
        ));
    }

    #[test]
    fn test_ranking_is_repeatable() {
        let (tierlist, _) = scored_tierlist(&[("A", 0.2), ("B", 0.7)]);
        assert_eq!(tierlist.get_ranked_list().unwrap(), tierlist.get_ranked_list().unwrap());
    }

    #[test]
    fn test_rubric_change_reorders() {
        let a = Category::new("A", 0.0, 1.0);
        let b = Category::new("B", 0.0, 1.0);
        let mut tierlist =
            Tierlist::from_names_and_shared_categories(["X", "Y"], "R", vec![a.clone(), b.clone()]);
        tierlist.set_score("X", &a, 1.0).unwrap();
        tierlist.set_score("X", &b, 0.0).unwrap();
        tierlist.set_score("Y", &a, 0.0).unwrap();
        tierlist.set_score("Y", &b, 0.8).unwrap();
        assert_eq!(tierlist.get_ordered_list().unwrap()[0].name(), "X");

        tierlist.rubric_mut().set_weight(&b, 4.0).unwrap();
        assert_eq!(tierlist.get_ordered_list().unwrap()[0].name(), "Y");
    }
}
