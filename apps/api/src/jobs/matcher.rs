//! Ranks catalog jobs by overlap with a candidate's skills.
//!
//! Algorithm:
//! 1. Lowercase the candidate skills into a set.
//! 2. For each job with a non-empty `required_skills`, split on commas, trim,
//!    lowercase, and intersect with the candidate set.
//! 3. Jobs with a non-empty intersection become a `MatchResult` scored by the
//!    intersection size, with a salary estimate from `min_experience`
//!    (1.0 years when absent or zero).
//! 4. Stable sort by score, highest first.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::models::job::JobRow;
use crate::salary::SalaryEstimator;

const DEFAULT_EXPERIENCE_YEARS: f64 = 1.0;

#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub title: Option<String>,
    #[serde(rename = "company")]
    pub company_label: Option<String>,
    pub location: Option<String>,
    pub match_score: usize,
    /// Lowercased, in the job's required-skill order.
    pub common_skills: Vec<String>,
    pub ai_salary: String,
}

pub struct JobMatcher {
    salary: Arc<SalaryEstimator>,
}

impl JobMatcher {
    pub fn new(salary: Arc<SalaryEstimator>) -> Self {
        Self { salary }
    }

    pub fn match_jobs(&self, candidate_skills: &[String], jobs: &[JobRow]) -> Vec<MatchResult> {
        let candidate: HashSet<String> = candidate_skills.iter().map(|s| s.to_lowercase()).collect();

        let mut matches: Vec<MatchResult> = jobs
            .iter()
            .filter_map(|job| self.score_job(&candidate, job))
            .collect();

        // sort_by is stable: equal scores keep catalog order.
        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        matches
    }

    fn score_job(&self, candidate: &HashSet<String>, job: &JobRow) -> Option<MatchResult> {
        let required = job.required_skills.as_deref().filter(|s| !s.is_empty())?;

        let mut common_skills: Vec<String> = Vec::new();
        for skill in required.split(',').map(|s| s.trim().to_lowercase()) {
            if candidate.contains(&skill) && !common_skills.contains(&skill) {
                common_skills.push(skill);
            }
        }
        if common_skills.is_empty() {
            return None;
        }

        let years = job
            .min_experience
            .filter(|y| *y != 0.0)
            .unwrap_or(DEFAULT_EXPERIENCE_YEARS);

        debug!(
            "Job {} matched {} skills: {:?}",
            job.id,
            common_skills.len(),
            common_skills
        );

        Some(MatchResult {
            title: job.title.clone(),
            company_label: job.salary_range.clone(),
            location: job.location.clone(),
            match_score: common_skills.len(),
            common_skills,
            ai_salary: self.salary.predict_salary(years),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: i32, title: &str, required: Option<&str>, min_experience: Option<f64>) -> JobRow {
        JobRow {
            id,
            title: Some(title.to_string()),
            location: Some("Remote".to_string()),
            salary_range: Some(format!("Company {id}")),
            required_skills: required.map(str::to_string),
            min_experience,
        }
    }

    fn matcher() -> JobMatcher {
        JobMatcher::new(Arc::new(SalaryEstimator::reference()))
    }

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ranks_by_overlap_with_salary_attached() {
        let jobs = vec![
            job(1, "Python Developer", Some("Python,FastAPI,SQL,Git"), None),
            job(2, "Java Backend Dev", Some("Java,SQL"), Some(3.0)),
        ];

        let results = matcher().match_jobs(&skills(&["python", "sql"]), &jobs);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title.as_deref(), Some("Python Developer"));
        assert_eq!(results[0].match_score, 2);
        assert_eq!(results[0].common_skills, vec!["python", "sql"]);
        assert_eq!(results[0].ai_salary, "₹5.0 - 7.5 LPA");
        assert_eq!(results[1].match_score, 1);
        assert_eq!(results[1].common_skills, vec!["sql"]);
        assert_eq!(results[1].ai_salary, "₹10.4 - 12.9 LPA");
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let jobs = vec![
            job(1, "A", Some("Git"), None),
            job(2, "B", Some("Python,SQL"), None),
            job(3, "C", Some("git, CSS"), None),
            job(4, "D", Some("GIT"), None),
        ];

        let results = matcher().match_jobs(&skills(&["Git", "Python", "SQL"]), &jobs);
        let titles: Vec<_> = results.iter().filter_map(|r| r.title.as_deref()).collect();
        assert_eq!(titles, vec!["B", "A", "C", "D"]);
    }

    #[test]
    fn test_empty_required_skills_never_matched() {
        let jobs = vec![
            job(1, "Empty", Some(""), None),
            job(2, "Missing", None, None),
        ];
        let results = matcher().match_jobs(&skills(&["python", "sql", ""]), &jobs);
        assert!(results.is_empty());
    }

    #[test]
    fn test_no_overlap_yields_empty() {
        let jobs = vec![job(1, "Frontend", Some("React,JavaScript,CSS,HTML"), None)];
        assert!(matcher().match_jobs(&skills(&["rust"]), &jobs).is_empty());
        assert!(matcher().match_jobs(&[], &jobs).is_empty());
    }

    #[test]
    fn test_duplicate_skills_counted_once() {
        let jobs = vec![job(1, "Dup", Some("SQL, sql ,SQL"), None)];
        let results = matcher().match_jobs(&skills(&["SQL", "sql"]), &jobs);
        assert_eq!(results[0].match_score, 1);
        assert_eq!(results[0].common_skills, vec!["sql"]);
    }

    #[test]
    fn test_zero_min_experience_uses_default() {
        let jobs = vec![job(1, "Zero", Some("Git"), Some(0.0))];
        let results = matcher().match_jobs(&skills(&["git"]), &jobs);
        assert_eq!(results[0].ai_salary, "₹5.0 - 7.5 LPA");
    }

    #[test]
    fn test_company_label_serialized_as_company() {
        let jobs = vec![job(7, "Python Developer", Some("Python"), None)];
        let results = matcher().match_jobs(&skills(&["python"]), &jobs);
        let value = serde_json::to_value(&results[0]).unwrap();
        assert_eq!(value["company"], "Company 7");
        assert_eq!(value["match_score"], 1);
        assert!(value.get("company_label").is_none());
    }
}
