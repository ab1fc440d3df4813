//! Job feed query engine.
//!
//! `search` is a pure, stable filter over an in-memory job collection: AND
//! across filter dimensions, OR within a multi-valued dimension. It never
//! reorders, duplicates, or fabricates postings and returns an empty list
//! (not an error) when nothing matches.

pub mod feed;

use serde::{Deserialize, Serialize};

use crate::models::job::{JobPosting, RemotePolicy};

/// Feed filter state. A `None` (or empty list) dimension imposes no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct JobFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_policy: Option<Vec<RemotePolicy>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,
}

impl JobFilters {
    /// Number of dimensions currently constraining the result.
    pub fn active_count(&self) -> usize {
        let compiled = Criteria::compile(self);
        [
            compiled.search.is_some(),
            compiled.remote_policy.is_some(),
            compiled.skills.is_some(),
            self.salary_min.is_some(),
            self.salary_max.is_some(),
            self.experience_min.is_some(),
            self.experience_max.is_some(),
            compiled.locations.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

/// Returns the postings in `jobs` that satisfy every active filter, in their
/// original order.
pub fn search(jobs: &[JobPosting], filters: &JobFilters) -> Vec<JobPosting> {
    let criteria = Criteria::compile(filters);
    let matched: Vec<JobPosting> = jobs
        .iter()
        .filter(|job| criteria.matches(job))
        .cloned()
        .collect();
    tracing::debug!(
        total = jobs.len(),
        matched = matched.len(),
        "job search evaluated"
    );
    matched
}

/// Strips angle brackets, trims, and lowercases free text before matching.
pub fn normalize_search(raw: &str) -> String {
    raw.replace(['<', '>'], "").trim().to_lowercase()
}

// ────────────────────────────────────────────────────────────────────────────
// Compiled criteria
// ────────────────────────────────────────────────────────────────────────────

/// Filters normalized once per query so matching stays allocation-free per job.
struct Criteria<'f> {
    search: Option<String>,
    remote_policy: Option<&'f [RemotePolicy]>,
    skills: Option<Vec<String>>,
    salary_min: Option<f64>,
    salary_max: Option<f64>,
    experience_min: Option<f64>,
    experience_max: Option<f64>,
    locations: Option<Vec<String>>,
}

impl<'f> Criteria<'f> {
    fn compile(filters: &'f JobFilters) -> Self {
        Self {
            search: filters
                .search
                .as_deref()
                .map(normalize_search)
                .filter(|s| !s.is_empty()),
            remote_policy: filters
                .remote_policy
                .as_deref()
                .filter(|set| !set.is_empty()),
            skills: lowered_terms(filters.skills.as_deref()),
            salary_min: filters.salary_min,
            salary_max: filters.salary_max,
            experience_min: filters.experience_min,
            experience_max: filters.experience_max,
            locations: lowered_terms(filters.locations.as_deref()),
        }
    }

    fn matches(&self, job: &JobPosting) -> bool {
        self.matches_search(job)
            && self.matches_remote_policy(job)
            && self.matches_salary(job)
            && self.matches_skills(job)
            && self.matches_experience(job)
            && self.matches_location(job)
    }

    fn matches_search(&self, job: &JobPosting) -> bool {
        let Some(needle) = &self.search else {
            return true;
        };
        job.job_title.to_lowercase().contains(needle.as_str())
            || job
                .company_name
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(needle.as_str()))
            || job
                .required_skills
                .iter()
                .any(|s| s.to_lowercase().contains(needle.as_str()))
    }

    fn matches_remote_policy(&self, job: &JobPosting) -> bool {
        self.remote_policy
            .map_or(true, |set| set.contains(&job.remote_policy))
    }

    // A job without a published bound cannot satisfy an active salary filter.
    fn matches_salary(&self, job: &JobPosting) -> bool {
        let range = &job.salary_range;
        let min_ok = self
            .salary_min
            .map_or(true, |floor| range.min.is_some_and(|min| min >= floor));
        let max_ok = self
            .salary_max
            .map_or(true, |ceiling| range.max.is_some_and(|max| max <= ceiling));
        min_ok && max_ok
    }

    fn matches_skills(&self, job: &JobPosting) -> bool {
        let Some(wanted) = &self.skills else {
            return true;
        };
        job.required_skills.iter().any(|required| {
            let required = required.to_lowercase();
            wanted.iter().any(|w| required.contains(w.as_str()))
        })
    }

    // Unstated experience bounds never exclude a job.
    fn matches_experience(&self, job: &JobPosting) -> bool {
        let exp = &job.years_of_experience;
        let upper_ok = self.experience_max.map_or(true, |bound| {
            exp.min_years.map_or(true, |min| f64::from(min) <= bound)
        });
        let lower_ok = self.experience_min.map_or(true, |bound| {
            exp.max_years.map_or(true, |max| f64::from(max) >= bound)
        });
        upper_ok && lower_ok
    }

    fn matches_location(&self, job: &JobPosting) -> bool {
        let Some(wanted) = &self.locations else {
            return true;
        };
        let location = job.location.to_lowercase();
        wanted.iter().any(|w| location.contains(w.as_str()))
    }
}

fn lowered_terms(terms: Option<&[String]>) -> Option<Vec<String>> {
    let lowered: Vec<String> = terms?
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();
    (!lowered.is_empty()).then_some(lowered)
}
