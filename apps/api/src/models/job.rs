use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Work-location arrangement advertised by a posting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RemotePolicy {
    Remote,
    Hybrid,
    Onsite,
    Unknown,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SalaryFrequency {
    Annual,
    Hourly,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SalaryRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub currency: Option<String>,
    pub frequency: Option<SalaryFrequency>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExperienceRequirement {
    pub min_years: Option<u32>,
    pub max_years: Option<u32>,
    pub raw_text: Option<String>,
}

/// An analyzed job posting. Fixture data: never mutated after seeding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobPosting {
    pub job_id: String,
    pub job_title: String,
    pub company_name: Option<String>,
    pub location: String,
    pub remote_policy: RemotePolicy,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    pub salary_range: SalaryRange,
    pub fit_score: u8, // 0 – 100
    pub years_of_experience: ExperienceRequirement,
    pub clearance_required: bool,
    pub visa_sponsorship: Option<bool>,
    #[serde(default)]
    pub top_3_responsibilities: Vec<String>,
    #[serde(default)]
    pub tech_stack_summary: String,
    pub analyzed_at: DateTime<Utc>,
    pub posted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub match_reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responsibilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub benefits: Vec<String>,
}
