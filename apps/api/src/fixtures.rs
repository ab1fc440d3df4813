//! Seed data served by the mock repository.
//!
//! Fit scores, match reasons, and salaries are static values; nothing here is
//! computed.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::models::application::{
    Application, ApplicationNote, ApplicationStatus, TimelineEvent, TimelineEventKind,
};
use crate::models::job::{
    ExperienceRequirement, JobPosting, RemotePolicy, SalaryFrequency, SalaryRange,
};
use crate::models::profile::{JobPreferences, UserProfile};
use crate::models::settings::{
    AppearanceSettings, Density, JobAlert, NotificationFrequency, NotificationSettings,
    NotificationTypes, PrivacySettings, Theme, UserSettings,
};
use crate::query::JobFilters;

fn ts(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("invalid fixture timestamp '{raw}'"))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn annual_usd(min: f64, max: f64) -> SalaryRange {
    SalaryRange {
        min: Some(min),
        max: Some(max),
        currency: Some("USD".to_string()),
        frequency: Some(SalaryFrequency::Annual),
    }
}

fn at_least_years(min: u32) -> ExperienceRequirement {
    ExperienceRequirement {
        min_years: Some(min),
        max_years: None,
        raw_text: Some(format!("{min}+ years")),
    }
}

pub fn jobs() -> Result<Vec<JobPosting>> {
    Ok(vec![
        JobPosting {
            job_id: "1".to_string(),
            job_title: "Senior Full Stack Engineer (Remote)".to_string(),
            company_name: Some("TechFlow Systems".to_string()),
            location: "San Francisco, CA / Remote".to_string(),
            remote_policy: RemotePolicy::Remote,
            required_skills: strings(&[
                "TypeScript",
                "React",
                "Node.js",
                "AWS",
                "Next.js",
                "PostgreSQL",
            ]),
            preferred_skills: strings(&["GraphQL", "Vite", "Turborepo"]),
            salary_range: annual_usd(160_000.0, 210_000.0),
            fit_score: 95,
            years_of_experience: at_least_years(5),
            clearance_required: false,
            visa_sponsorship: Some(true),
            top_3_responsibilities: strings(&[
                "Lead technical design and implementation of new features",
                "Architect scalable backend services using AWS Lambda and DynamoDB",
                "Optimize frontend performance for data-intensive dashboards",
            ]),
            tech_stack_summary: "TypeScript, React, Node.js, AWS, Next.js".to_string(),
            analyzed_at: ts("2026-02-12T10:00:00Z")?,
            posted_at: ts("2026-02-12T09:00:00Z")?,
            apply_url: None,
            description: Some(
                "Lead core product development on a platform that automates complex \
                 developer workflows."
                    .to_string(),
            ),
            company_logo: None,
            match_reasons: strings(&[
                "TypeScript and React experience lines up with the core stack",
                "AWS serverless background matches the backend requirements",
                "Prior automation project work is a strong plus",
            ]),
            responsibilities: strings(&[
                "Lead technical design and implementation of new features",
                "Architect scalable backend services using AWS Lambda and DynamoDB",
                "Optimize frontend performance for data-intensive dashboards",
                "Mentor junior engineers and drive code quality standards",
            ]),
            benefits: strings(&[
                "Full remote work",
                "Health insurance",
                "401(k) matching",
                "Learning stipend",
            ]),
        },
        JobPosting {
            job_id: "2".to_string(),
            job_title: "Backend Infrastructure Architect".to_string(),
            company_name: Some("Nexus Cloud".to_string()),
            location: "Austin, TX".to_string(),
            remote_policy: RemotePolicy::Hybrid,
            required_skills: strings(&[
                "Terraform",
                "Kubernetes",
                "Go",
                "Python",
                "Docker",
                "Security",
            ]),
            preferred_skills: strings(&["Rust", "eBPF"]),
            salary_range: annual_usd(180_000.0, 240_000.0),
            fit_score: 88,
            years_of_experience: at_least_years(8),
            clearance_required: true,
            visa_sponsorship: Some(false),
            top_3_responsibilities: strings(&[
                "Design and maintain global K8s clusters",
                "Automate infrastructure provisioning with Terraform",
                "Implement advanced security monitoring",
            ]),
            tech_stack_summary: "K8s, Terraform, Go, Python, Security".to_string(),
            analyzed_at: ts("2026-02-12T14:00:00Z")?,
            posted_at: ts("2026-02-12T12:00:00Z")?,
            apply_url: None,
            description: Some(
                "Define the future of a globally distributed infrastructure platform."
                    .to_string(),
            ),
            company_logo: None,
            match_reasons: strings(&[
                "Extensive Terraform and infrastructure-as-code experience",
                "Track record building high-availability systems",
            ]),
            responsibilities: vec![],
            benefits: vec![],
        },
        JobPosting {
            job_id: "3".to_string(),
            job_title: "Lead UI/UX Developer".to_string(),
            company_name: Some("Vibrant Creators".to_string()),
            location: "New York, NY".to_string(),
            remote_policy: RemotePolicy::Onsite,
            required_skills: strings(&[
                "React",
                "CSS",
                "Framer Motion",
                "Figma",
                "Web Accessibility",
                "Tailwind",
            ]),
            preferred_skills: strings(&["D3.js", "Three.js"]),
            salary_range: annual_usd(140_000.0, 190_000.0),
            fit_score: 92,
            years_of_experience: at_least_years(6),
            clearance_required: false,
            visa_sponsorship: Some(true),
            top_3_responsibilities: strings(&[
                "Lead implementation of design system",
                "Develop high-fidelity prototypes",
                "Ensure accessibility standards",
            ]),
            tech_stack_summary: "React, Tailwind, Framer Motion, accessibility".to_string(),
            analyzed_at: ts("2026-02-13T09:00:00Z")?,
            posted_at: ts("2026-02-13T08:30:00Z")?,
            apply_url: None,
            description: None,
            company_logo: None,
            match_reasons: vec![],
            responsibilities: vec![],
            benefits: vec![],
        },
    ])
}

fn status_event(id: &str, description: &str, at: &str) -> Result<TimelineEvent> {
    Ok(TimelineEvent {
        event_id: id.to_string(),
        kind: TimelineEventKind::StatusChange,
        description: description.to_string(),
        timestamp: ts(at)?,
    })
}

pub fn applications() -> Result<Vec<Application>> {
    let jobs = jobs()?;
    let job = |idx: usize| {
        jobs.get(idx)
            .cloned()
            .with_context(|| format!("fixture job #{idx} missing"))
    };

    Ok(vec![
        Application {
            application_id: "app_1".to_string(),
            job: job(0)?,
            status: ApplicationStatus::Interview,
            applied_date: ts("2026-02-01T10:00:00Z")?,
            last_updated: ts("2026-02-13T09:00:00Z")?,
            notes: vec![
                ApplicationNote {
                    note_id: "n1".to_string(),
                    content: "First technical interview went well, mostly system design."
                        .to_string(),
                    created_at: ts("2026-02-08T15:00:00Z")?,
                },
                ApplicationNote {
                    note_id: "n2".to_string(),
                    content: "Review DynamoDB GSI patterns before the final round.".to_string(),
                    created_at: ts("2026-02-13T09:00:00Z")?,
                },
            ],
            timeline: vec![
                status_event("e1", "Application Submitted", "2026-02-01T10:00:00Z")?,
                status_event("e2", "Moved to Screening", "2026-02-03T11:20:00Z")?,
                status_event("e3", "Interview Scheduled", "2026-02-07T14:45:00Z")?,
            ],
            resume_version: Some("Standard_FullStack_2026.pdf".to_string()),
            cover_letter: None,
        },
        Application {
            application_id: "app_2".to_string(),
            job: job(1)?,
            status: ApplicationStatus::Applied,
            applied_date: ts("2026-02-11T16:00:00Z")?,
            last_updated: ts("2026-02-11T16:00:00Z")?,
            notes: vec![],
            timeline: vec![status_event(
                "e4",
                "Application Submitted",
                "2026-02-11T16:00:00Z",
            )?],
            resume_version: None,
            cover_letter: None,
        },
    ])
}

pub fn profile() -> UserProfile {
    UserProfile {
        user_id: "user_1".to_string(),
        name: "Jordan Avery".to_string(),
        email: Some("jordan.avery@example.com".to_string()),
        phone: Some("+1 (555) 012-3456".to_string()),
        skills: strings(&[
            "TypeScript",
            "React",
            "Next.js",
            "Node.js",
            "AWS",
            "Terraform",
            "Python",
        ]),
        years_experience: 5,
        target_titles: strings(&[
            "Senior Full Stack Engineer",
            "Cloud Architect",
            "DevSecOps Specialist",
        ]),
        preferences: JobPreferences {
            remote: true,
            locations: strings(&["San Francisco", "Austin", "Remote"]),
            min_salary: 150_000.0,
        },
    }
}

pub fn default_settings() -> UserSettings {
    UserSettings {
        notifications: NotificationSettings {
            email_enabled: true,
            push_enabled: false,
            frequency: NotificationFrequency::Daily,
            types: NotificationTypes {
                new_matches: true,
                application_updates: true,
                reminders: true,
            },
        },
        job_alerts: vec![JobAlert {
            alert_id: "alert_1".to_string(),
            name: "Full Stack Remote".to_string(),
            filters: JobFilters {
                search: Some("Full Stack".to_string()),
                remote_policy: Some(vec![RemotePolicy::Remote]),
                ..Default::default()
            },
            frequency: NotificationFrequency::Instant,
            enabled: true,
        }],
        appearance: AppearanceSettings {
            theme: Theme::Dark,
            density: Density::Comfortable,
        },
        privacy: PrivacySettings {
            profile_visible: true,
            share_analytics: true,
        },
    }
}
