use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::job::JobPosting;

/// Lifecycle of a tracked application.
///
/// Nominal flow is `saved → applied → screening → interview → offer →
/// {accepted, rejected}`, with `withdrawn` reachable from any non-terminal
/// state. Reassignment is not restricted: any status may follow any other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Saved,
    Applied,
    Screening,
    Interview,
    Offer,
    Accepted,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    #[cfg(test)]
    pub const ALL: [ApplicationStatus; 8] = [
        ApplicationStatus::Saved,
        ApplicationStatus::Applied,
        ApplicationStatus::Screening,
        ApplicationStatus::Interview,
        ApplicationStatus::Offer,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
        ApplicationStatus::Withdrawn,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Saved => "Saved",
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Screening => "Screening",
            ApplicationStatus::Interview => "Interview",
            ApplicationStatus::Offer => "Offer",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Withdrawn => "Withdrawn",
        }
    }

    /// Informational only; the tracker does not gate transitions on it.
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            ApplicationStatus::Accepted | ApplicationStatus::Rejected | ApplicationStatus::Withdrawn
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationNote {
    pub note_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimelineEventKind {
    StatusChange,
    NoteAdded,
    InterviewScheduled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineEvent {
    pub event_id: String,
    #[serde(rename = "type")]
    pub kind: TimelineEventKind,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// A job the user is tracking. The posting is embedded by value so the record
/// stays readable even if the feed later drops the job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Application {
    pub application_id: String,
    pub job: JobPosting,
    pub status: ApplicationStatus,
    pub applied_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub notes: Vec<ApplicationNote>,    // oldest first
    pub timeline: Vec<TimelineEvent>,   // append-only, oldest first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
}
