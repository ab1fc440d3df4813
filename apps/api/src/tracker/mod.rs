//! Application tracking: status changes and notes over an owned collection.

pub mod stats;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{Application, ApplicationNote, ApplicationStatus};

pub use stats::ApplicationStats;

/// Owns the user's applications and keeps status, timestamps, and notes
/// consistent.
///
/// A status change does not write a timeline event; the timeline only holds
/// events seeded with the application. Notes are appended oldest first.
#[derive(Debug, Clone, Default)]
pub struct ApplicationTracker {
    applications: Vec<Application>,
}

impl ApplicationTracker {
    pub fn new(applications: Vec<Application>) -> Self {
        Self { applications }
    }

    pub fn list_applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn get(&self, application_id: &str) -> Result<&Application, AppError> {
        self.applications
            .iter()
            .find(|a| a.application_id == application_id)
            .ok_or_else(|| not_found(application_id))
    }

    pub fn stats(&self) -> ApplicationStats {
        ApplicationStats::from_applications(&self.applications)
    }

    pub fn change_status(
        &mut self,
        application_id: &str,
        status: ApplicationStatus,
    ) -> Result<Application, AppError> {
        self.change_status_at(application_id, status, Utc::now())
    }

    /// `last_updated` never moves backwards and never precedes `applied_date`,
    /// even if `now` does.
    pub fn change_status_at(
        &mut self,
        application_id: &str,
        status: ApplicationStatus,
        now: DateTime<Utc>,
    ) -> Result<Application, AppError> {
        let app = self.get_mut(application_id)?;
        let previous = app.status;
        app.status = status;
        app.last_updated = now.max(app.last_updated).max(app.applied_date);

        tracing::info!(
            application_id,
            from = previous.label(),
            to = status.label(),
            terminal = status.is_terminal(),
            "application status changed"
        );
        Ok(app.clone())
    }

    pub fn add_note(
        &mut self,
        application_id: &str,
        content: &str,
    ) -> Result<Application, AppError> {
        self.add_note_at(application_id, content, Utc::now())
    }

    /// `created_at` is clamped to the previous note's timestamp when `now`
    /// runs behind it.
    pub fn add_note_at(
        &mut self,
        application_id: &str,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<Application, AppError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::Validation(
                "note content cannot be empty".to_string(),
            ));
        }

        let app = self.get_mut(application_id)?;
        // Newest note never sorts before the one it follows.
        let created_at = app
            .notes
            .last()
            .map_or(now, |last| now.max(last.created_at));
        let note = ApplicationNote {
            note_id: format!("note_{}", Uuid::new_v4().simple()),
            content: content.to_string(),
            created_at,
        };
        tracing::info!(application_id, note_id = %note.note_id, "note added");
        app.notes.push(note);
        Ok(app.clone())
    }

    fn get_mut(&mut self, application_id: &str) -> Result<&mut Application, AppError> {
        self.applications
            .iter_mut()
            .find(|a| a.application_id == application_id)
            .ok_or_else(|| not_found(application_id))
    }
}

fn not_found(application_id: &str) -> AppError {
    AppError::NotFound(format!("Application {application_id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use chrono::Duration;

    fn tracker() -> ApplicationTracker {
        ApplicationTracker::new(fixtures::applications().unwrap())
    }

    #[test]
    fn test_change_status_updates_status_and_timestamp() {
        let mut t = tracker();
        let before = t.get("app_2").unwrap().last_updated;
        let interviews_before = t.stats().interviews;

        let updated = t
            .change_status("app_2", ApplicationStatus::Interview)
            .unwrap();

        assert_eq!(updated.status, ApplicationStatus::Interview);
        assert!(updated.last_updated >= before);
        assert_eq!(t.stats().interviews, interviews_before + 1);
        assert_eq!(t.get("app_2").unwrap(), &updated);
    }

    #[test]
    fn test_change_status_does_not_touch_timeline() {
        let mut t = tracker();
        let timeline = t.get("app_1").unwrap().timeline.clone();
        t.change_status("app_1", ApplicationStatus::Offer).unwrap();
        assert_eq!(t.get("app_1").unwrap().timeline, timeline);
    }

    #[test]
    fn test_last_updated_never_moves_backwards() {
        let mut t = tracker();
        let current = t.get("app_1").unwrap().last_updated;
        let skewed = current - Duration::days(30);

        let updated = t
            .change_status_at("app_1", ApplicationStatus::Rejected, skewed)
            .unwrap();
        assert_eq!(updated.last_updated, current);
        assert!(updated.last_updated >= updated.applied_date);
    }

    #[test]
    fn test_any_status_reachable_from_any_other() {
        let mut t = tracker();
        for from in ApplicationStatus::ALL {
            for to in ApplicationStatus::ALL {
                t.change_status("app_1", from).unwrap();
                let updated = t.change_status("app_1", to).unwrap();
                assert_eq!(updated.status, to);
            }
        }
    }

    #[test]
    fn test_change_status_unknown_id() {
        let mut t = tracker();
        let err = t
            .change_status("app_missing", ApplicationStatus::Offer)
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(t.list_applications(), tracker().list_applications());
    }

    #[test]
    fn test_add_note_to_empty_application() {
        let mut t = tracker();
        assert!(t.get("app_2").unwrap().notes.is_empty());

        let updated = t.add_note("app_2", "Great call today").unwrap();
        assert_eq!(updated.notes.len(), 1);
        assert_eq!(updated.notes[0].content, "Great call today");
    }

    #[test]
    fn test_notes_append_in_chronological_order() {
        let mut t = tracker();
        let now = Utc::now();
        t.add_note_at("app_1", "first", now).unwrap();
        let updated = t
            .add_note_at("app_1", "second", now + Duration::seconds(1))
            .unwrap();

        let tail: Vec<&str> = updated
            .notes
            .iter()
            .rev()
            .take(2)
            .map(|n| n.content.as_str())
            .collect();
        assert_eq!(tail, vec!["second", "first"]);
        assert!(updated
            .notes
            .windows(2)
            .all(|w| w[0].created_at <= w[1].created_at));
        assert_ne!(updated.notes[2].note_id, updated.notes[3].note_id);
    }

    #[test]
    fn test_note_timestamp_never_precedes_previous_note() {
        let mut t = tracker();
        let last = t.get("app_1").unwrap().notes.last().unwrap().created_at;

        let updated = t
            .add_note_at("app_1", "written on a skewed clock", last - Duration::days(1))
            .unwrap();

        let newest = updated.notes.last().unwrap();
        assert_eq!(newest.content, "written on a skewed clock");
        assert_eq!(newest.created_at, last);
        assert!(updated
            .notes
            .windows(2)
            .all(|w| w[0].created_at <= w[1].created_at));
    }

    #[test]
    fn test_empty_note_rejected_and_notes_unchanged() {
        let mut t = tracker();
        let notes = t.get("app_1").unwrap().notes.clone();
        for content in ["", "   ", "\n\t"] {
            let err = t.add_note("app_1", content).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
        assert_eq!(t.get("app_1").unwrap().notes, notes);
    }

    #[test]
    fn test_empty_note_on_unknown_id_is_validation_error() {
        let mut t = tracker();
        let err = t.add_note("app_missing", " ").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        let err = t.add_note("app_missing", "hello").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_list_is_order_stable() {
        let mut t = tracker();
        t.change_status("app_2", ApplicationStatus::Screening).unwrap();
        let ids: Vec<&str> = t
            .list_applications()
            .iter()
            .map(|a| a.application_id.as_str())
            .collect();
        assert_eq!(ids, vec!["app_1", "app_2"]);
    }
}
