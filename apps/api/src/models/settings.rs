use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::query::{search, JobFilters};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationFrequency {
    Instant,
    Daily,
    Weekly,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    System,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Density {
    Compact,
    Comfortable,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationTypes {
    pub new_matches: bool,
    pub application_updates: bool,
    pub reminders: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationSettings {
    pub email_enabled: bool,
    pub push_enabled: bool,
    pub frequency: NotificationFrequency,
    pub types: NotificationTypes,
}

/// Saved search re-run against the feed. Only evaluation lives here;
/// nothing schedules alerts yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobAlert {
    pub alert_id: String,
    pub name: String,
    pub filters: JobFilters,
    pub frequency: NotificationFrequency,
    pub enabled: bool,
}

impl JobAlert {
    /// Jobs the alert would notify about. Disabled alerts match nothing.
    pub fn run(&self, jobs: &[JobPosting]) -> Vec<JobPosting> {
        if !self.enabled {
            return Vec::new();
        }
        search(jobs, &self.filters)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceSettings {
    pub theme: Theme,
    pub density: Density,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrivacySettings {
    pub profile_visible: bool,
    pub share_analytics: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    pub notifications: NotificationSettings,
    pub job_alerts: Vec<JobAlert>,
    pub appearance: AppearanceSettings,
    pub privacy: PrivacySettings,
}

// ────────────────────────────────────────────────────────────────────────────
// Typed patches
// ────────────────────────────────────────────────────────────────────────────
//
// Every leaf is optional, so a toggle like `notifications.types.new_matches`
// is sent as `{"notifications": {"types": {"new_matches": false}}}`. Unknown
// keys are rejected while deserializing instead of being silently written.

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsPatch {
    pub notifications: Option<NotificationsPatch>,
    pub job_alerts: Option<Vec<JobAlert>>,
    pub appearance: Option<AppearancePatch>,
    pub privacy: Option<PrivacyPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotificationsPatch {
    pub email_enabled: Option<bool>,
    pub push_enabled: Option<bool>,
    pub frequency: Option<NotificationFrequency>,
    pub types: Option<NotificationTypesPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotificationTypesPatch {
    pub new_matches: Option<bool>,
    pub application_updates: Option<bool>,
    pub reminders: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppearancePatch {
    pub theme: Option<Theme>,
    pub density: Option<Density>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrivacyPatch {
    pub profile_visible: Option<bool>,
    pub share_analytics: Option<bool>,
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl UserSettings {
    pub fn find_alert(&self, alert_id: &str) -> Option<&JobAlert> {
        self.job_alerts.iter().find(|a| a.alert_id == alert_id)
    }

    pub fn apply(&mut self, patch: SettingsPatch) -> Result<(), AppError> {
        if let Some(alerts) = &patch.job_alerts {
            validate_alerts(alerts)?;
        }

        if let Some(n) = patch.notifications {
            set(&mut self.notifications.email_enabled, n.email_enabled);
            set(&mut self.notifications.push_enabled, n.push_enabled);
            set(&mut self.notifications.frequency, n.frequency);
            if let Some(t) = n.types {
                let types = &mut self.notifications.types;
                set(&mut types.new_matches, t.new_matches);
                set(&mut types.application_updates, t.application_updates);
                set(&mut types.reminders, t.reminders);
            }
        }
        set(&mut self.job_alerts, patch.job_alerts);
        if let Some(a) = patch.appearance {
            set(&mut self.appearance.theme, a.theme);
            set(&mut self.appearance.density, a.density);
        }
        if let Some(p) = patch.privacy {
            set(&mut self.privacy.profile_visible, p.profile_visible);
            set(&mut self.privacy.share_analytics, p.share_analytics);
        }
        Ok(())
    }
}

fn validate_alerts(alerts: &[JobAlert]) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for alert in alerts {
        if alert.name.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "job alert {} needs a name",
                alert.alert_id
            )));
        }
        if !seen.insert(alert.alert_id.as_str()) {
            return Err(AppError::Validation(format!(
                "duplicate job alert id {}",
                alert.alert_id
            )));
        }
    }
    Ok(())
}
