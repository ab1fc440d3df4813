//! Data access seam.
//!
//! Handlers and the feed only talk to `DashboardRepository`; `MockRepository`
//! serves fixtures today and a real backend can replace it without touching
//! the query engine or the tracker.
//!
//! `AppState` holds an `Arc<dyn DashboardRepository>`.

pub mod mock;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::application::{Application, ApplicationStatus};
use crate::models::job::JobPosting;
use crate::models::profile::{ProfilePatch, UserProfile};
use crate::models::settings::{SettingsPatch, UserSettings};
use crate::query::JobFilters;
use crate::tracker::ApplicationTracker;

pub use mock::{LatencyProfile, MockRepository};

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn get_jobs(&self) -> Result<Vec<JobPosting>, AppError>;

    async fn search_jobs(&self, filters: &JobFilters) -> Result<Vec<JobPosting>, AppError>;

    async fn get_user_profile(&self) -> Result<UserProfile, AppError>;

    async fn update_user_profile(&self, patch: ProfilePatch) -> Result<UserProfile, AppError>;

    async fn get_applications(&self) -> Result<Vec<Application>, AppError>;

    async fn update_application_status(
        &self,
        application_id: &str,
        status: ApplicationStatus,
    ) -> Result<Application, AppError>;

    async fn add_application_note(
        &self,
        application_id: &str,
        content: &str,
    ) -> Result<Application, AppError>;

    async fn get_user_settings(&self) -> Result<UserSettings, AppError>;

    async fn update_user_settings(&self, patch: SettingsPatch) -> Result<UserSettings, AppError>;
}

/// Everything one user's dashboard reads and writes. Owned by a repository
/// instance rather than living in globals, so sessions stay isolated.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub jobs: Vec<JobPosting>,
    pub tracker: ApplicationTracker,
    pub profile: UserProfile,
    pub settings: UserSettings,
}

impl SessionContext {
    /// Context seeded with the bundled demo data.
    pub fn seeded() -> anyhow::Result<Self> {
        Ok(Self {
            jobs: crate::fixtures::jobs()?,
            tracker: ApplicationTracker::new(crate::fixtures::applications()?),
            profile: crate::fixtures::profile(),
            settings: crate::fixtures::default_settings(),
        })
    }
}
