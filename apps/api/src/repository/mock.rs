use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::errors::AppError;
use crate::models::application::{Application, ApplicationStatus};
use crate::models::job::JobPosting;
use crate::models::profile::{ProfilePatch, UserProfile};
use crate::models::settings::{SettingsPatch, UserSettings};
use crate::query::{search, JobFilters};
use crate::repository::{DashboardRepository, SessionContext};

/// Artificial response delay per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub jobs: Duration,
    pub applications: Duration,
    pub application_write: Duration,
    pub profile_read: Duration,
    pub profile_write: Duration,
    pub settings: Duration,
}

impl LatencyProfile {
    /// Delays the dashboard was designed against.
    pub const fn standard() -> Self {
        Self {
            jobs: Duration::from_millis(800),
            applications: Duration::from_millis(800),
            application_write: Duration::from_millis(500),
            profile_read: Duration::from_millis(500),
            profile_write: Duration::from_millis(1000),
            settings: Duration::from_millis(500),
        }
    }

    pub const fn uniform(delay: Duration) -> Self {
        Self {
            jobs: delay,
            applications: delay,
            application_write: delay,
            profile_read: delay,
            profile_write: delay,
            settings: delay,
        }
    }

    pub const fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::standard()
    }
}

/// In-memory repository over a single `SessionContext`.
///
/// Every call sleeps for its configured delay before touching state. The
/// `offline` switch makes every call fail with `AppError::Unavailable`.
pub struct MockRepository {
    session: RwLock<SessionContext>,
    latency: LatencyProfile,
    offline: AtomicBool,
}

impl MockRepository {
    pub fn new(session: SessionContext, latency: LatencyProfile) -> Self {
        Self {
            session: RwLock::new(session),
            latency,
            offline: AtomicBool::new(false),
        }
    }

    #[cfg(test)]
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::Release);
    }

    async fn simulate(&self, delay: Duration) -> Result<(), AppError> {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if self.offline.load(Ordering::Acquire) {
            return Err(AppError::Unavailable(
                "mock repository is offline".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl DashboardRepository for MockRepository {
    async fn get_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        self.simulate(self.latency.jobs).await?;
        Ok(self.session.read().await.jobs.clone())
    }

    async fn search_jobs(&self, filters: &JobFilters) -> Result<Vec<JobPosting>, AppError> {
        self.simulate(self.latency.jobs).await?;
        let session = self.session.read().await;
        Ok(search(&session.jobs, filters))
    }

    async fn get_user_profile(&self) -> Result<UserProfile, AppError> {
        self.simulate(self.latency.profile_read).await?;
        Ok(self.session.read().await.profile.clone())
    }

    async fn update_user_profile(&self, patch: ProfilePatch) -> Result<UserProfile, AppError> {
        self.simulate(self.latency.profile_write).await?;
        let mut session = self.session.write().await;
        session.profile.apply(patch)?;
        info!(user_id = %session.profile.user_id, "profile updated");
        Ok(session.profile.clone())
    }

    async fn get_applications(&self) -> Result<Vec<Application>, AppError> {
        self.simulate(self.latency.applications).await?;
        Ok(self
            .session
            .read()
            .await
            .tracker
            .list_applications()
            .to_vec())
    }

    async fn update_application_status(
        &self,
        application_id: &str,
        status: ApplicationStatus,
    ) -> Result<Application, AppError> {
        self.simulate(self.latency.application_write).await?;
        self.session
            .write()
            .await
            .tracker
            .change_status(application_id, status)
    }

    async fn add_application_note(
        &self,
        application_id: &str,
        content: &str,
    ) -> Result<Application, AppError> {
        self.simulate(self.latency.application_write).await?;
        self.session
            .write()
            .await
            .tracker
            .add_note(application_id, content)
    }

    async fn get_user_settings(&self) -> Result<UserSettings, AppError> {
        self.simulate(self.latency.settings).await?;
        Ok(self.session.read().await.settings.clone())
    }

    async fn update_user_settings(&self, patch: SettingsPatch) -> Result<UserSettings, AppError> {
        self.simulate(self.latency.settings).await?;
        let mut session = self.session.write().await;
        session.settings.apply(patch)?;
        info!("settings updated");
        Ok(session.settings.clone())
    }
}
