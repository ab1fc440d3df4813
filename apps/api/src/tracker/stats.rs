use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::application::{Application, ApplicationStatus};

/// Dashboard counters. Recomputed from the collection on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationStats {
    pub total: usize,
    pub interviews: usize,
    pub offers: usize,
    /// Share of applications that moved past `applied`, as a rounded percentage.
    pub response_rate: u32,
    pub by_status: BTreeMap<ApplicationStatus, usize>,
}

impl ApplicationStats {
    pub fn from_applications(applications: &[Application]) -> Self {
        let mut by_status = BTreeMap::new();
        for app in applications {
            *by_status.entry(app.status).or_insert(0) += 1;
        }
        let count = |status: ApplicationStatus| by_status.get(&status).copied().unwrap_or(0);

        let total = applications.len();
        let responded = total - count(ApplicationStatus::Applied);

        Self {
            total,
            interviews: count(ApplicationStatus::Interview),
            offers: count(ApplicationStatus::Offer),
            response_rate: response_rate(responded, total),
            by_status,
        }
    }
}

fn response_rate(responded: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((responded as f64 / total as f64) * 100.0).round() as u32
}
