use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobPreferences {
    pub remote: bool,
    pub locations: Vec<String>,
    pub min_salary: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub user_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub years_experience: u32,
    pub target_titles: Vec<String>,
    pub preferences: JobPreferences,
}

/// Partial profile update. Absent fields are left untouched; `preferences`
/// merges field by field rather than replacing the whole block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Option<Vec<String>>,
    pub years_experience: Option<u32>,
    pub target_titles: Option<Vec<String>>,
    pub preferences: Option<PreferencesPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreferencesPatch {
    pub remote: Option<bool>,
    pub locations: Option<Vec<String>>,
    pub min_salary: Option<f64>,
}

impl UserProfile {
    /// Merges `patch` into the profile. Everything is validated up front, so
    /// a rejected patch leaves the profile unchanged.
    pub fn apply(&mut self, patch: ProfilePatch) -> Result<(), AppError> {
        let name = patch.name.map(|n| n.trim().to_string());
        if matches!(&name, Some(n) if n.is_empty()) {
            return Err(AppError::Validation("name cannot be empty".to_string()));
        }
        let skills = patch.skills.map(|v| clean_list("skills", v)).transpose()?;
        let target_titles = patch
            .target_titles
            .map(|v| clean_list("target_titles", v))
            .transpose()?;
        let locations = patch
            .preferences
            .as_ref()
            .and_then(|p| p.locations.clone())
            .map(|v| clean_list("preferences.locations", v))
            .transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = Some(email.trim().to_string()).filter(|e| !e.is_empty());
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone.trim().to_string()).filter(|p| !p.is_empty());
        }
        if let Some(skills) = skills {
            self.skills = skills;
        }
        if let Some(years) = patch.years_experience {
            self.years_experience = years;
        }
        if let Some(titles) = target_titles {
            self.target_titles = titles;
        }
        if let Some(prefs) = patch.preferences {
            if let Some(remote) = prefs.remote {
                self.preferences.remote = remote;
            }
            if let Some(locations) = locations {
                self.preferences.locations = locations;
            }
            if let Some(min_salary) = prefs.min_salary {
                self.preferences.min_salary = min_salary;
            }
        }
        Ok(())
    }
}

fn clean_list(field: &str, values: Vec<String>) -> Result<Vec<String>, AppError> {
    let mut cleaned = Vec::with_capacity(values.len());
    for value in values {
        let value = value.trim();
        if value.is_empty() {
            return Err(AppError::Validation(format!(
                "{field} cannot contain empty entries"
            )));
        }
        cleaned.push(value.to_string());
    }
    Ok(cleaned)
}
