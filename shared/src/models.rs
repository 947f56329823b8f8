//! Stored records for the users and jobs collections

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile: Option<i64>,
    /// bcrypt hash, never sent to clients
    #[serde(skip_serializing, default)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a user; the password is already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub mobile: Option<i64>,
    pub password_hash: String,
}

/// Job posting as stored and returned by queries
///
/// Serialized with the `_id` key and camelCase fields so clients see the
/// same document shape the store keeps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub company_name: String,
    pub add_logo_url: String,
    pub job_position: String,
    pub monthly_salary: f64,
    pub job_type: String,
    pub remote_office: String,
    pub location: String,
    pub job_description: String,
    pub about_company: String,
    pub skills_required: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl JobPosting {
    /// Build a stored posting from validated input
    pub fn create(new: NewJobPosting) -> Self {
        Self {
            id: Uuid::new_v4(),
            company_name: new.company_name,
            add_logo_url: new.add_logo_url,
            job_position: new.job_position,
            monthly_salary: new.monthly_salary,
            job_type: new.job_type,
            remote_office: new.remote_office,
            location: new.location,
            job_description: new.job_description,
            about_company: new.about_company,
            skills_required: new.skills_required,
            created_at: Utc::now(),
        }
    }

    /// True when the posting lists at least one of the given tags
    pub fn requires_any(&self, tags: &[String]) -> bool {
        self.skills_required.iter().any(|skill| tags.contains(skill))
    }

    /// Overwrite the fields present in the patch, leaving the rest untouched
    pub fn apply(&mut self, patch: JobPostingPatch) {
        if let Some(v) = patch.company_name {
            self.company_name = v;
        }
        if let Some(v) = patch.add_logo_url {
            self.add_logo_url = v;
        }
        if let Some(v) = patch.job_position {
            self.job_position = v;
        }
        if let Some(v) = patch.monthly_salary {
            self.monthly_salary = v;
        }
        if let Some(v) = patch.job_type {
            self.job_type = v;
        }
        if let Some(v) = patch.remote_office {
            self.remote_office = v;
        }
        if let Some(v) = patch.location {
            self.location = v;
        }
        if let Some(v) = patch.job_description {
            self.job_description = v;
        }
        if let Some(v) = patch.about_company {
            self.about_company = v;
        }
        if let Some(v) = patch.skills_required {
            self.skills_required = v;
        }
    }
}

/// Fully populated job posting ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewJobPosting {
    pub company_name: String,
    pub add_logo_url: String,
    pub job_position: String,
    pub monthly_salary: f64,
    pub job_type: String,
    pub remote_office: String,
    pub location: String,
    pub job_description: String,
    pub about_company: String,
    pub skills_required: Vec<String>,
}

/// Partial update; `None` fields keep their stored value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobPostingPatch {
    pub company_name: Option<String>,
    pub add_logo_url: Option<String>,
    pub job_position: Option<String>,
    pub monthly_salary: Option<f64>,
    pub job_type: Option<String>,
    pub remote_office: Option<String>,
    pub location: Option<String>,
    pub job_description: Option<String>,
    pub about_company: Option<String>,
    pub skills_required: Option<Vec<String>>,
}
