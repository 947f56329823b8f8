//! Input validation functions
//!
//! Presence checks for job submissions and parsing of skill query strings.

use crate::types::{FieldError, JobPostingRequest};

/// Required job fields as `(body path, message)`, in reporting order
pub const REQUIRED_JOB_FIELDS: [(&str, &str); 10] = [
    ("companyName", "Company name is required"),
    ("addLogoUrl", "Logo URL is required"),
    ("jobPosition", "Job position is required"),
    ("monthlySalary", "Monthly salary is required"),
    ("jobType", "Job type is required"),
    ("remoteOffice", "Remote/office is required"),
    ("location", "Location is required"),
    ("jobDescription", "Job description is required"),
    ("aboutCompany", "Company description is required"),
    ("skillsRequired", "Skills is required"),
];

fn is_filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

/// Validate that every required job field is present and non-empty
///
/// Returns one `FieldError` per missing field, in `REQUIRED_JOB_FIELDS` order.
pub fn validate_job_posting(req: &JobPostingRequest) -> Result<(), Vec<FieldError>> {
    let present = [
        is_filled(&req.company_name),
        is_filled(&req.add_logo_url),
        is_filled(&req.job_position),
        req.monthly_salary.as_ref().is_some_and(|s| !s.is_blank()),
        is_filled(&req.job_type),
        is_filled(&req.remote_office),
        is_filled(&req.location),
        is_filled(&req.job_description),
        is_filled(&req.about_company),
        req.skills_required.as_ref().is_some_and(|s| !s.is_blank()),
    ];

    let errors: Vec<FieldError> = REQUIRED_JOB_FIELDS
        .iter()
        .zip(present)
        .filter(|(_, ok)| !ok)
        .map(|((path, msg), _)| FieldError::body(path, msg))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Split a comma-separated skills string into trimmed, non-empty tags
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
