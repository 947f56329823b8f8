//! API request and response types
//!
//! Response bodies keep the capitalised `Status` / `Message` keys existing
//! clients already parse.

use crate::errors::CastError;
use crate::models::{JobPosting, JobPostingPatch, NewJobPosting};
use serde::{Deserialize, Serialize};

pub const STATUS_SUCCESS: &str = "Success";
pub const STATUS_FAILED: &str = "failed";

/// Message strings sent in response bodies
pub mod messages {
    pub const USER_CREATED: &str = "User created Successfuly";
    pub const USER_EXISTS: &str = "User already exists with the provided mail";
    pub const LOGGED_IN: &str = "User Logged-in Successfully";
    pub const INCORRECT_CREDENTIALS: &str = "Incorrect Credentials!";
    pub const UNAUTHORIZED: &str = "Unauthorized";
    pub const JOB_ADDED: &str = "Job added Successfuly";
    pub const JOB_UPDATED: &str = "Job Updated Succesfully";
    pub const JOBS_RETRIEVED: &str = "Jobs retrieved successfully";
    pub const ROUTE_NOT_FOUND: &str = "Something went wrong! Please try again later.";
    pub const HEALTH: &str = "Working!";
}

// ============================================================================
// Loosely typed inputs
// ============================================================================

/// A numeric field that clients may send either as a number or as a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

impl NumberInput {
    pub fn is_blank(&self) -> bool {
        matches!(self, NumberInput::Text(s) if s.trim().is_empty())
    }

    /// Cast to a finite number, naming `path` in the error
    pub fn to_f64(&self, path: &'static str) -> Result<f64, CastError> {
        let value = match self {
            NumberInput::Number(n) => *n,
            NumberInput::Text(s) => s.trim().parse::<f64>().map_err(|_| CastError::Number {
                path,
                value: s.clone(),
            })?,
        };

        if !value.is_finite() {
            return Err(CastError::Number {
                path,
                value: value.to_string(),
            });
        }
        Ok(value)
    }

    /// Cast to a whole number, rejecting fractional values
    pub fn to_i64(&self, path: &'static str) -> Result<i64, CastError> {
        let value = self.to_f64(path)?;
        if value.fract() != 0.0 || value.abs() > i64::MAX as f64 {
            return Err(CastError::Number {
                path,
                value: value.to_string(),
            });
        }
        Ok(value as i64)
    }
}

/// Skill tags sent as a list, or as a single string stored as one tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
    Many(Vec<String>),
    One(String),
}

impl SkillsInput {
    pub fn is_blank(&self) -> bool {
        match self {
            SkillsInput::Many(tags) => tags.is_empty(),
            SkillsInput::One(tag) => tag.trim().is_empty(),
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            SkillsInput::Many(tags) => tags,
            SkillsInput::One(tag) => vec![tag],
        }
    }
}

// ============================================================================
// Authentication
// ============================================================================

/// Registration request
///
/// Every field is optional on the wire; missing credentials surface as a
/// downstream failure instead of a request rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<NumberInput>,
    pub password: Option<String>,
}

impl RegisterRequest {
    pub fn mobile_number(&self) -> Result<Option<i64>, CastError> {
        match &self.mobile {
            None => Ok(None),
            Some(m) if m.is_blank() => Ok(None),
            Some(m) => m.to_i64("mobile").map(Some),
        }
    }
}

/// Login request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

// ============================================================================
// Job postings
// ============================================================================

/// Body of job submission and job update requests
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingRequest {
    pub company_name: Option<String>,
    #[serde(alias = "logoUrl")]
    pub add_logo_url: Option<String>,
    pub job_position: Option<String>,
    pub monthly_salary: Option<NumberInput>,
    pub job_type: Option<String>,
    pub remote_office: Option<String>,
    pub location: Option<String>,
    pub job_description: Option<String>,
    pub about_company: Option<String>,
    pub skills_required: Option<SkillsInput>,
}

impl JobPostingRequest {
    /// Convert a validated submission into an insertable posting
    pub fn into_new_posting(self) -> Result<NewJobPosting, CastError> {
        let monthly_salary = self
            .monthly_salary
            .as_ref()
            .ok_or(CastError::Missing("monthlySalary"))?
            .to_f64("monthlySalary")?;

        Ok(NewJobPosting {
            company_name: self.company_name.ok_or(CastError::Missing("companyName"))?,
            add_logo_url: self.add_logo_url.ok_or(CastError::Missing("addLogoUrl"))?,
            job_position: self.job_position.ok_or(CastError::Missing("jobPosition"))?,
            monthly_salary,
            job_type: self.job_type.ok_or(CastError::Missing("jobType"))?,
            remote_office: self.remote_office.ok_or(CastError::Missing("remoteOffice"))?,
            location: self.location.ok_or(CastError::Missing("location"))?,
            job_description: self
                .job_description
                .ok_or(CastError::Missing("jobDescription"))?,
            about_company: self.about_company.ok_or(CastError::Missing("aboutCompany"))?,
            skills_required: self
                .skills_required
                .ok_or(CastError::Missing("skillsRequired"))?
                .into_vec(),
        })
    }

    /// Convert an update body into a patch; absent fields stay `None`
    pub fn into_patch(self) -> Result<JobPostingPatch, CastError> {
        let monthly_salary = self
            .monthly_salary
            .as_ref()
            .map(|salary| salary.to_f64("monthlySalary"))
            .transpose()?;

        Ok(JobPostingPatch {
            company_name: self.company_name,
            add_logo_url: self.add_logo_url,
            job_position: self.job_position,
            monthly_salary,
            job_type: self.job_type,
            remote_office: self.remote_office,
            location: self.location,
            job_description: self.job_description,
            about_company: self.about_company,
            skills_required: self.skills_required.map(SkillsInput::into_vec),
        })
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Body-level outcome returned with HTTP 200
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "UserName", default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(rename = "jwtToken", default, skip_serializing_if = "Option::is_none")]
    pub jwt_token: Option<String>,
    #[serde(rename = "Jobs", default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<Vec<JobPosting>>,
}

impl StatusResponse {
    pub fn success(message: &str) -> Self {
        Self::with_status(STATUS_SUCCESS, message)
    }

    pub fn failed(message: &str) -> Self {
        Self::with_status(STATUS_FAILED, message)
    }

    fn with_status(status: &str, message: &str) -> Self {
        Self {
            status: status.to_string(),
            message: message.to_string(),
            user_name: None,
            jwt_token: None,
            jobs: None,
        }
    }

    pub fn user_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self
    }

    pub fn jwt_token(mut self, token: impl Into<String>) -> Self {
        self.jwt_token = Some(token.into());
        self
    }

    pub fn jobs(mut self, jobs: Vec<JobPosting>) -> Self {
        self.jobs = Some(jobs);
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// One field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: String,
    pub msg: String,
    pub path: String,
    pub location: String,
}

impl FieldError {
    /// A failure on a field of the request body
    pub fn body(path: &str, msg: &str) -> Self {
        Self {
            kind: "field".to_string(),
            msg: msg.to_string(),
            path: path.to_string(),
            location: "body".to_string(),
        }
    }
}

/// Validation failure response (HTTP 400)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

/// Error envelope for data-layer failures and unmatched routes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(50000), 50000.0)]
    #[case(json!("50000"), 50000.0)]
    #[case(json!(" 1250.5 "), 1250.5)]
    fn test_number_input_casts(#[case] raw: serde_json::Value, #[case] expected: f64) {
        let input: NumberInput = serde_json::from_value(raw).unwrap();
        assert_eq!(input.to_f64("monthlySalary").unwrap(), expected);
    }

    #[test]
    fn test_number_input_rejects_text() {
        let input = NumberInput::Text("lots".to_string());
        let err = input.to_f64("monthlySalary").unwrap_err();
        assert_eq!(
            err,
            CastError::Number {
                path: "monthlySalary",
                value: "lots".to_string()
            }
        );
    }

    #[test]
    fn test_mobile_must_be_whole() {
        let req = RegisterRequest {
            mobile: Some(NumberInput::Number(98765.5)),
            ..Default::default()
        };
        assert!(req.mobile_number().is_err());

        let req = RegisterRequest {
            mobile: Some(NumberInput::Text("9876543210".to_string())),
            ..Default::default()
        };
        assert_eq!(req.mobile_number().unwrap(), Some(9876543210));
    }

    #[test]
    fn test_skills_single_string_becomes_one_tag() {
        let skills: SkillsInput = serde_json::from_value(json!("Go")).unwrap();
        assert_eq!(skills.into_vec(), vec!["Go".to_string()]);

        let skills: SkillsInput = serde_json::from_value(json!(["Go", "Rust"])).unwrap();
        assert_eq!(skills.into_vec(), vec!["Go".to_string(), "Rust".to_string()]);
    }

    #[test]
    fn test_logo_url_alias() {
        let req: JobPostingRequest =
            serde_json::from_value(json!({ "logoUrl": "https://x.test/a.png" })).unwrap();
        assert_eq!(req.add_logo_url.as_deref(), Some("https://x.test/a.png"));
    }

    #[test]
    fn test_into_patch_keeps_absent_fields_none() {
        let req: JobPostingRequest =
            serde_json::from_value(json!({ "location": "Remote", "monthlySalary": "900" }))
                .unwrap();
        let patch = req.into_patch().unwrap();
        assert_eq!(patch.location.as_deref(), Some("Remote"));
        assert_eq!(patch.monthly_salary, Some(900.0));
        assert!(patch.company_name.is_none());
        assert!(patch.skills_required.is_none());
    }

    #[test]
    fn test_status_response_shape() {
        let body = StatusResponse::success(messages::LOGGED_IN)
            .user_name("Asha")
            .jwt_token("abc");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            json!({
                "Status": "Success",
                "Message": "User Logged-in Successfully",
                "UserName": "Asha",
                "jwtToken": "abc"
            })
        );

        let json = serde_json::to_value(StatusResponse::failed(messages::UNAUTHORIZED)).unwrap();
        assert_eq!(json, json!({ "Status": "failed", "Message": "Unauthorized" }));
    }

    #[test]
    fn test_empty_jobs_serialize_as_list() {
        let json = serde_json::to_value(StatusResponse::success("ok").jobs(vec![])).unwrap();
        assert_eq!(json["Jobs"], json!([]));
    }
}
