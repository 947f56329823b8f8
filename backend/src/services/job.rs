//! Job posting service

use crate::error::{ApiError, ApiResult};
use crate::repositories::JobStore;
use job_board_shared::validation::{parse_skills, validate_job_posting};
use job_board_shared::{messages, CastError, JobPostingRequest, StatusResponse};
use tracing::{debug, info};
use uuid::Uuid;

/// Job service for posting, updating and searching jobs
pub struct JobService;

impl JobService {
    /// Create a posting once every required field is present
    pub async fn submit(jobs: &dyn JobStore, req: JobPostingRequest) -> ApiResult<StatusResponse> {
        validate_job_posting(&req).map_err(ApiError::Validation)?;

        let job = jobs.insert(req.into_new_posting()?).await?;

        info!(job_id = %job.id, "Job posted");
        Ok(StatusResponse::success(messages::JOB_ADDED))
    }

    /// Update the fields present in `req` on the posting with identifier `id`
    ///
    /// An unknown id reports success and creates nothing.
    pub async fn update(
        jobs: &dyn JobStore,
        id: &str,
        req: JobPostingRequest,
    ) -> ApiResult<StatusResponse> {
        let job_id = Uuid::parse_str(id).map_err(|_| CastError::Identifier(id.to_string()))?;
        let patch = req.into_patch()?;

        if jobs.update(job_id, patch).await? {
            info!(%job_id, "Job updated");
        } else {
            debug!(%job_id, "Job update matched no posting");
        }

        Ok(StatusResponse::success(messages::JOB_UPDATED))
    }

    /// Postings whose skills intersect the comma-separated `skills`
    pub async fn search(jobs: &dyn JobStore, skills: &str) -> ApiResult<StatusResponse> {
        let tags = parse_skills(skills);
        let found = jobs.find_by_any_skill(&tags).await?;

        debug!(?tags, matches = found.len(), "Job search");
        Ok(StatusResponse::success(messages::JOBS_RETRIEVED).jobs(found))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryJobStore;
    use job_board_shared::{NumberInput, SkillsInput};

    fn job_request(company: &str, skills: &[&str]) -> JobPostingRequest {
        JobPostingRequest {
            company_name: Some(company.to_string()),
            add_logo_url: Some("https://logo.test/a.png".to_string()),
            job_position: Some("Engineer".to_string()),
            monthly_salary: Some(NumberInput::Text("45000".to_string())),
            job_type: Some("Internship".to_string()),
            remote_office: Some("Remote".to_string()),
            location: Some("Delhi".to_string()),
            job_description: Some("Write code".to_string()),
            about_company: Some("Small team".to_string()),
            skills_required: Some(SkillsInput::Many(
                skills.iter().map(|s| s.to_string()).collect(),
            )),
        }
    }

    #[tokio::test]
    async fn test_submit_persists_posting() {
        let store = InMemoryJobStore::new();
        let response = JobService::submit(&store, job_request("Acme", &["Rust"]))
            .await
            .unwrap();

        assert_eq!(response.message, messages::JOB_ADDED);
        assert!(response.jobs.is_none());
        assert_eq!(store.job_count().await, 1);
    }

    #[tokio::test]
    async fn test_submit_with_missing_fields_creates_nothing() {
        let store = InMemoryJobStore::new();
        let mut req = job_request("Acme", &["Rust"]);
        req.location = None;
        req.job_type = Some(String::new());

        let err = JobService::submit(&store, req).await.unwrap_err();
        match err {
            ApiError::Validation(errors) => {
                let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
                assert_eq!(paths, vec!["jobType", "location"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(store.job_count().await, 0);
    }

    #[tokio::test]
    async fn test_submit_with_non_numeric_salary_is_cast_error() {
        let store = InMemoryJobStore::new();
        let mut req = job_request("Acme", &["Rust"]);
        req.monthly_salary = Some(NumberInput::Text("negotiable".to_string()));

        let err = JobService::submit(&store, req).await.unwrap_err();
        assert!(matches!(err, ApiError::Input(CastError::Number { .. })));
        assert_eq!(store.job_count().await, 0);
    }

    #[tokio::test]
    async fn test_update_unknown_id_succeeds_without_creating() {
        let store = InMemoryJobStore::new();
        let id = Uuid::new_v4().to_string();

        let response = JobService::update(&store, &id, job_request("Ghost", &["Go"]))
            .await
            .unwrap();

        assert_eq!(response.message, messages::JOB_UPDATED);
        assert_eq!(store.job_count().await, 0);
    }

    #[tokio::test]
    async fn test_update_malformed_id_is_cast_error() {
        let store = InMemoryJobStore::new();
        let err = JobService::update(&store, "not-an-id", JobPostingRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Input(CastError::Identifier(_))));
    }

    #[tokio::test]
    async fn test_search_trims_tags() {
        let store = InMemoryJobStore::new();
        JobService::submit(&store, job_request("A", &["Go"])).await.unwrap();
        JobService::submit(&store, job_request("B", &["Rust", "SQL"])).await.unwrap();
        JobService::submit(&store, job_request("C", &["Java"])).await.unwrap();

        let response = JobService::search(&store, " Go , Rust").await.unwrap();
        let companies: Vec<String> = response
            .jobs
            .unwrap()
            .into_iter()
            .map(|j| j.company_name)
            .collect();
        assert_eq!(companies, vec!["A", "B"]);

        let response = JobService::search(&store, "Elixir").await.unwrap();
        assert_eq!(response.jobs, Some(vec![]));
    }
}
