//! Jobs collection

use super::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use job_board_shared::{JobPosting, JobPostingPatch, NewJobPosting};
use sqlx::PgPool;
use tokio::sync::RwLock;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Trait for jobs collection operations
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn insert(&self, job: NewJobPosting) -> Result<JobPosting, StoreError>;

    /// Update by identifier. Returns whether a posting matched; an unknown
    /// id is not an error and creates nothing.
    async fn update(&self, id: Uuid, patch: JobPostingPatch) -> Result<bool, StoreError>;

    /// All postings sharing at least one tag with `skills`, in insertion order
    async fn find_by_any_skill(&self, skills: &[String]) -> Result<Vec<JobPosting>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

/// Job row from database
#[derive(Debug, Clone, sqlx::FromRow)]
struct JobRecord {
    id: Uuid,
    company_name: String,
    add_logo_url: String,
    job_position: String,
    monthly_salary: f64,
    job_type: String,
    remote_office: String,
    location: String,
    job_description: String,
    about_company: String,
    skills_required: Vec<String>,
    created_at: DateTime<Utc>,
}

impl From<JobRecord> for JobPosting {
    fn from(row: JobRecord) -> Self {
        Self {
            id: row.id,
            company_name: row.company_name,
            add_logo_url: row.add_logo_url,
            job_position: row.job_position,
            monthly_salary: row.monthly_salary,
            job_type: row.job_type,
            remote_office: row.remote_office,
            location: row.location,
            job_description: row.job_description,
            about_company: row.about_company,
            skills_required: row.skills_required,
            created_at: row.created_at,
        }
    }
}

/// Overlap search; `seq` comes from a sequence, so it follows insertion order
/// even when postings share a `created_at`
const FIND_BY_ANY_SKILL: &str = r#"
    SELECT id, company_name, add_logo_url, job_position, monthly_salary, job_type,
           remote_office, location, job_description, about_company,
           skills_required, created_at
    FROM jobs
    WHERE skills_required && $1
    ORDER BY seq
"#;

/// PostgreSQL-backed jobs collection
pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    #[instrument(skip(self, job))]
    async fn insert(&self, job: NewJobPosting) -> Result<JobPosting, StoreError> {
        let created = sqlx::query_as::<_, JobRecord>(
            r#"
            INSERT INTO jobs (
                id, company_name, add_logo_url, job_position, monthly_salary, job_type,
                remote_office, location, job_description, about_company, skills_required
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, company_name, add_logo_url, job_position, monthly_salary, job_type,
                      remote_office, location, job_description, about_company,
                      skills_required, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&job.company_name)
        .bind(&job.add_logo_url)
        .bind(&job.job_position)
        .bind(job.monthly_salary)
        .bind(&job.job_type)
        .bind(&job.remote_office)
        .bind(&job.location)
        .bind(&job.job_description)
        .bind(&job.about_company)
        .bind(&job.skills_required)
        .fetch_one(&self.pool)
        .await?;

        debug!(job_id = %created.id, "Job inserted");
        Ok(created.into())
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: Uuid, patch: JobPostingPatch) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE jobs SET
                company_name = COALESCE($2, company_name),
                add_logo_url = COALESCE($3, add_logo_url),
                job_position = COALESCE($4, job_position),
                monthly_salary = COALESCE($5, monthly_salary),
                job_type = COALESCE($6, job_type),
                remote_office = COALESCE($7, remote_office),
                location = COALESCE($8, location),
                job_description = COALESCE($9, job_description),
                about_company = COALESCE($10, about_company),
                skills_required = COALESCE($11, skills_required)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch.company_name)
        .bind(patch.add_logo_url)
        .bind(patch.job_position)
        .bind(patch.monthly_salary)
        .bind(patch.job_type)
        .bind(patch.remote_office)
        .bind(patch.location)
        .bind(patch.job_description)
        .bind(patch.about_company)
        .bind(patch.skills_required)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn find_by_any_skill(&self, skills: &[String]) -> Result<Vec<JobPosting>, StoreError> {
        if skills.is_empty() {
            return Ok(Vec::new());
        }

        let jobs = sqlx::query_as::<_, JobRecord>(FIND_BY_ANY_SKILL)
            .bind(skills)
            .fetch_all(&self.pool)
            .await?;

        Ok(jobs.into_iter().map(JobPosting::from).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// In-memory jobs collection for development and testing
#[derive(Default)]
pub struct InMemoryJobStore {
    jobs: RwLock<Vec<JobPosting>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored postings
    pub async fn job_count(&self) -> usize {
        self.jobs.read().await.len()
    }

    /// Snapshot of a single posting
    pub async fn get(&self, id: Uuid) -> Option<JobPosting> {
        self.jobs.read().await.iter().find(|j| j.id == id).cloned()
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn insert(&self, job: NewJobPosting) -> Result<JobPosting, StoreError> {
        let created = JobPosting::create(job);
        self.jobs.write().await.push(created.clone());
        debug!(job_id = %created.id, "Job inserted in memory");
        Ok(created)
    }

    async fn update(&self, id: Uuid, patch: JobPostingPatch) -> Result<bool, StoreError> {
        let mut jobs = self.jobs.write().await;
        match jobs.iter_mut().find(|j| j.id == id) {
            Some(job) => {
                job.apply(patch);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_by_any_skill(&self, skills: &[String]) -> Result<Vec<JobPosting>, StoreError> {
        let jobs = self.jobs.read().await;
        Ok(jobs
            .iter()
            .filter(|job| job.requires_any(skills))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
