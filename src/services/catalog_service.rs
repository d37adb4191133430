use tracing::info;
use uuid::Uuid;

use crate::dto::job_dto::PostJobPayload;
use crate::error::{ApplyError, Result};
use crate::models::job::{AppliedJob, Job};
use crate::utils::{time, validation};

/// Ordered, in-memory job catalog. Newest postings sit at the front; seed
/// entries keep their seed order. Nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    jobs: Vec<Job>,
}

impl JobCatalog {
    pub fn new(seed: Vec<Job>) -> Self {
        Self { jobs: seed }
    }

    pub fn list(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn get(&self, job_id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == job_id)
    }

    /// Case-insensitive substring match on title or description. A blank
    /// filter returns the full catalog.
    pub fn search(&self, filter: &str) -> Vec<&Job> {
        let needle = filter.trim().to_lowercase();
        self.jobs
            .iter()
            .filter(|job| {
                needle.is_empty()
                    || job.title.to_lowercase().contains(&needle)
                    || job.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Validates the payload, then prepends a fresh posting. A failed
    /// validation leaves the catalog untouched.
    pub fn post(&mut self, payload: PostJobPayload, poster: &str) -> Result<Job> {
        validation::validate(&payload)?;

        let job = Job {
            id: Uuid::new_v4().to_string(),
            title: payload.title,
            description: payload.description,
            budget: payload.budget,
            posted_at: time::JUST_NOW.to_string(),
            poster: poster.to_string(),
            applicants: 0,
            applied: false,
        };
        info!(job_id = %job.id, title = %job.title, "job posted");
        self.jobs.insert(0, job.clone());
        Ok(job)
    }

    /// Marks the job applied in place and returns the derived application
    /// record. Applying twice to the same id is rejected.
    pub fn apply(&mut self, job_id: &str) -> std::result::Result<AppliedJob, ApplyError> {
        let job = self
            .jobs
            .iter_mut()
            .find(|job| job.id == job_id)
            .ok_or(ApplyError::NotFound)?;
        if job.applied {
            return Err(ApplyError::AlreadyApplied);
        }
        job.applied = true;
        info!(job_id = %job.id, title = %job.title, "application submitted");
        Ok(AppliedJob::pending(job.clone(), time::JUST_NOW))
    }
}
