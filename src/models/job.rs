use serde::{Deserialize, Serialize};

/// A job posting as it appears in a board's catalog. Immutable once created
/// except for the `applicants` counter and the `applied` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: String,
    pub budget: String,
    pub posted_at: String,
    pub poster: String,
    #[serde(default)]
    pub applicants: u32,
    #[serde(default)]
    pub applied: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A freelancer's application record, derived one-to-one from a Job.
/// The status is fixed at creation time; no operation transitions it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedJob {
    pub id: String,
    pub title: String,
    pub description: String,
    pub budget: String,
    pub posted_at: String,
    pub poster: String,
    pub status: ApplicationStatus,
    pub applied_at: String,
}

impl AppliedJob {
    pub fn pending(job: Job, applied_at: impl Into<String>) -> Self {
        Self {
            id: job.id,
            title: job.title,
            description: job.description,
            budget: job.budget,
            posted_at: job.posted_at,
            poster: job.poster,
            status: ApplicationStatus::Pending,
            applied_at: applied_at.into(),
        }
    }
}
