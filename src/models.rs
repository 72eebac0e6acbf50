//! Wire types for the interview tracker API
//!
//! Field names are camelCase on the wire (the backend is a JSON REST API).
//! Identity is server-assigned: `id` is `None` until the backend returns the
//! created record. Timestamps travel as ISO-8601 strings and stay opaque to
//! the client, as do the backend-defined status/difficulty/severity sets.

use serde::{Deserialize, Serialize};

/// A DSA practice problem with spaced-review bookkeeping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DsaProblem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub confidence_level: i32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub attempt_count: i32,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub solution_notes: Option<String>,
    #[serde(default)]
    pub last_reviewed_at: Option<String>,
    #[serde(default)]
    pub next_review_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One entry in any of the seven study-topic catalogs (system design,
/// Azure, OOP, C#, ASP.NET Core, SQL Server, design patterns). The catalogs
/// share this shape; only the resource path differs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub confidence_level: i32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub code_example: Option<String>,
    #[serde(default)]
    pub resources: Option<String>,
    #[serde(default)]
    pub last_reviewed_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A scheduled or completed mock interview.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockInterview {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub company: String,
    #[serde(rename = "type")]
    pub interview_type: String,
    #[serde(default)]
    pub scheduled_at: Option<String>,
    #[serde(default)]
    pub overall_score: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A knowledge gap identified during practice, resolved via a dedicated
/// action rather than a record update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeakArea {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub area: String,
    pub category: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default)]
    pub lesson: Option<String>,
    #[serde(default)]
    pub resolved_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A logged block of study time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub session_type: String,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub duration_minutes: i32,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Payload for recording a DSA attempt. The backend owns the review
/// scheduling that follows from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptInput {
    pub time_taken_minutes: i32,
    pub solved_optimally: bool,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Backend acknowledgement for a seed action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedOutcome {
    pub message: String,
}

/// Aggregate dashboard statistics, computed entirely by the backend.
/// Every field defaults so a sparse payload still decodes; rates are
/// already 0-100 and are rendered as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_problems: u32,
    #[serde(default)]
    pub solved_problems: u32,
    #[serde(default)]
    pub completion_rate: f64,
    #[serde(default)]
    pub total_topics: u32,
    #[serde(default)]
    pub completed_topics: u32,
    #[serde(default)]
    pub topic_completion_rate: f64,
    #[serde(default)]
    pub interviews_taken: u32,
    #[serde(default)]
    pub average_interview_score: f64,
    #[serde(default)]
    pub active_weak_areas: u32,
    #[serde(default)]
    pub study_minutes_this_week: u32,
    #[serde(default)]
    pub category_progress: Vec<CategoryProgress>,
}

/// Per-category completion, `value` pre-scaled to 0-100 by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgress {
    pub name: String,
    pub value: f64,
}
