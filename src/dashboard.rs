//! Terminal dashboard
//!
//! Assembles three independent read-only queries into one summary screen:
//! aggregate stats, the DSA review queue, and open weak areas. The fetches
//! run concurrently and none awaits another, so a slow or failing region
//! never blocks the rest. Each region carries its own error state instead
//! of silently rendering empty.

use std::fmt::Write as _;

use crate::client::{AnalyticsClient, DsaClient, WeakAreaClient};
use crate::models::{DashboardStats, DsaProblem, WeakArea};
use crate::transport::{Transport, TransportError};

const BAR_WIDTH: usize = 20;
const REVIEW_LIST_LIMIT: usize = 5;

/// One independently-fetched display region.
#[derive(Debug)]
pub enum Region<T> {
    Ready(T),
    Failed(String),
}

impl<T> Region<T> {
    fn from_result(result: Result<T, TransportError>, what: &str) -> Self {
        match result {
            Ok(value) => Region::Ready(value),
            Err(err) => {
                tracing::warn!(region = what, error = %err, "dashboard region failed");
                Region::Failed(err.to_string())
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Region::Ready(_))
    }
}

/// The loaded dashboard: three regions, each either ready or failed.
#[derive(Debug)]
pub struct Dashboard {
    pub stats: Region<DashboardStats>,
    pub needs_review: Region<Vec<DsaProblem>>,
    pub weak_areas: Region<Vec<WeakArea>>,
}

impl Dashboard {
    /// Issue the three fetches concurrently. Completion order is
    /// irrelevant; each result lands in its own region.
    pub async fn load(transport: &Transport) -> Self {
        let analytics = AnalyticsClient::new(transport.clone());
        let dsa = DsaClient::new(transport.clone());
        let weak_areas = WeakAreaClient::new(transport.clone());

        let (stats, needs_review, open_areas) = tokio::join!(
            analytics.dashboard(),
            dsa.needs_review(),
            weak_areas.list(Some(false)),
        );

        Self {
            stats: Region::from_result(stats, "stats"),
            needs_review: Region::from_result(needs_review, "needs-review"),
            weak_areas: Region::from_result(open_areas, "weak-areas"),
        }
    }

    /// Render the summary screen. Derivations here are presentation-only:
    /// bar widths come straight from the backend's 0-100 values, the
    /// average score is rounded to one decimal, and the review list is
    /// truncated for display.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Interview prep dashboard");
        let _ = writeln!(out, "========================");

        match &self.stats {
            Region::Ready(stats) => render_stats(&mut out, stats),
            Region::Failed(msg) => {
                let _ = writeln!(out, "\nStats unavailable: {msg}");
            }
        }

        match &self.needs_review {
            Region::Ready(problems) => render_review_queue(&mut out, problems),
            Region::Failed(msg) => {
                let _ = writeln!(out, "\nReview queue unavailable: {msg}");
            }
        }

        match &self.weak_areas {
            Region::Ready(areas) => render_weak_areas(&mut out, areas),
            Region::Failed(msg) => {
                let _ = writeln!(out, "\nWeak areas unavailable: {msg}");
            }
        }

        out
    }
}

fn render_stats(out: &mut String, stats: &DashboardStats) {
    let _ = writeln!(
        out,
        "\nDSA problems   {} [{}/{}]",
        bar(stats.completion_rate),
        stats.solved_problems,
        stats.total_problems
    );
    let _ = writeln!(
        out,
        "Topics         {} [{}/{}]",
        bar(stats.topic_completion_rate),
        stats.completed_topics,
        stats.total_topics
    );
    let _ = writeln!(
        out,
        "Interviews     {} taken, avg score {:.1}",
        stats.interviews_taken, stats.average_interview_score
    );
    let _ = writeln!(
        out,
        "This week      {} study minutes, {} open weak areas",
        stats.study_minutes_this_week, stats.active_weak_areas
    );
    for progress in &stats.category_progress {
        let _ = writeln!(out, "  {:<16} {}", progress.name, bar(progress.value));
    }
}

fn render_review_queue(out: &mut String, problems: &[DsaProblem]) {
    let _ = writeln!(out, "\nNeeds review ({})", problems.len());
    for problem in problems.iter().take(REVIEW_LIST_LIMIT) {
        let _ = writeln!(
            out,
            "  {:<28} {} / {}",
            problem.title, problem.category, problem.difficulty
        );
    }
    if problems.len() > REVIEW_LIST_LIMIT {
        let _ = writeln!(out, "  ... and {} more", problems.len() - REVIEW_LIST_LIMIT);
    }
}

fn render_weak_areas(out: &mut String, areas: &[WeakArea]) {
    let _ = writeln!(out, "\nOpen weak areas ({})", areas.len());
    for area in areas {
        let _ = writeln!(out, "  [{}] {} ({})", area.severity, area.area, area.category);
    }
}

/// Fixed-width progress bar; `value` is already 0-100.
fn bar(value: f64) -> String {
    let filled = ((value.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        value.clamp(0.0, 100.0)
    )
}
