//! Typed resource clients for the tracker API
//!
//! Every tracked-item domain exposes the same CRUD-plus-actions surface, so
//! the HTTP plumbing lives once in [`ResourceClient`] and each domain is a
//! thin binding that names its path segment and the subset of operations its
//! endpoint actually serves. Narrow mutations (favorite, attempt, resolve)
//! are dedicated actions rather than full-record updates, mirroring the
//! backend's `POST .../favorite` style routes.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::models::{
    AttemptInput, DashboardStats, DsaProblem, MockInterview, SeedOutcome, StudySession, Topic,
    WeakArea,
};
use crate::transport::{Transport, TransportError};

/// Generic CRUD-plus-actions client for one tracked-item domain, bound to
/// the domain's path segment. Domain bindings wrap this and re-expose only
/// the operations their endpoint serves.
#[derive(Debug, Clone)]
pub struct ResourceClient<T> {
    transport: Transport,
    segment: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ResourceClient<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(transport: Transport, segment: &'static str) -> Self {
        Self {
            transport,
            segment,
            _marker: PhantomData,
        }
    }

    fn path(&self, suffix: &str) -> String {
        format!("/{}{}", self.segment, suffix)
    }

    /// Fetch items matching every provided filter; pairs with an empty value
    /// impose no constraint. Order is whatever the backend returns.
    pub async fn list(&self, filters: &[(&str, String)]) -> Result<Vec<T>, TransportError> {
        self.transport.get(&self.path(""), filters).await
    }

    /// Persist a new item (submitted without an id) and return the stored
    /// record with its server-assigned id.
    pub async fn create(&self, item: &T) -> Result<T, TransportError> {
        self.transport.post(&self.path(""), item).await
    }

    /// Full-record replace. Fields absent from `item` are not preserved.
    pub async fn update(&self, id: i64, item: &T) -> Result<(), TransportError> {
        self.transport.put(&self.path(&format!("/{id}")), item).await
    }

    pub async fn remove(&self, id: i64) -> Result<(), TransportError> {
        self.transport.delete(&self.path(&format!("/{id}"))).await
    }

    /// Flip the favorite flag server-side and return the updated item.
    pub async fn toggle_favorite(&self, id: i64) -> Result<T, TransportError> {
        self.transport
            .post_empty(&self.path(&format!("/{id}/favorite")))
            .await
    }

    /// Ask the backend to populate demo data for this domain.
    pub async fn seed(&self) -> Result<SeedOutcome, TransportError> {
        self.transport.post_empty(&self.path("/seed")).await
    }
}

/// The seven study-topic catalogs. They share the [`Topic`] shape and
/// differ only in their path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    SystemDesign,
    Azure,
    Oop,
    CSharp,
    AspNetCore,
    SqlServer,
    DesignPattern,
}

impl Catalog {
    pub fn segment(self) -> &'static str {
        match self {
            Catalog::SystemDesign => "systemdesign",
            Catalog::Azure => "azure",
            Catalog::Oop => "oop",
            Catalog::CSharp => "csharp",
            Catalog::AspNetCore => "aspnetcore",
            Catalog::SqlServer => "sqlserver",
            Catalog::DesignPattern => "designpattern",
        }
    }
}

/// DSA problems: full catalog surface plus attempt recording and the
/// review-queue reads.
#[derive(Debug, Clone)]
pub struct DsaClient {
    inner: ResourceClient<DsaProblem>,
}

impl DsaClient {
    pub fn new(transport: Transport) -> Self {
        Self {
            inner: ResourceClient::new(transport, "dsa"),
        }
    }

    pub async fn list(
        &self,
        category: Option<&str>,
        difficulty: Option<&str>,
        status: Option<&str>,
    ) -> Result<Vec<DsaProblem>, TransportError> {
        self.inner
            .list(&[
                ("category", category.unwrap_or_default().to_string()),
                ("difficulty", difficulty.unwrap_or_default().to_string()),
                ("status", status.unwrap_or_default().to_string()),
            ])
            .await
    }

    pub async fn create(&self, problem: &DsaProblem) -> Result<DsaProblem, TransportError> {
        self.inner.create(problem).await
    }

    pub async fn update(&self, id: i64, problem: &DsaProblem) -> Result<(), TransportError> {
        self.inner.update(id, problem).await
    }

    pub async fn toggle_favorite(&self, id: i64) -> Result<DsaProblem, TransportError> {
        self.inner.toggle_favorite(id).await
    }

    pub async fn seed(&self) -> Result<SeedOutcome, TransportError> {
        self.inner.seed().await
    }

    /// Append an attempt; the backend updates the problem's status, attempt
    /// count and review schedule, and returns the updated record.
    pub async fn record_attempt(
        &self,
        id: i64,
        attempt: &AttemptInput,
    ) -> Result<DsaProblem, TransportError> {
        self.inner
            .transport
            .post(&self.inner.path(&format!("/{id}/attempt")), attempt)
            .await
    }

    /// Problems due for review per the backend's schedule.
    pub async fn needs_review(&self) -> Result<Vec<DsaProblem>, TransportError> {
        self.inner
            .transport
            .get(&self.inner.path("/needs-review"), &[])
            .await
    }

    pub async fn favorites(&self) -> Result<Vec<DsaProblem>, TransportError> {
        self.inner
            .transport
            .get(&self.inner.path("/favorites"), &[])
            .await
    }

    pub async fn categories(&self) -> Result<Vec<String>, TransportError> {
        self.inner
            .transport
            .get(&self.inner.path("/categories"), &[])
            .await
    }
}

/// One binding per topic catalog; the catalog picks the path segment.
#[derive(Debug, Clone)]
pub struct TopicClient {
    inner: ResourceClient<Topic>,
}

impl TopicClient {
    pub fn new(transport: Transport, catalog: Catalog) -> Self {
        Self {
            inner: ResourceClient::new(transport, catalog.segment()),
        }
    }

    pub async fn list(
        &self,
        category: Option<&str>,
        status: Option<&str>,
    ) -> Result<Vec<Topic>, TransportError> {
        self.inner
            .list(&[
                ("category", category.unwrap_or_default().to_string()),
                ("status", status.unwrap_or_default().to_string()),
            ])
            .await
    }

    pub async fn create(&self, topic: &Topic) -> Result<Topic, TransportError> {
        self.inner.create(topic).await
    }

    pub async fn update(&self, id: i64, topic: &Topic) -> Result<(), TransportError> {
        self.inner.update(id, topic).await
    }

    pub async fn toggle_favorite(&self, id: i64) -> Result<Topic, TransportError> {
        self.inner.toggle_favorite(id).await
    }

    pub async fn seed(&self) -> Result<SeedOutcome, TransportError> {
        self.inner.seed().await
    }
}

/// Mock interviews: plain CRUD, the one domain with client-driven delete
/// and no favorite/seed actions.
#[derive(Debug, Clone)]
pub struct InterviewClient {
    inner: ResourceClient<MockInterview>,
}

impl InterviewClient {
    pub fn new(transport: Transport) -> Self {
        Self {
            inner: ResourceClient::new(transport, "interview"),
        }
    }

    pub async fn list(
        &self,
        interview_type: Option<&str>,
        company: Option<&str>,
    ) -> Result<Vec<MockInterview>, TransportError> {
        self.inner
            .list(&[
                ("type", interview_type.unwrap_or_default().to_string()),
                ("company", company.unwrap_or_default().to_string()),
            ])
            .await
    }

    pub async fn create(&self, interview: &MockInterview) -> Result<MockInterview, TransportError> {
        self.inner.create(interview).await
    }

    pub async fn update(&self, id: i64, interview: &MockInterview) -> Result<(), TransportError> {
        self.inner.update(id, interview).await
    }

    pub async fn remove(&self, id: i64) -> Result<(), TransportError> {
        self.inner.remove(id).await
    }
}

/// Weak areas: create/list/delete plus the resolve action. No update
/// route; resolution is the only server-side mutation.
#[derive(Debug, Clone)]
pub struct WeakAreaClient {
    inner: ResourceClient<WeakArea>,
}

impl WeakAreaClient {
    pub fn new(transport: Transport) -> Self {
        Self {
            inner: ResourceClient::new(transport, "weakarea"),
        }
    }

    pub async fn list(&self, resolved: Option<bool>) -> Result<Vec<WeakArea>, TransportError> {
        let filter = resolved.map(|r| r.to_string()).unwrap_or_default();
        self.inner.list(&[("resolved", filter)]).await
    }

    pub async fn create(&self, area: &WeakArea) -> Result<WeakArea, TransportError> {
        self.inner.create(area).await
    }

    pub async fn remove(&self, id: i64) -> Result<(), TransportError> {
        self.inner.remove(id).await
    }

    /// Mark the area resolved; the backend stamps the resolution time.
    pub async fn resolve(&self, id: i64) -> Result<WeakArea, TransportError> {
        self.inner
            .transport
            .post_empty(&self.inner.path(&format!("/{id}/resolve")))
            .await
    }
}

/// Study sessions: append-only log, list and create only.
#[derive(Debug, Clone)]
pub struct StudySessionClient {
    inner: ResourceClient<StudySession>,
}

impl StudySessionClient {
    pub fn new(transport: Transport) -> Self {
        Self {
            inner: ResourceClient::new(transport, "studysession"),
        }
    }

    pub async fn list(
        &self,
        session_type: Option<&str>,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Vec<StudySession>, TransportError> {
        self.inner
            .list(&[
                ("type", session_type.unwrap_or_default().to_string()),
                ("from", from.unwrap_or_default().to_string()),
                ("to", to.unwrap_or_default().to_string()),
            ])
            .await
    }

    pub async fn create(&self, session: &StudySession) -> Result<StudySession, TransportError> {
        self.inner.create(session).await
    }
}

/// Read-only aggregates computed by the backend. The dashboard payload is
/// typed; the per-domain breakdowns stay opaque JSON.
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    transport: Transport,
}

impl AnalyticsClient {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn dashboard(&self) -> Result<DashboardStats, TransportError> {
        self.transport.get("/analytics/dashboard", &[]).await
    }

    pub async fn dsa(&self) -> Result<serde_json::Value, TransportError> {
        self.transport.get("/analytics/dsa", &[]).await
    }

    pub async fn interviews(&self) -> Result<serde_json::Value, TransportError> {
        self.transport.get("/analytics/interviews", &[]).await
    }

    pub async fn weak_areas(&self) -> Result<serde_json::Value, TransportError> {
        self.transport.get("/analytics/weak-areas", &[]).await
    }
}
