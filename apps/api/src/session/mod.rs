//! Application session: the Idle → Generating → (Viewing | Error) → Idle
//! state machine and the single in-memory document slot.
//!
//! Submission flips the state to Generating under the lock before the network
//! call is spawned, so a second submission is refused until the first resolves.
//! The document is swapped in whole on success and only dropped on reset.

pub mod handlers;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::generation::generator::{CurriculumGenerator, GenerationError};
use crate::models::{CurriculumSeries, GenerationRequest};

/// The only failure text a user ever sees.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong while crafting your series. \
    Please check your connection and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Idle,
    Generating,
    Viewing,
    Error,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("a generation is already in progress")]
    InProgress,

    #[error("session must be reset before a new generation")]
    NeedsReset,

    #[error("no curriculum document is available")]
    NoDocument,
}

/// A finished document together with the time it was produced.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub series: Arc<CurriculumSeries>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub generation_id: Option<Uuid>,
    pub error: Option<String>,
    pub series: Option<Arc<CurriculumSeries>>,
    pub generated_at: Option<DateTime<Utc>>,
}

#[derive(Debug)]
pub struct Session {
    status: SessionStatus,
    generation_id: Option<Uuid>,
    document: Option<GeneratedDocument>,
    error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            status: SessionStatus::Idle,
            generation_id: None,
            document: None,
            error: None,
        }
    }
}

impl Session {
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn document(&self) -> Option<&GeneratedDocument> {
        self.document.as_ref()
    }

    /// Idle → Generating. Any other state refuses the submission.
    pub fn begin(&mut self) -> Result<Uuid, SessionError> {
        match self.status {
            SessionStatus::Idle => {}
            SessionStatus::Generating => return Err(SessionError::InProgress),
            SessionStatus::Viewing | SessionStatus::Error => {
                return Err(SessionError::NeedsReset)
            }
        }
        let id = Uuid::new_v4();
        self.status = SessionStatus::Generating;
        self.generation_id = Some(id);
        self.document = None;
        self.error = None;
        Ok(id)
    }

    /// Generating → Viewing | Error. Results for a stale generation are dropped.
    pub fn complete(
        &mut self,
        id: Uuid,
        result: Result<CurriculumSeries, GenerationError>,
    ) -> SessionStatus {
        if self.status != SessionStatus::Generating || self.generation_id != Some(id) {
            warn!("Discarding result of stale generation {id}");
            return self.status;
        }

        match result {
            Ok(series) => {
                self.document = Some(GeneratedDocument {
                    series: Arc::new(series),
                    generated_at: Utc::now(),
                });
                self.status = SessionStatus::Viewing;
            }
            Err(e) => {
                error!("Generation {id} failed: {e}");
                self.document = None;
                self.error = Some(GENERIC_FAILURE_MESSAGE.to_string());
                self.status = SessionStatus::Error;
            }
        }
        self.status
    }

    /// Viewing | Error | Idle → Idle. Refused while a generation is outstanding.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if self.status == SessionStatus::Generating {
            return Err(SessionError::InProgress);
        }
        *self = Session::default();
        Ok(())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.status,
            generation_id: self.generation_id,
            error: self.error.clone(),
            series: self.document.as_ref().map(|d| Arc::clone(&d.series)),
            generated_at: self.document.as_ref().map(|d| d.generated_at),
        }
    }
}

/// Returned from `SessionHandle::submit`. The task resolves once the session
/// has left Generating.
pub struct Submission {
    pub snapshot: SessionSnapshot,
    pub task: JoinHandle<()>,
}

/// Shared handle to the session plus the generator it drives.
#[derive(Clone)]
pub struct SessionHandle {
    session: Arc<Mutex<Session>>,
    generator: Arc<dyn CurriculumGenerator>,
}

impl SessionHandle {
    pub fn new(generator: Arc<dyn CurriculumGenerator>) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::default())),
            generator,
        }
    }

    /// Transitions to Generating, then runs the generator in the background.
    pub async fn submit(&self, request: GenerationRequest) -> Result<Submission, SessionError> {
        let (id, snapshot) = {
            let mut session = self.session.lock().await;
            let id = session.begin()?;
            (id, session.snapshot())
        };
        info!("Generation {id} started for topic {:?}", request.topic);

        let session = Arc::clone(&self.session);
        let generator = Arc::clone(&self.generator);
        let task = tokio::spawn(async move {
            let result = generator.generate(&request).await;
            let status = session.lock().await.complete(id, result);
            info!("Generation {id} finished: {status:?}");
        });

        Ok(Submission { snapshot, task })
    }

    pub async fn reset(&self) -> Result<SessionSnapshot, SessionError> {
        let mut session = self.session.lock().await;
        session.reset()?;
        Ok(session.snapshot())
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }

    /// The current document, available only while Viewing.
    pub async fn document(&self) -> Result<GeneratedDocument, SessionError> {
        let session = self.session.lock().await;
        match (session.status(), session.document()) {
            (SessionStatus::Viewing, Some(doc)) => Ok(doc.clone()),
            _ => Err(SessionError::NoDocument),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::llm_client::LlmError;
    use crate::models::curriculum::fixtures;
    use async_trait::async_trait;
    use tokio::sync::Notify;

    /// Deterministic generator: returns `request.duration` weeks, or fails when `fail` is set.
    /// When `gate` is present, waits for a notification before resolving.
    pub struct FakeGenerator {
        pub fail: bool,
        pub gate: Option<Arc<Notify>>,
    }

    impl FakeGenerator {
        pub fn succeeding() -> Self {
            Self {
                fail: false,
                gate: None,
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                gate: None,
            }
        }

        pub fn gated(gate: Arc<Notify>) -> Self {
            Self {
                fail: false,
                gate: Some(gate),
            }
        }
    }

    #[async_trait]
    impl CurriculumGenerator for FakeGenerator {
        async fn generate(
            &self,
            request: &GenerationRequest,
        ) -> Result<CurriculumSeries, GenerationError> {
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self.fail {
                return Err(GenerationError::Llm(LlmError::Api {
                    status: 503,
                    message: "network unreachable".to_string(),
                }));
            }
            Ok(fixtures::series(request.duration as usize))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeGenerator;
    use super::*;
    use crate::models::Audience;
    use tokio::sync::Notify;

    fn request() -> GenerationRequest {
        GenerationRequest {
            topic: "The Parables of Jesus".to_string(),
            audience: Audience::HighSchool,
            duration: 4,
            tone: "Conversational & Deep".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_enters_generating_before_call_resolves() {
        let gate = Arc::new(Notify::new());
        let handle = SessionHandle::new(Arc::new(FakeGenerator::gated(Arc::clone(&gate))));

        let submission = handle.submit(request()).await.unwrap();
        assert_eq!(submission.snapshot.status, SessionStatus::Generating);
        assert_eq!(handle.snapshot().await.status, SessionStatus::Generating);

        // Second submission is refused while the first is outstanding.
        assert_eq!(
            handle.submit(request()).await.err(),
            Some(SessionError::InProgress)
        );

        gate.notify_one();
        submission.task.await.unwrap();
        assert_eq!(handle.snapshot().await.status, SessionStatus::Viewing);
    }

    #[tokio::test]
    async fn test_success_retains_document() {
        let handle = SessionHandle::new(Arc::new(FakeGenerator::succeeding()));
        handle.submit(request()).await.unwrap().task.await.unwrap();

        let snapshot = handle.snapshot().await;
        assert_eq!(snapshot.status, SessionStatus::Viewing);
        assert!(snapshot.error.is_none());
        assert_eq!(snapshot.series.unwrap().weeks.len(), 4);
        assert!(handle.document().await.is_ok());
    }

    #[tokio::test]
    async fn test_failure_enters_error_without_document() {
        let handle = SessionHandle::new(Arc::new(FakeGenerator::failing()));
        handle.submit(request()).await.unwrap().task.await.unwrap();

        let snapshot = handle.snapshot().await;
        assert_eq!(snapshot.status, SessionStatus::Error);
        assert!(snapshot.series.is_none());
        assert_eq!(snapshot.error.as_deref(), Some(GENERIC_FAILURE_MESSAGE));
        assert_eq!(
            handle.document().await.err(),
            Some(SessionError::NoDocument)
        );
    }

    #[tokio::test]
    async fn test_reset_is_idempotent_from_viewing_and_error() {
        for generator in [FakeGenerator::succeeding(), FakeGenerator::failing()] {
            let handle = SessionHandle::new(Arc::new(generator));
            handle.submit(request()).await.unwrap().task.await.unwrap();

            for _ in 0..3 {
                let snapshot = handle.reset().await.unwrap();
                assert_eq!(snapshot.status, SessionStatus::Idle);
                assert!(snapshot.series.is_none());
                assert!(snapshot.error.is_none());
                assert!(snapshot.generation_id.is_none());
            }
        }
    }

    #[tokio::test]
    async fn test_reset_refused_while_generating() {
        let gate = Arc::new(Notify::new());
        let handle = SessionHandle::new(Arc::new(FakeGenerator::gated(Arc::clone(&gate))));
        let submission = handle.submit(request()).await.unwrap();

        assert_eq!(handle.reset().await.err(), Some(SessionError::InProgress));

        gate.notify_one();
        submission.task.await.unwrap();
        assert!(handle.reset().await.is_ok());
    }

    #[tokio::test]
    async fn test_can_submit_again_after_reset() {
        let handle = SessionHandle::new(Arc::new(FakeGenerator::failing()));
        handle.submit(request()).await.unwrap().task.await.unwrap();
        assert_eq!(
            handle.submit(request()).await.err(),
            Some(SessionError::NeedsReset)
        );

        handle.reset().await.unwrap();
        assert!(handle.submit(request()).await.is_ok());
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut session = Session::default();
        let id = session.begin().unwrap();
        session.complete(Uuid::new_v4(), Err(GenerationError::Rejected("x".into())));
        assert_eq!(session.status(), SessionStatus::Generating);

        session.complete(id, Err(GenerationError::Rejected("x".into())));
        assert_eq!(session.status(), SessionStatus::Error);
    }
}
