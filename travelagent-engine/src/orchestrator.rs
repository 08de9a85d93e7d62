use crate::session::RequestSession;
use crate::traits::TripTransport;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;
use travelagent_core::error::TransportError;
use travelagent_core::pipeline::{NodeStatus, PipelineStage};

/// What `submit` did. Informational only: the session is the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Message was empty after trimming; nothing changed.
    Skipped,
    /// A request was already in flight; nothing changed.
    Busy,
    Completed,
    Failed,
}

/// Drives one request at a time through the three-stage pipeline and owns
/// the session the presentation layer reads.
///
/// Clones share the same session.
#[derive(Clone)]
pub struct RequestOrchestrator {
    session: Arc<Mutex<RequestSession>>,
    transport: Arc<dyn TripTransport>,
}

/// Settles the session as failed if the in-flight call never gets to apply
/// its result: the submit future was dropped or the transport panicked.
struct InFlight {
    session: Arc<Mutex<RequestSession>>,
    started: Instant,
    armed: bool,
}

impl InFlight {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let err = TransportError::interrupted();
        log::warn!("trip request abandoned while in flight: {err}");
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        session.fail(&err, self.started.elapsed());
    }
}

impl RequestOrchestrator {
    pub fn new(transport: Arc<dyn TripTransport>, message: impl Into<String>) -> Self {
        Self {
            session: Arc::new(Mutex::new(RequestSession::new(message))),
            transport,
        }
    }

    // Every mutation leaves the session consistent, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, RequestSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> RequestSession {
        self.lock().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().is_loading
    }

    /// Edits the request text. An in-flight call keeps the message it was started with.
    pub fn set_message(&self, message: impl Into<String>) {
        self.lock().message = message.into();
    }

    pub fn stage_status(&self, stage: PipelineStage) -> NodeStatus {
        self.lock().stage_status(stage)
    }

    pub fn stage_status_by_name(&self, name: &str) -> NodeStatus {
        self.lock().stage_status_by_name(name)
    }

    pub async fn submit(&self) -> SubmitOutcome {
        self.submit_with_hook(|_| {}).await
    }

    /// Same as `submit`, but calls `on_update` with a snapshot after the
    /// session enters the loading state and again once it settles.
    ///
    /// The hook runs on the submitting task and must be fast.
    pub async fn submit_with_hook<F>(&self, on_update: F) -> SubmitOutcome
    where
        F: Fn(&RequestSession),
    {
        let (message, started, snapshot) = {
            let mut session = self.lock();
            if session.message.trim().is_empty() {
                log::debug!("submit skipped: empty message");
                return SubmitOutcome::Skipped;
            }
            if session.is_loading {
                log::info!("submit ignored: a request is already in flight");
                return SubmitOutcome::Busy;
            }

            session.begin();
            (session.message.clone(), Instant::now(), session.clone())
        };
        let guard = InFlight {
            session: Arc::clone(&self.session),
            started,
            armed: true,
        };
        on_update(&snapshot);

        log::info!("sending trip request ({} chars)", message.chars().count());
        let result = self.transport.send_trip_request(&message).await;
        let elapsed = started.elapsed();

        let (outcome, snapshot) = {
            let mut session = self.lock();
            let outcome = match result {
                Ok(resp) => {
                    if let Some(order) = &resp.execution_order {
                        log::debug!("server execution order: {order:?}");
                    }
                    session.complete(resp, elapsed);
                    SubmitOutcome::Completed
                }
                Err(e) => {
                    log::warn!("trip request failed ({:?}): {e}", e.kind);
                    session.fail(&e, elapsed);
                    SubmitOutcome::Failed
                }
            };
            (outcome, session.clone())
        };
        guard.disarm();
        log::info!("{}", snapshot.status_line);
        on_update(&snapshot);

        outcome
    }
}
