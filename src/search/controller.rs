use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, PoisonError, RwLock,
};

use tokio::{sync::watch, task::JoinHandle};
use uuid::Uuid;

use crate::{error::AppError, services::RecommendationService};

use super::state::{SearchOutcome, SearchState};

/// Owns the query text and the visible search state
///
/// Cloning yields another handle to the same controller. The UI writes the
/// query with [`set_query`](Self::set_query), triggers requests with
/// [`submit_search`](Self::submit_search) and only ever reads state back.
///
/// Every dispatched request is tagged with a sequence number. A response is
/// applied only if its number is still the latest issued, so the state always
/// reflects the most recently submitted query regardless of arrival order.
#[derive(Clone)]
pub struct SearchController {
    inner: Arc<ControllerInner>,
}

struct ControllerInner {
    service: Arc<dyn RecommendationService>,
    user_id: String,
    query: RwLock<String>,
    state: watch::Sender<SearchState>,
    latest_seq: AtomicU64,
}

impl SearchController {
    pub fn new(service: Arc<dyn RecommendationService>, user_id: impl Into<String>) -> Self {
        let (state, _) = watch::channel(SearchState::Idle);

        Self {
            inner: Arc::new(ControllerInner {
                service,
                user_id: user_id.into(),
                query: RwLock::new(String::new()),
                state,
                latest_seq: AtomicU64::new(0),
            }),
        }
    }

    /// Replaces the query text. Never touches the network.
    pub fn set_query(&self, text: impl Into<String>) {
        let mut query = self
            .inner
            .query
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *query = text.into();
    }

    /// Starts a search for the current query
    ///
    /// A blank query is ignored and leaves the state untouched. Otherwise the
    /// state is `Loading` by the time this returns and the request runs on a
    /// spawned task; the handle is returned for callers that want to await it.
    /// Must be called from within a tokio runtime.
    pub fn submit_search(&self) -> Option<JoinHandle<()>> {
        let pending = self.begin_search()?;

        tracing::info!(
            query = %pending.query,
            seq = pending.seq,
            request_id = %pending.request_id,
            service = pending.service_name(),
            "Search submitted"
        );

        Some(tokio::spawn(pending.run()))
    }

    pub fn current_state(&self) -> SearchState {
        self.inner.state.borrow().clone()
    }

    pub fn current_query(&self) -> String {
        self.inner
            .query
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().is_loading()
    }

    /// Receiver notified on every state transition
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.inner.state.subscribe()
    }

    /// Waits until no search is loading and returns the resulting state
    pub async fn settled(&self) -> SearchState {
        let mut rx = self.subscribe();
        let settled = rx
            .wait_for(|state| !state.is_loading())
            .await
            .map(|state| state.clone());

        // The sender lives as long as `self`, so the channel cannot close here.
        settled.unwrap_or_else(|_| self.current_state())
    }

    fn begin_search(&self) -> Option<PendingSearch> {
        let query = self.current_query().trim().to_string();
        if query.is_empty() {
            tracing::debug!("Ignoring search with empty query");
            return None;
        }

        let mut seq = 0;
        self.inner.state.send_modify(|state| {
            seq = self.inner.latest_seq.fetch_add(1, Ordering::SeqCst) + 1;
            *state = SearchState::Loading;
        });

        Some(PendingSearch {
            controller: self.clone(),
            seq,
            request_id: Uuid::new_v4(),
            query,
            resolved: false,
        })
    }

    /// Applies `next` if `seq` is still the latest issued request
    ///
    /// The comparison runs under the channel's write lock, the same lock
    /// `begin_search` takes to issue a number, so a stale result can never
    /// land after a newer request has switched the state to `Loading`.
    fn resolve(&self, seq: u64, next: SearchState) -> bool {
        let latest_seq = &self.inner.latest_seq;
        self.inner.state.send_if_modified(|state| {
            if latest_seq.load(Ordering::SeqCst) != seq {
                return false;
            }
            *state = next;
            true
        })
    }
}

/// A dispatched request that has not resolved yet
///
/// Dropping it unresolved (the task panicked or was aborted) resolves it as a
/// failure so `Loading` never outlives its request.
struct PendingSearch {
    controller: SearchController,
    seq: u64,
    request_id: Uuid,
    query: String,
    resolved: bool,
}

impl PendingSearch {
    async fn run(mut self) {
        let service = Arc::clone(&self.controller.inner.service);
        let result = service
            .recommend(&self.query, &self.controller.inner.user_id)
            .await;

        if let Err(e) = &result {
            self.log_failure(e);
        }

        self.finish(SearchOutcome::from_result(result));
    }

    fn service_name(&self) -> &'static str {
        self.controller.inner.service.name()
    }

    fn log_failure(&self, error: &AppError) {
        tracing::error!(
            error = %error,
            query = %self.query,
            seq = self.seq,
            request_id = %self.request_id,
            service = self.service_name(),
            "Error fetching recommendations"
        );
    }

    fn finish(&mut self, outcome: SearchOutcome) {
        self.resolved = true;
        let next = SearchState::from(outcome);
        let summary = next.to_string();

        if self.controller.resolve(self.seq, next) {
            tracing::info!(
                query = %self.query,
                seq = self.seq,
                request_id = %self.request_id,
                service = self.service_name(),
                state = %summary,
                "Search resolved"
            );
        } else {
            tracing::debug!(
                query = %self.query,
                seq = self.seq,
                request_id = %self.request_id,
                "Discarding stale search result"
            );
        }
    }
}

impl Drop for PendingSearch {
    fn drop(&mut self) {
        if !self.resolved {
            let error = AppError::Internal("search task ended without a response".to_string());
            self.log_failure(&error);
            self.finish(SearchOutcome::from_result(Err(error)));
        }
    }
}
