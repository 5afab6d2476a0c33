//! Feed renderer
//!
//! Fetches event records and reconciles them into a container. The body is
//! fully decoded before the container is touched, so a failed refresh leaves
//! the previous entries in place.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::client::PackageSource;
use crate::container::{Container, ListEntry};
use crate::error::FeedError;
use crate::payload::{parse_payload, FeedPayload};

/// What a single refresh did to the container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Container replaced with this many entries
    Rendered(usize),
    /// Empty payload, container untouched
    Empty,
    /// A newer response was already applied, container untouched
    Stale,
    /// Transport or decode failure (logged), container untouched
    Failed,
}

/// Fetch once from `source` and replace the contents of `container`.
///
/// Errors are logged and reported as `RefreshOutcome::Failed`.
/// Concurrent calls are not ordered against each other; use `FeedRenderer`
/// when responses can overlap.
pub async fn refresh_feed<S, C>(source: &S, container: &mut C) -> RefreshOutcome
where
    S: PackageSource + ?Sized,
    C: Container + ?Sized,
{
    match fetch_payload(source).await {
        Ok(payload) => apply_payload(payload, container),
        Err(e) => {
            tracing::error!(endpoint = source.endpoint(), error = %e, "Error fetching data");
            RefreshOutcome::Failed
        }
    }
}

async fn fetch_payload<S>(source: &S) -> Result<FeedPayload, FeedError>
where
    S: PackageSource + ?Sized,
{
    let body = source.fetch().await?;
    tracing::debug!(endpoint = source.endpoint(), %body, "Feed response");
    parse_payload(&body)
}

fn apply_payload<C>(payload: FeedPayload, container: &mut C) -> RefreshOutcome
where
    C: Container + ?Sized,
{
    match payload {
        FeedPayload::Empty => {
            tracing::debug!("Empty feed, keeping current entries");
            RefreshOutcome::Empty
        }
        FeedPayload::Records(records) => {
            container.clear();
            for record in &records {
                container.append(ListEntry::for_record(record));
            }
            tracing::info!(count = records.len(), "Rendered feed");
            RefreshOutcome::Rendered(records.len())
        }
    }
}

struct RenderState<C> {
    container: C,
    /// Token of the newest response applied so far
    applied: u64,
}

/// Renderer that owns its container and drops out-of-order responses.
///
/// Every `refresh` takes a request token. A response whose token is older than
/// the last applied one is discarded, so the most recently issued request that
/// completes always wins.
pub struct FeedRenderer<S, C> {
    source: S,
    state: Mutex<RenderState<C>>,
    issued: AtomicU64,
}

impl<S, C> FeedRenderer<S, C>
where
    S: PackageSource,
    C: Container,
{
    pub fn new(source: S, container: C) -> Self {
        Self {
            source,
            state: Mutex::new(RenderState {
                container,
                applied: 0,
            }),
            issued: AtomicU64::new(0),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn refresh(&self) -> RefreshOutcome {
        let token = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        let payload = match fetch_payload(&self.source).await {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(
                    token,
                    endpoint = self.source.endpoint(),
                    error = %e,
                    "Error fetching data"
                );
                return RefreshOutcome::Failed;
            }
        };

        let mut state = self.state.lock().await;
        if token < state.applied {
            tracing::debug!(token, applied = state.applied, "Discarding stale feed response");
            return RefreshOutcome::Stale;
        }
        state.applied = token;

        apply_payload(payload, &mut state.container)
    }

    /// Run `f` against the current container
    pub async fn with_container<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        let state = self.state.lock().await;
        f(&state.container)
    }

    /// Copy of the current entries
    pub async fn snapshot(&self) -> Vec<ListEntry> {
        self.with_container(|c| c.entries().to_vec()).await
    }
}
