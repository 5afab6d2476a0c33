//! Mock implementations of `PackageSource`

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::client::PackageSource;
use crate::error::FeedError;

const MOCK_ENDPOINT: &str = "mock://api/get_packages";

// ============================================================================
// Scripted source
// ============================================================================

#[derive(Debug, Clone)]
pub enum MockResponse {
    Body(String),
    Fail,
}

/// Replays a fixed list of responses; the last one repeats once exhausted.
pub struct StaticSource {
    responses: Vec<MockResponse>,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn sequence(responses: Vec<MockResponse>) -> Self {
        assert!(!responses.is_empty(), "StaticSource needs a response");
        Self {
            responses,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn body(body: &str) -> Self {
        Self::sequence(vec![MockResponse::Body(body.to_string())])
    }

    pub fn failing() -> Self {
        Self::sequence(vec![MockResponse::Fail])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PackageSource for StaticSource {
    async fn fetch(&self) -> Result<String, FeedError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let index = call.min(self.responses.len() - 1);

        match &self.responses[index] {
            MockResponse::Body(body) => Ok(body.clone()),
            MockResponse::Fail => Err(FeedError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            }),
        }
    }

    fn endpoint(&self) -> &str {
        MOCK_ENDPOINT
    }
}

// ============================================================================
// Gated source
// ============================================================================

/// Each fetch waits until the test releases its gate with a body.
///
/// Gates are handed out in fetch order: the first `fetch` call waits on the
/// first sender returned by `new`.
pub struct GatedSource {
    gates: Mutex<VecDeque<oneshot::Receiver<String>>>,
}

impl GatedSource {
    pub fn new(count: usize) -> (Self, Vec<oneshot::Sender<String>>) {
        let mut senders = Vec::with_capacity(count);
        let mut receivers = VecDeque::with_capacity(count);
        for _ in 0..count {
            let (tx, rx) = oneshot::channel();
            senders.push(tx);
            receivers.push_back(rx);
        }

        (
            Self {
                gates: Mutex::new(receivers),
            },
            senders,
        )
    }
}

#[async_trait]
impl PackageSource for GatedSource {
    async fn fetch(&self) -> Result<String, FeedError> {
        let gate = self.gates.lock().unwrap().pop_front();
        let Some(gate) = gate else {
            return Err(FeedError::Api {
                status: 503,
                message: "no gate left".to_string(),
            });
        };

        gate.await.map_err(|_| FeedError::Api {
            status: 503,
            message: "gate dropped".to_string(),
        })
    }

    fn endpoint(&self) -> &str {
        MOCK_ENDPOINT
    }
}
