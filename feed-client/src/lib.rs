//! Oraculo feed client
//!
//! Fetches the detected-intrusion feed from the Oraculo API and renders it
//! into a list container, one entry per event record.
//! - `client`: the `PackageSource` port and its reqwest adapter
//! - `payload`: response decoding
//! - `container`: list entries and the in-memory container
//! - `renderer`: the refresh operation and the stale-response guard
//! - `poller`: periodic refresh

pub mod client;
pub mod config;
pub mod container;
pub mod error;
pub mod payload;
pub mod poller;
pub mod renderer;

#[cfg(test)]
mod test_utils;

pub use client::{HttpPackageSource, PackageSource};
pub use config::Config;
pub use container::{render_text, Container, ListEntry, MemoryContainer, CONTAINER_ID};
pub use error::{ConfigError, FeedError};
pub use payload::{parse_payload, EventRecord, FeedPayload};
pub use poller::run_poller;
pub use renderer::{refresh_feed, FeedRenderer, RefreshOutcome};
