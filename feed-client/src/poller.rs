//! Periodic refresh loop

use std::future::Future;
use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};

use crate::client::PackageSource;
use crate::container::{Container, ListEntry};
use crate::renderer::{FeedRenderer, RefreshOutcome};

/// Refresh immediately, then every `period`, until `shutdown` resolves.
///
/// `on_render` receives the container entries after each refresh that replaced
/// them. A refresh still in flight when `shutdown` resolves is dropped.
/// Returns the number of refreshes issued.
pub async fn run_poller<S, C, F>(
    renderer: &FeedRenderer<S, C>,
    period: Duration,
    shutdown: impl Future<Output = ()>,
    mut on_render: F,
) -> u64
where
    S: PackageSource,
    C: Container,
    F: FnMut(&[ListEntry]),
{
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    let mut refreshes = 0u64;
    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => break,
            _ = ticker.tick() => {}
        }

        refreshes += 1;
        // A hung request must not outlive shutdown
        let outcome = tokio::select! {
            biased;
            _ = &mut shutdown => break,
            outcome = renderer.refresh() => outcome,
        };

        if let RefreshOutcome::Rendered(_) = outcome {
            renderer.with_container(|c| on_render(c.entries())).await;
        }
    }

    tracing::info!(refreshes, "Feed poller stopped");
    refreshes
}
