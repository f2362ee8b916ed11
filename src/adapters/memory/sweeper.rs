use std::sync::Arc;
use std::time::Duration as StdDuration;

use tracing::info;

use crate::core::usecases::CentralAuthenticationService;

/// Background expiration sweeper: runs `sweep_expired` on a fixed interval
/// against whatever `CentralAuthenticationService` (and the
/// `SessionStorage`/`ExpirationPolicy` it was built with) the caller hands
/// in. Returns the `tokio::task::JoinHandle` so the caller can abort it on
/// shutdown.
pub fn spawn_sweeper(service: Arc<CentralAuthenticationService>, interval: StdDuration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            let removed = service.sweep_expired();
            if removed > 0 {
                info!(removed, "expiration sweep removed sessions");
            }
        }
    })
}
