//! Simulated email availability check.
//!
//! Stands in for a real registration backend: a fixed latency, then a
//! deterministic verdict. Addresses containing "taken" are reported as
//! unavailable.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Simulated network latency for the availability lookup.
pub const AVAILABILITY_CHECK_DELAY: Duration = Duration::from_millis(650);

fn is_available(email: &str) -> bool {
    !email.to_lowercase().contains("taken")
}

/// Checks whether an email address is available, after the simulated delay.
pub async fn check_email_availability(email: &str) -> bool {
    tokio::time::sleep(AVAILABILITY_CHECK_DELAY).await;
    is_available(email)
}

/// Channel-based variant for debounced callers.
///
/// Cancelling the token during the latency window (a newer keystroke
/// superseding this lookup) drops the check without sending a result.
pub async fn check_email_availability_tx(
    email: &str,
    token: CancellationToken,
    tx: mpsc::Sender<bool>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("availability check is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            return;
        }
        _ = tokio::time::sleep(AVAILABILITY_CHECK_DELAY) => {}
    }

    let available = is_available(email);

    if let Err(e) = tx.send(available).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send availability result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
