use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use crate::error::{Result, SnippetError};

/// How long [`square_async`] waits before resolving.
pub const SQUARE_DELAY: Duration = Duration::from_millis(1000);

/// Resolves to `n * n` after [`SQUARE_DELAY`].
///
/// Non-positive input (zero and NaN included) fails right away with
/// [`SnippetError::NegativeNumber`]; no timer is started in that case.
pub async fn square_async(n: f64) -> Result<f64> {
    if n.is_nan() || n <= 0.0 {
        return Err(SnippetError::NegativeNumber);
    }

    debug!(n, delay_ms = SQUARE_DELAY.as_millis() as u64, "squaring after delay");
    sleep(SQUARE_DELAY).await;
    Ok(n * n)
}
