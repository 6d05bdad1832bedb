//! Screen lifetime tracking
//!
//! Every screen owns a [`ViewLifetime`]. Asynchronous work started by the
//! screen runs through [`ViewLifetime::guard`], which resolves to
//! [`Unmounted`] once the screen is gone so that late results are never
//! applied to a dead view.

use std::future::Future;

use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// The owning screen was closed before the operation completed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("view unmounted")]
pub struct Unmounted;

#[derive(Debug, Clone, Default)]
pub struct ViewLifetime {
    token: CancellationToken,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the screen as gone. Pending guarded operations resolve to `Unmounted`.
    pub fn unmount(&self) {
        self.token.cancel();
    }

    pub fn is_mounted(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Run `fut` for as long as the screen is mounted.
    ///
    /// The token is checked again after completion, so a result that races
    /// with `unmount` is still discarded.
    pub async fn guard<F, T>(&self, fut: F) -> Result<T, Unmounted>
    where
        F: Future<Output = T>,
    {
        let output = tokio::select! {
            _ = self.token.cancelled() => None,
            output = fut => Some(output),
        };

        match output {
            Some(output) if self.is_mounted() => Ok(output),
            _ => {
                debug!("Dropping result for unmounted view");
                Err(Unmounted)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn guard_passes_result_while_mounted() {
        let lifetime = ViewLifetime::new();
        assert_eq!(lifetime.guard(async { 7 }).await, Ok(7));
    }

    #[tokio::test]
    async fn guard_drops_result_after_unmount() {
        let lifetime = ViewLifetime::new();
        lifetime.unmount();
        assert_eq!(lifetime.guard(async { 7 }).await, Err(Unmounted));
        assert!(!lifetime.is_mounted());
    }

    #[tokio::test]
    async fn unmount_interrupts_pending_operation() {
        let lifetime = ViewLifetime::new();
        let clone = lifetime.clone();

        let pending = tokio::spawn(async move {
            clone
                .guard(std::future::pending::<()>())
                .await
        });
        tokio::task::yield_now().await;
        lifetime.unmount();

        assert_eq!(pending.await.unwrap(), Err(Unmounted));
    }
}
