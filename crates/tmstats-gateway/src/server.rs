//! Stats interface: owns the HTTP server task for its whole lifetime.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use tmstats_core::error::{Result, StatsError};

use crate::{app_state::AppState, router};

pub struct StatsInterface {
    local_addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<std::io::Result<()>>,
}

impl StatsInterface {
    /// Bind `listen` and start serving. A bind failure is returned; the
    /// caller decides whether to abort.
    pub async fn start(listen: SocketAddr, state: AppState) -> Result<Self> {
        let listener = TcpListener::bind(listen)
            .await
            .map_err(|e| StatsError::Internal(format!("bind {listen} failed: {e}")))?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| StatsError::Internal(format!("local_addr failed: {e}")))?;

        let app = router::build_router(state);
        let (tx, rx) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await
        });

        tracing::info!(%local_addr, "stats interface listening");
        Ok(Self {
            local_addr,
            shutdown: Some(tx),
            task,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting, let in-flight requests finish, release the listener.
    pub async fn shutdown(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        let res = (&mut self.task)
            .await
            .map_err(|e| StatsError::Internal(format!("stats server task failed: {e}")))?;
        res.map_err(|e| StatsError::Internal(format!("stats server failed: {e}")))?;
        tracing::info!(local_addr = %self.local_addr, "stats interface stopped");
        Ok(())
    }
}

impl Drop for StatsInterface {
    fn drop(&mut self) {
        self.task.abort();
    }
}
