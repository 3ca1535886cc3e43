use crate::error::{VerifyError, VerifyResult};
use async_trait::async_trait;
use axum::Router;
use std::net::{Ipv4Addr, SocketAddr};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A request handler that can bind to a TCP port and start accepting HTTP connections
#[async_trait]
pub trait Listen: Sized + Send + 'static {
    /// Bind to `port` on the loopback interface (`0` asks the OS for an ephemeral port).
    ///
    /// Resolves once the listener is bound, so requests issued afterwards are accepted.
    async fn listen(self, port: u16) -> VerifyResult<ServerHandle>;
}

#[async_trait]
impl Listen for Router {
    async fn listen(self, port: u16) -> VerifyResult<ServerHandle> {
        let listener =
            tokio::net::TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, port))).await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            axum::serve(listener, self)
                .with_graceful_shutdown(async move {
                    // Resolves on send or on drop of the sender
                    let _ = shutdown_rx.await;
                })
                .await
        });

        tracing::info!("Handler listening on {}", addr);

        Ok(ServerHandle::new(addr, shutdown_tx, task))
    }
}

/// Owned listener started by [`Listen::listen`]
///
/// Dropping the handle signals shutdown without waiting for it.
#[derive(Debug)]
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<std::io::Result<()>>>,
}

impl ServerHandle {
    /// Wrap a server task that stops once `shutdown` fires or is dropped
    pub fn new(
        addr: SocketAddr,
        shutdown: oneshot::Sender<()>,
        task: JoinHandle<std::io::Result<()>>,
    ) -> Self {
        Self {
            addr,
            shutdown: Some(shutdown),
            task: Some(task),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Stop accepting connections and wait until the server has shut down
    pub async fn close(mut self) {
        self.signal_shutdown();

        if let Some(task) = self.task.take() {
            match task.await {
                Ok(Ok(())) => tracing::debug!("Listener on {} closed", self.addr),
                Ok(Err(e)) => tracing::warn!("Listener on {} closed with error: {}", self.addr, e),
                Err(e) => tracing::warn!("Listener task on {} failed: {}", self.addr, e),
            }
        }
    }

    /// Stop accepting connections without waiting for shutdown to finish
    pub fn close_detached(mut self) {
        self.signal_shutdown();
        tracing::debug!("Listener on {} signalled to close", self.addr);
    }

    fn signal_shutdown(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            // The server may already be gone
            let _ = tx.send(());
        }
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        self.signal_shutdown();
    }
}

/// Check that the application actually supplied a handler
pub fn resolve_handler<H: Listen>(entry: Option<H>) -> VerifyResult<H> {
    entry.ok_or(VerifyError::ExportInvalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    fn ping_router() -> Router {
        Router::new().route("/ping", get(|| async { "pong" }))
    }

    #[test]
    fn test_resolve_handler_missing() {
        let result = resolve_handler::<Router>(None);
        assert!(matches!(result, Err(VerifyError::ExportInvalid)));
    }

    #[test]
    fn test_resolve_handler_present() {
        assert!(resolve_handler(Some(ping_router())).is_ok());
    }

    #[tokio::test]
    async fn test_listen_assigns_ephemeral_port() {
        let server = ping_router().listen(0).await.unwrap();

        assert_ne!(server.port(), 0);
        assert!(server.addr().ip().is_loopback());

        server.close().await;
    }

    #[tokio::test]
    async fn test_close_releases_port() {
        let server = ping_router().listen(0).await.unwrap();
        let addr = server.addr();

        assert!(tokio::net::TcpStream::connect(addr).await.is_ok());

        server.close().await;

        assert!(tokio::net::TcpStream::connect(addr).await.is_err());
    }

    #[tokio::test]
    async fn test_listen_on_taken_port_fails() {
        let server = ping_router().listen(0).await.unwrap();

        let result = ping_router().listen(server.port()).await;
        assert!(matches!(result, Err(VerifyError::Bind(_))));

        server.close().await;
    }
}
