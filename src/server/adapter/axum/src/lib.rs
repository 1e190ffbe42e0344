/* src/server/adapter/axum/src/lib.rs */

mod handler;

use flutterexpo_server::BridgeHandle;

/// Re-export flutterexpo-server core for convenience
pub use flutterexpo_server;

/// Extension trait that mounts a running dispatch loop on an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
  fn serve(self, addr: &str) -> impl std::future::Future<Output = std::io::Result<()>> + Send;
}

impl IntoAxumRouter for BridgeHandle {
  fn into_axum_router(self) -> axum::Router {
    handler::build_router(self)
  }

  async fn serve(self, addr: &str) -> std::io::Result<()> {
    let router = self.into_axum_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(%local_addr, "translator listening on ws://{local_addr}/ws");
    axum::serve(listener, router).await
  }
}
