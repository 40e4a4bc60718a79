/* src/server/adapter/axum/src/lib.rs */

mod error;
mod extract;
mod middleware;
mod request;

/// Re-export the locale-router core for convenience
pub use locale_router;

pub use error::AxumError;
pub use extract::CurrentLocale;
pub use request::HttpRequestView;

use locale_router::LocaleRouter;

/// Extension trait that puts a `LocaleRouter` in front of an Axum router.
pub trait IntoLocalizedRouter {
  /// Wrap `self` so every request is routed by locale first. Rewrites change
  /// the URI before `self` matches its routes; redirects never reach it.
  fn localized(self, router: LocaleRouter) -> axum::Router;

  fn serve(
    self,
    router: LocaleRouter,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoLocalizedRouter for axum::Router {
  fn localized(self, router: LocaleRouter) -> axum::Router {
    // The app sits behind a fallback so the layer sees requests before route matching.
    axum::Router::new()
      .fallback_service(self)
      .layer(axum::middleware::from_fn_with_state(router, middleware::route_request))
  }

  async fn serve(self, router: LocaleRouter, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let app = self.localized(router);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(target: "locale_router", "listening on http://localhost:{}", local_addr.port());
    axum::serve(listener, app).await?;
    Ok(())
  }
}
