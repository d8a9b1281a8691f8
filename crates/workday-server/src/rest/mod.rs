//! REST API routes (Axum).

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use workday_engine::HolidayProvider;

mod handlers;

pub use handlers::{CalculateParams, CalculateResponse};

/// Shared state: the holiday provider, injected at the composition root.
pub struct AppState<P> {
    pub provider: Arc<P>,
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}

/// Create the REST API router.
pub fn create_router<P>(state: AppState<P>) -> Router
where
    P: HolidayProvider + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(handlers::health))
        .route("/calculate", get(handlers::calculate_business_date::<P>))
        .with_state(state)
}
