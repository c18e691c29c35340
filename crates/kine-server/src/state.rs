use std::sync::Arc;

use kine_feedback::composer::FeedbackComposer;

/// Shared application state, injected into all route handlers via Axum state.
///
/// The case catalog is static data and needs no handle here.
#[derive(Clone)]
pub struct AppState {
    pub composer: Arc<FeedbackComposer>,
}

impl AppState {
    pub fn new(composer: FeedbackComposer) -> Self {
        Self {
            composer: Arc::new(composer),
        }
    }
}
