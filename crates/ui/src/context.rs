use std::sync::Arc;

use services::DatasetService;

pub trait UiApp: Send + Sync {
    fn app_title(&self) -> String;

    fn dataset_service(&self) -> Arc<DatasetService>;
}

#[derive(Clone)]
pub struct AppContext {
    app_title: String,
    dataset_service: Arc<DatasetService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_title: app.app_title(),
            dataset_service: app.dataset_service(),
        }
    }

    #[must_use]
    pub fn app_title(&self) -> &str {
        &self.app_title
    }

    #[must_use]
    pub fn dataset_service(&self) -> Arc<DatasetService> {
        Arc::clone(&self.dataset_service)
    }
}

// Provided by the composition root in `crates/app`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
