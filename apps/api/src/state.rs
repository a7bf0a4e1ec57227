use crate::config::Config;
use crate::layout::PageConfig;
use crate::session::SessionHandle;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single application session and the generator it drives.
    pub session: SessionHandle,
    pub config: Config,
    /// Page geometry for the print layout estimate and stylesheet.
    pub page_config: PageConfig,
}
