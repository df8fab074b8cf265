use reserve_core::reserve::service::ReserveService;

/// Shared application state passed to all handlers via Axum's State extractor.
pub struct AppState {
    /// Reserve tree built once from the user store at startup.
    pub reserve: ReserveService,
}
