use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Shared application state injected into every handler.
///
/// Wiring is explicit constructor passing — Store into Service into
/// handlers — with no global registry. The pool is kept alongside the
/// service only for the health probe.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    pub db: SqlitePool,
}

impl AppState {
    /// Builds the Store → Service → State graph on top of a pool.
    pub fn new(pool: SqlitePool) -> Self {
        let link_repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone())));
        let link_service = Arc::new(LinkService::new(link_repository));

        Self {
            link_service,
            db: pool,
        }
    }
}
