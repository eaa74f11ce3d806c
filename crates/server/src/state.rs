use std::sync::Arc;

use models::project_manage::Entity as Project;
use sea_orm::DatabaseConnection;
use service::copywrite::{CopywriteService, StubCopywriteService};
use service::project_manage::ProjectManageService;
use service::repository::{MemoryProjectRepository, Repository, SeaOrmRepository};

pub type ProjectService = ProjectManageService<dyn Repository<Project>>;

/// Shared handler state; cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<ProjectService>,
    pub copywrite: Arc<dyn CopywriteService>,
}

impl AppState {
    pub fn new(repo: Arc<dyn Repository<Project>>, copywrite: Arc<dyn CopywriteService>) -> Self {
        Self { projects: Arc::new(ProjectManageService::new(repo)), copywrite }
    }

    /// Projects kept in process memory; lost on restart.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryProjectRepository::new()), Arc::new(StubCopywriteService))
    }

    /// Projects persisted through SeaORM.
    pub fn with_database(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmRepository::<Project>::new(db)),
            Arc::new(StubCopywriteService),
        )
    }
}
