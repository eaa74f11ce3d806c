use std::sync::Arc;

use tracing::{info, instrument};

use models::project_manage::{Entity, Model, NewProject};

use crate::errors::ServiceError;
use crate::repository::Repository;

/// Project create/list. Holds no state of its own; storage is the repository.
pub struct ProjectManageService<R: ?Sized> {
    repo: Arc<R>,
}

impl<R> ProjectManageService<R>
where
    R: Repository<Entity> + ?Sized,
{
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Persist a new project and return it with its generated id.
    #[instrument(skip(self, input), fields(name = %input.name, product = input.product))]
    pub async fn create_project(&self, input: NewProject) -> Result<Model, ServiceError> {
        let created = self.repo.save(input.into_active_model()).await?;
        info!(id = created.id, "project created");
        Ok(created)
    }

    /// Every stored project, as an owned list.
    pub async fn get_projects(&self) -> Result<Vec<Model>, ServiceError> {
        self.repo.find_all().await
    }
}
