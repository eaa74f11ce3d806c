use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use sea_orm::ActiveValue;
use tracing::debug;

use models::project_manage::{ActiveModel, Entity, Model};

use super::Repository;
use crate::errors::ServiceError;

/// Process-lifetime project store used when no database is configured.
///
/// Records keep insertion order and receive ids `1, 2, 3, ...`. Reads return
/// owned snapshots, so callers never alias the stored rows.
#[derive(Debug, Default)]
pub struct MemoryProjectRepository {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    rows: Vec<Model>,
    last_id: i32,
}

impl MemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, ServiceError> {
        self.state
            .lock()
            .map_err(|_| ServiceError::Db("in-memory project store poisoned".into()))
    }
}

fn present<V: Into<sea_orm::Value>>(v: ActiveValue<V>) -> Option<V> {
    match v {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Some(v),
        ActiveValue::NotSet => None,
    }
}

#[async_trait]
impl Repository<Entity> for MemoryProjectRepository {
    async fn save(&self, model: ActiveModel) -> Result<Model, ServiceError> {
        let ActiveModel { id, name, product } = model;
        let mut state = self.lock()?;

        if let Some(id) = present(id) {
            // Same contract as an UPDATE by primary key: the row must exist.
            let row = state
                .rows
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| ServiceError::not_found("project"))?;
            if let Some(name) = present(name) { row.name = name; }
            if let Some(product) = present(product) { row.product = product; }
            debug!(id, "updated in-memory project");
            return Ok(row.clone());
        }

        let name = present(name).ok_or_else(|| ServiceError::Validation("name is required".into()))?;
        let product =
            present(product).ok_or_else(|| ServiceError::Validation("product is required".into()))?;
        let id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| ServiceError::Conflict("project id sequence exhausted".into()))?;
        state.last_id = id;
        let row = Model { id, name, product };
        state.rows.push(row.clone());
        debug!(id = row.id, "inserted in-memory project");
        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<Model>, ServiceError> {
        Ok(self.lock()?.rows.clone())
    }
}
