use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    TryIntoModel,
};

use super::Repository;
use crate::errors::ServiceError;

/// SeaORM-backed repository for any entity.
pub struct SeaOrmRepository<E> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaOrmRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, _entity: PhantomData }
    }
}

#[async_trait]
impl<E> Repository<E> for SeaOrmRepository<E>
where
    E: EntityTrait + 'static,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E>
        + ActiveModelBehavior
        + TryIntoModel<E::Model>
        + Send
        + 'static,
{
    async fn save(&self, model: E::ActiveModel) -> Result<E::Model, ServiceError> {
        let saved = model.save(&self.db).await?;
        Ok(saved.try_into_model()?)
    }

    async fn find_all(&self) -> Result<Vec<E::Model>, ServiceError> {
        Ok(E::find().all(&self.db).await?)
    }
}
