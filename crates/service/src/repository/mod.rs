//! Entity-generic persistence abstraction.
//!
//! Services depend on [`Repository<E>`]; the concrete adapter is chosen when
//! the application is wired together.

pub mod memory;
pub mod seaorm;

use async_trait::async_trait;
use sea_orm::EntityTrait;

use crate::errors::ServiceError;

pub use memory::MemoryProjectRepository;
pub use seaorm::SeaOrmRepository;

/// CRUD repository bound to one entity type.
#[async_trait]
pub trait Repository<E: EntityTrait>: Send + Sync {
    /// Insert when the primary key is not set, update otherwise.
    /// Returns the stored record, including a generated id.
    async fn save(&self, model: E::ActiveModel) -> Result<E::Model, ServiceError>;

    /// All records in storage order.
    async fn find_all(&self) -> Result<Vec<E::Model>, ServiceError>;
}
