use sea_orm::{entity::prelude::*, NotSet, Set};
use serde::{Deserialize, Serialize};

/// A project record. `id` is generated by the database.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_manage")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Opaque product reference; no relation is declared.
    pub product: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Creation payload. Carries no `id`; an `id` key in incoming JSON is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub product: i32,
}

impl NewProject {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel { id: NotSet, name: Set(self.name), product: Set(self.product) }
    }
}
