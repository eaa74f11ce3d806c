//! Service layer for the project-manage backend.
//! - `repository`: entity-generic persistence abstraction and its adapters.
//! - `project_manage`: project create/list on top of a repository.
//! - `copywrite`: placeholder copywrite contract with fixed responses.

pub mod errors;
#[macro_use]
pub mod dto;
pub mod repository;
pub mod project_manage;
pub mod copywrite;
#[cfg(test)]
pub mod test_support;
