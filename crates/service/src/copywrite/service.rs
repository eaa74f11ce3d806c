use tracing::debug;

use super::dto::{CreateCopywriteDto, UpdateCopywriteDto};

/// Copywrite operations. Each returns a human-readable message.
pub trait CopywriteService: Send + Sync {
    fn create(&self, dto: CreateCopywriteDto) -> String;
    fn find_all(&self) -> String;
    fn find_one(&self, id: i64) -> String;
    fn update(&self, id: i64, dto: UpdateCopywriteDto) -> String;
    fn remove(&self, id: i64) -> String;
}

/// Placeholder implementation: fixed messages, no storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubCopywriteService;

impl CopywriteService for StubCopywriteService {
    fn create(&self, dto: CreateCopywriteDto) -> String {
        debug!(?dto, "copywrite create is not implemented");
        "This action adds a new copywrite".to_string()
    }

    fn find_all(&self) -> String {
        "This action returns all copywrite".to_string()
    }

    fn find_one(&self, id: i64) -> String {
        format!("This action returns a #{id} copywrite")
    }

    fn update(&self, id: i64, dto: UpdateCopywriteDto) -> String {
        debug!(id, ?dto, "copywrite update is not implemented");
        format!("This action updates a #{id} copywrite")
    }

    fn remove(&self, id: i64) -> String {
        format!("This action removes a #{id} copywrite")
    }
}
