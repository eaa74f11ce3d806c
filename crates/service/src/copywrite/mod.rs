//! Copywrite resource.
//!
//! Not implemented yet: the service answers every call with a fixed message
//! and stores nothing.

pub mod dto;
pub mod service;

pub use dto::{CreateCopywriteDto, UpdateCopywriteDto};
pub use service::{CopywriteService, StubCopywriteService};
