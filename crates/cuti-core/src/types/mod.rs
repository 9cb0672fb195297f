//! Core type definitions used across the Cuti workspace.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse, Paging};
