//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod timeline_service;

pub use timeline_service::TimelineService;
