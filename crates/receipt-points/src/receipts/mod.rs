//! Receipt intake: scoring rules, the points store, and the HTTP endpoints over them.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Item, PointsView, ProcessedReceiptView, Receipt, ReceiptId, ScoreRecord};
pub use repository::{InMemoryPointsRepository, PointsRepository, RepositoryError};
pub use router::receipt_router;
pub use scoring::{breakdown, score, PointsBreakdown, ScoreComponent, ScoringRule};
pub use service::{ReceiptService, ReceiptServiceError};
