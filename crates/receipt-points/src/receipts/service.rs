use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{Receipt, ReceiptId, ScoreRecord};
use super::repository::{PointsRepository, RepositoryError};
use super::scoring;

/// Service composing the scoring rules with the points repository.
pub struct ReceiptService<R> {
    repository: Arc<R>,
}

impl<R> ReceiptService<R>
where
    R: PointsRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Score a receipt and store the points under a freshly generated id.
    pub fn process(&self, receipt: Receipt) -> Result<ScoreRecord, ReceiptServiceError> {
        let points = scoring::score(&receipt);
        let record = ScoreRecord {
            id: ReceiptId::generate(),
            points,
        };

        let stored = self.repository.insert(record)?;
        info!(receipt_id = %stored.id, points = stored.points, retailer = %receipt.retailer, "receipt processed");
        Ok(stored)
    }

    /// Points previously awarded to `id`.
    pub fn points(&self, id: &ReceiptId) -> Result<u64, ReceiptServiceError> {
        let record = self.repository.fetch(id)?.ok_or_else(|| {
            debug!(receipt_id = %id, "points requested for unknown receipt");
            ReceiptServiceError::UnknownReceipt(id.clone())
        })?;
        Ok(record.points)
    }
}

/// Error raised by the receipt service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error("no receipt found for id {0}")]
    UnknownReceipt(ReceiptId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ReceiptServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReceiptServiceError::UnknownReceipt(_))
    }
}
