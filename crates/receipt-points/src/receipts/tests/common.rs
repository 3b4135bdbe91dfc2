use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::receipts::domain::{Item, Receipt, ReceiptId, ScoreRecord};
use crate::receipts::repository::{InMemoryPointsRepository, PointsRepository, RepositoryError};
use crate::receipts::{receipt_router, ReceiptService};

pub(super) fn item(short_description: &str, price: &str) -> Item {
    Item {
        short_description: short_description.to_string(),
        price: price.to_string(),
    }
}

/// Receipt worth zero points under every rule; tests override one field at a time.
pub(super) fn blank_receipt() -> Receipt {
    Receipt {
        retailer: String::new(),
        purchase_date: "2022-01-02".to_string(),
        purchase_time: "10:00".to_string(),
        total: "1.01".to_string(),
        items: Vec::new(),
    }
}

pub(super) fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        total: "35.35".to_string(),
        items: vec![
            item("Mountain Dew 12PK", "6.49"),
            item("Emils Cheese Pizza", "12.25"),
            item("Knorr Creamy Chicken", "1.26"),
            item("Doritos Nacho Cheese", "3.35"),
            item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
    }
}

pub(super) fn corner_market_receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        total: "9.00".to_string(),
        items: vec![
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
        ],
    }
}

pub(super) fn build_service() -> (
    ReceiptService<InMemoryPointsRepository>,
    Arc<InMemoryPointsRepository>,
) {
    let repository = Arc::new(InMemoryPointsRepository::default());
    let service = ReceiptService::new(repository.clone());
    (service, repository)
}

pub(super) fn receipt_router_with_service(
    service: ReceiptService<InMemoryPointsRepository>,
) -> axum::Router {
    receipt_router(Arc::new(service))
}

pub(super) struct ConflictRepository;

impl PointsRepository for ConflictRepository {
    fn insert(&self, _record: ScoreRecord) -> Result<ScoreRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ReceiptId) -> Result<Option<ScoreRecord>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl PointsRepository for UnavailableRepository {
    fn insert(&self, _record: ScoreRecord) -> Result<ScoreRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &ReceiptId) -> Result<Option<ScoreRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
