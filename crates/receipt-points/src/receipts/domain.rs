use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier handed back for a processed receipt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(pub String);

impl ReceiptId {
    /// Fresh random identifier; callers never construct ids themselves.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Purchase receipt as submitted by a client.
///
/// Every field is carried as raw text. Absent keys decode to empty values so that a sparse
/// payload is still scored; the scoring rules decide what each field is worth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(default)]
    pub retailer: String,
    /// Expected as `YYYY-MM-DD`.
    #[serde(default)]
    pub purchase_date: String,
    /// Expected as 24-hour `HH:MM`.
    #[serde(default)]
    pub purchase_time: String,
    /// Decimal amount such as `"35.35"`.
    #[serde(default)]
    pub total: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Single line item on a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub price: String,
}

/// Points awarded to a receipt, fixed at the moment it was processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: ReceiptId,
    pub points: u64,
}

impl ScoreRecord {
    pub fn processed_view(&self) -> ProcessedReceiptView {
        ProcessedReceiptView {
            id: self.id.clone(),
        }
    }

    pub fn points_view(&self) -> PointsView {
        PointsView {
            points: self.points,
        }
    }
}

/// Response body for a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedReceiptView {
    pub id: ReceiptId,
}

/// Response body for a points lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsView {
    pub points: u64,
}
