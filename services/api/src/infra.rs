use metrics_exporter_prometheus::PrometheusHandle;
use receipt_points::receipts::{InMemoryPointsRepository, ReceiptService};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Receipt service over a store that lives as long as the process.
pub(crate) fn in_memory_receipt_service() -> Arc<ReceiptService<InMemoryPointsRepository>> {
    let repository = Arc::new(InMemoryPointsRepository::default());
    Arc::new(ReceiptService::new(repository))
}
