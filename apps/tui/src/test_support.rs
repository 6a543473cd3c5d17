// Shared fixtures for unit tests: a fake inference backend and a sample snapshot

use crate::api::MetricsSnapshot;
use axum::Router;

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_backend(router: Router) -> std::io::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(format!("http://{addr}"))
}

pub fn sample_metrics() -> serde_json::Value {
    serde_json::json!({
        "overall": { "precision": 0.8612, "recall": 0.8923, "f1_score": 0.8765 },
        "chemical": { "precision": 0.9134, "recall": 0.9301, "f1_score": 0.9217, "support": 5385 },
        "disease": { "precision": 0.7953, "recall": 0.8472, "f1_score": 0.8204, "support": 4424 },
        "entity_distribution": { "chemical": 5385, "disease": 4424 },
        "training_progress": [
            { "epoch": 1, "train_loss": 0.412, "val_loss": 0.198 },
            { "epoch": 2, "train_loss": 0.143, "val_loss": 0.151 },
            { "epoch": 3, "train_loss": 0.087, "val_loss": 0.149 }
        ]
    })
}

pub fn sample_snapshot() -> Result<MetricsSnapshot, serde_json::Error> {
    serde_json::from_value(sample_metrics())
}
