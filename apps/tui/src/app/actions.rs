use crate::api::{ApiClient, PredictedEntity, PredictionError};
use crate::app::state::{App, AppEvent};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// Owns the API client and the channel background requests report on.
#[derive(Debug)]
pub struct AppActions {
    pub client: ApiClient,
    events: UnboundedSender<AppEvent>,
    metrics_requested: bool,
}

impl AppActions {
    pub fn new(client: ApiClient) -> (Self, UnboundedReceiver<AppEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let actions = Self {
            client,
            events,
            metrics_requested: false,
        };
        (actions, receiver)
    }

    /// Spawns the one metrics request this process will ever make.
    fn spawn_metrics_load(&mut self) -> bool {
        if self.metrics_requested {
            return false;
        }
        self.metrics_requested = true;

        let client = self.client.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = client.fetch_metrics().await;
            let _ = events.send(AppEvent::MetricsLoaded(result));
        });

        true
    }

    fn spawn_prediction(&self, text: String) {
        let client = self.client.clone();
        let guard = ProcessingGuard::new(self.events.clone());
        tokio::spawn(async move {
            let result = client.predict(&text).await;
            guard.settle(result);
        });
    }
}

/// Reports a prediction outcome exactly once. If the task ends before a
/// result is recorded, dropping the guard reports `Aborted` instead, so the
/// busy flag is always released.
struct ProcessingGuard {
    events: UnboundedSender<AppEvent>,
    settled: bool,
}

impl ProcessingGuard {
    const fn new(events: UnboundedSender<AppEvent>) -> Self {
        Self {
            events,
            settled: false,
        }
    }

    fn settle(mut self, result: Result<Vec<PredictedEntity>, PredictionError>) {
        self.settled = true;
        let _ = self.events.send(AppEvent::PredictionSettled(result));
    }
}

impl Drop for ProcessingGuard {
    fn drop(&mut self) {
        if !self.settled {
            let _ = self
                .events
                .send(AppEvent::PredictionSettled(Err(PredictionError::Aborted)));
        }
    }
}

impl App {
    pub fn start_metrics_load(&mut self) {
        if self.actions.spawn_metrics_load() {
            self.is_loading = true;
            debug!(api_url = self.actions.client.base_url(), "metrics load started");
        }
    }

    /// Submits the current input. Returns `false` without side effects when
    /// the input is blank or a prediction is already in flight.
    pub fn request_prediction(&mut self) -> bool {
        if self.is_processing {
            debug!("prediction already in flight; ignoring request");
            return false;
        }
        if self.input_text.trim().is_empty() {
            return false;
        }

        self.is_processing = true;
        self.status_message = "Analyzing...".to_string();
        self.actions.spawn_prediction(self.input_text.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntityType;
    use crate::test_support::{sample_metrics, spawn_backend};
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::mpsc::error::TryRecvError;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    /// Fake `/api/predict` that counts hits and always answers with `reply`.
    fn predict_backend(hits: Arc<AtomicUsize>, reply: fn() -> Response) -> Router {
        Router::new().route(
            "/api/predict",
            post(move || {
                hits.fetch_add(1, Ordering::SeqCst);
                async move { reply() }
            }),
        )
    }

    async fn app_against(router: Router) -> Result<(App, UnboundedReceiver<AppEvent>), Box<dyn std::error::Error>> {
        let client = ApiClient::new(&spawn_backend(router).await?)?;
        let (actions, events) = AppActions::new(client);
        Ok((App::new(actions), events))
    }

    async fn next_event(events: &mut UnboundedReceiver<AppEvent>) -> Result<AppEvent, Box<dyn std::error::Error>> {
        let event = tokio::time::timeout(Duration::from_secs(5), events.recv()).await?;
        event.ok_or_else(|| "event channel closed".into())
    }

    #[tokio::test]
    async fn test_blank_input_never_hits_the_network() -> TestResult {
        let hits = Arc::new(AtomicUsize::new(0));
        let router = predict_backend(hits.clone(), || Json(serde_json::json!({})).into_response());
        let (mut app, mut events) = app_against(router).await?;

        for input in ["", "   ", "\n\t"] {
            app.input_text = input.to_string();
            assert!(!app.request_prediction());
            assert!(!app.is_processing);
        }

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));

        Ok(())
    }

    #[tokio::test]
    async fn test_request_while_processing_is_ignored() -> TestResult {
        let hits = Arc::new(AtomicUsize::new(0));
        let router = predict_backend(hits.clone(), || Json(serde_json::json!({})).into_response());
        let (mut app, mut events) = app_against(router).await?;

        app.input_text = "aspirin".to_string();
        app.is_processing = true;
        assert!(!app.request_prediction());
        assert!(app.is_processing);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));

        Ok(())
    }

    #[tokio::test]
    async fn test_processing_flag_spans_the_whole_call() -> TestResult {
        let hits = Arc::new(AtomicUsize::new(0));
        let router = predict_backend(hits.clone(), || {
            Json(serde_json::json!({
                "data": [[["aspirin", "Chemical"], ["diabetes", "Disease"]]]
            }))
            .into_response()
        });
        let (mut app, mut events) = app_against(router).await?;

        assert!(!app.is_processing);
        app.input_text = "Aspirin is used by patients with diabetes.".to_string();
        assert!(app.request_prediction());
        assert!(app.is_processing);

        // A second submit while the first is outstanding is dropped.
        assert!(!app.request_prediction());

        let event = next_event(&mut events).await?;
        assert!(app.is_processing);
        app.apply_event(event);

        assert!(!app.is_processing);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(
            app.predicted_entities,
            vec![
                PredictedEntity {
                    text: "aspirin".to_string(),
                    entity_type: EntityType::Chemical,
                },
                PredictedEntity {
                    text: "diabetes".to_string(),
                    entity_type: EntityType::Disease,
                },
            ]
        );
        assert!(app.alert.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_first_output_clears_list_without_alert() -> TestResult {
        let hits = Arc::new(AtomicUsize::new(0));
        let router = predict_backend(hits, || Json(serde_json::json!({ "data": [] })).into_response());
        let (mut app, mut events) = app_against(router).await?;
        app.predicted_entities = vec![PredictedEntity {
            text: "insulin".to_string(),
            entity_type: EntityType::Chemical,
        }];

        app.input_text = "no entities here".to_string();
        assert!(app.request_prediction());
        let event = next_event(&mut events).await?;
        app.apply_event(event);

        assert!(app.predicted_entities.is_empty());
        assert!(app.alert.is_none());
        assert!(!app.is_processing);

        Ok(())
    }

    #[tokio::test]
    async fn test_server_error_alerts_exactly_once() -> TestResult {
        let hits = Arc::new(AtomicUsize::new(0));
        let router = predict_backend(hits, || {
            (StatusCode::INTERNAL_SERVER_ERROR, "model crashed").into_response()
        });
        let (mut app, mut events) = app_against(router).await?;
        app.predicted_entities = vec![PredictedEntity {
            text: "warfarin".to_string(),
            entity_type: EntityType::Chemical,
        }];

        app.input_text = "warfarin".to_string();
        assert!(app.request_prediction());
        let event = next_event(&mut events).await?;
        app.apply_event(event);

        assert!(app.predicted_entities.is_empty());
        assert!(app.alert.is_some());
        assert!(!app.is_processing);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));

        Ok(())
    }

    #[tokio::test]
    async fn test_dropped_guard_reports_aborted() -> TestResult {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        drop(ProcessingGuard::new(sender));

        let event = receiver.try_recv()?;
        assert!(matches!(
            event,
            AppEvent::PredictionSettled(Err(PredictionError::Aborted))
        ));
        assert!(matches!(receiver.try_recv(), Err(TryRecvError::Disconnected)));

        Ok(())
    }

    #[tokio::test]
    async fn test_settled_guard_reports_once() -> TestResult {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        ProcessingGuard::new(sender).settle(Ok(Vec::new()));

        assert!(matches!(
            receiver.try_recv()?,
            AppEvent::PredictionSettled(Ok(entities)) if entities.is_empty()
        ));
        assert!(matches!(receiver.try_recv(), Err(TryRecvError::Disconnected)));

        Ok(())
    }

    #[tokio::test]
    async fn test_metrics_are_requested_once() -> TestResult {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let router = Router::new().route(
            "/metrics",
            get(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                async { Json(sample_metrics()) }
            }),
        );
        let (mut app, mut events) = app_against(router).await?;

        app.start_metrics_load();
        app.start_metrics_load();
        assert!(app.is_loading);

        let event = next_event(&mut events).await?;
        app.apply_event(event);

        assert!(app.is_dashboard_ready());
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));

        Ok(())
    }

    #[tokio::test]
    async fn test_failed_metrics_load_keeps_placeholder() -> TestResult {
        let router = Router::new().route(
            "/metrics",
            get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
        );
        let (mut app, mut events) = app_against(router).await?;

        app.start_metrics_load();
        let event = next_event(&mut events).await?;
        app.apply_event(event);

        assert!(!app.is_loading);
        assert!(app.metrics.is_none());
        assert!(!app.is_dashboard_ready());

        Ok(())
    }
}
