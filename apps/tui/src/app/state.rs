use crate::api::{LoadError, MetricsSnapshot, PredictedEntity, PredictionError};
use crate::app::actions::AppActions;
use crate::domain::Tab;
use std::time::Instant;
use throbber_widgets_tui::ThrobberState;
use tracing::{debug, error, info};

pub const PREDICTION_FAILED_MESSAGE: &str =
    "API connection failed. Please check your backend connection.";

/// Results delivered to the UI loop by background requests.
#[derive(Debug)]
pub enum AppEvent {
    MetricsLoaded(Result<MetricsSnapshot, LoadError>),
    PredictionSettled(Result<Vec<PredictedEntity>, PredictionError>),
}

/// Blocking notification; the dashboard ignores other input until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub detail: Option<String>,
}

impl Alert {
    pub fn prediction_failed(cause: &PredictionError) -> Self {
        Self {
            title: "Prediction failed".to_string(),
            message: PREDICTION_FAILED_MESSAGE.to_string(),
            detail: Some(cause.to_string()),
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub active_tab: Tab,
    pub input_text: String,
    pub editing: bool,
    pub is_processing: bool,
    pub is_loading: bool,
    pub metrics: Option<MetricsSnapshot>,
    pub predicted_entities: Vec<PredictedEntity>,
    pub alert: Option<Alert>,
    pub example_index: usize,
    pub status_message: String,
    pub animation_counter: f64,
    pub last_frame: Instant,
    pub throbber: ThrobberState,
    pub actions: AppActions,
}

impl App {
    pub fn new(actions: AppActions) -> Self {
        Self {
            running: true,
            active_tab: Tab::default(),
            input_text: String::new(),
            editing: false,
            is_processing: false,
            is_loading: true,
            metrics: None,
            predicted_entities: Vec::new(),
            alert: None,
            example_index: 0,
            status_message: String::new(),
            animation_counter: 0.0,
            last_frame: Instant::now(),
            throbber: ThrobberState::default(),
            actions,
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        // Update animation counter (cycles between 0 and 2*PI)
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }

        if self.is_loading || self.is_processing {
            self.throbber.calc_next();
        }
    }

    /// Tabs and charts are reachable only once a snapshot has been stored.
    pub const fn is_dashboard_ready(&self) -> bool {
        !self.is_loading && self.metrics.is_some()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            debug!(from = self.active_tab.as_str(), to = tab.as_str(), "tab selected");
        }
        self.active_tab = tab;
        if tab != Tab::Predict {
            self.editing = false;
        }
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.select_tab(self.active_tab.prev());
    }

    pub fn can_predict(&self) -> bool {
        !self.is_processing && !self.input_text.trim().is_empty()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::MetricsLoaded(result) => self.finish_metrics_load(result),
            AppEvent::PredictionSettled(result) => self.finish_prediction(result),
        }
    }

    fn finish_metrics_load(&mut self, result: Result<MetricsSnapshot, LoadError>) {
        self.is_loading = false;

        match result {
            Ok(snapshot) => {
                if self.metrics.is_some() {
                    debug!("ignoring second metrics snapshot");
                    return;
                }
                info!(
                    chemical_support = snapshot.chemical.support,
                    disease_support = snapshot.disease.support,
                    "dashboard metrics ready"
                );
                self.metrics = Some(snapshot);
            }
            Err(e) => {
                error!(error = %e, "Failed to load metrics");
            }
        }
    }

    fn finish_prediction(&mut self, result: Result<Vec<PredictedEntity>, PredictionError>) {
        self.is_processing = false;

        match result {
            Ok(entities) => {
                self.status_message = format!("Detected {} entities", entities.len());
                self.predicted_entities = entities;
            }
            Err(e) => {
                error!(error = %e, "Prediction error");
                self.predicted_entities.clear();
                self.status_message.clear();
                self.alert = Some(Alert::prediction_failed(&e));
            }
        }
    }
}
