use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

use crate::api::{ApiClient, MetricsSnapshot, PredictedEntity};
use crate::app::state::PREDICTION_FAILED_MESSAGE;
use crate::app::{handle_key_event, App, AppEvent};
use crate::domain::EntityType;
use crate::terminal::DashboardTerminal;
use crate::ui;
use crate::view::{
    comparison_rows, distribution_shares, format_percent, DistributionShare, ModelScore,
    ENTITY_BAR_DECIMALS, HEADLINE_DECIMALS,
};

// Configure event poll timeout (ms)
const EVENT_POLL_TIMEOUT: u64 = 50;

/// Run the dashboard until the user quits.
pub async fn run(
    terminal: &mut DashboardTerminal,
    app: &mut App,
    events: &mut UnboundedReceiver<AppEvent>,
) -> Result<()> {
    app.start_metrics_load();

    loop {
        // Results from background requests land between frames
        while let Ok(event) = events.try_recv() {
            app.apply_event(event);
        }

        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(eyre!("Terminal draw error: {e}"));
        }

        if !matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    app.running = false;
                } else {
                    handle_key_event(app, key);
                }

                if !app.running {
                    break;
                }
            }
            Ok(Event::Resize(width, height)) => {
                debug!(width, height, "terminal resized");
            }
            Ok(_) | Err(_) => {
                // Ignore mouse, focus and paste events
            }
        }
    }

    info!("dashboard closed");
    Ok(())
}

/// Run without a UI: print the metrics summary, or a single prediction.
pub async fn run_headless(client: &ApiClient, predict: Option<&str>, json: bool) -> Result<()> {
    if let Some(text) = predict {
        return render_headless_prediction(client, text, json).await;
    }

    let snapshot = client.fetch_metrics().await?;

    if json {
        let report = HeadlessReport::from_snapshot(&snapshot);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_headless_summary(&snapshot));
    }

    Ok(())
}

async fn render_headless_prediction(client: &ApiClient, text: &str, json: bool) -> Result<()> {
    if text.trim().is_empty() {
        return Err(eyre!("Nothing to predict: input text is empty"));
    }

    let entities = client
        .predict(text)
        .await
        .map_err(|e| eyre!("{PREDICTION_FAILED_MESSAGE} ({e})"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entities)?);
    } else {
        print!("{}", render_entity_list(&entities));
    }

    Ok(())
}

fn render_entity_list(entities: &[PredictedEntity]) -> String {
    let mut out = format!("Detected Entities ({})\n", entities.len());
    for entity in entities {
        out.push_str(&format!(
            "- [{}] {}\n",
            entity.entity_type.label(),
            entity.text
        ));
    }
    out
}

fn render_headless_summary(snapshot: &MetricsSnapshot) -> String {
    let overall = &snapshot.overall;
    let mut out = String::new();

    out.push_str("\nHealthcare NER Dashboard\n");
    out.push_str("========================\n");
    out.push_str(&format!(
        "Overall Precision: {}\n",
        format_percent(overall.precision, HEADLINE_DECIMALS)
    ));
    out.push_str(&format!(
        "Overall Recall: {}\n",
        format_percent(overall.recall, HEADLINE_DECIMALS)
    ));
    out.push_str(&format!(
        "Overall F1-Score: {}\n",
        format_percent(overall.f1_score, HEADLINE_DECIMALS)
    ));

    out.push_str("\nEntity Performance:\n");
    for entity_type in EntityType::ALL {
        let metrics = snapshot.entity(entity_type);
        out.push_str(&format!(
            "- {}: P {} | R {} | F1 {} | support {}\n",
            entity_type.label(),
            format_percent(metrics.precision, HEADLINE_DECIMALS),
            format_percent(metrics.recall, HEADLINE_DECIMALS),
            format_percent(metrics.f1_score, HEADLINE_DECIMALS),
            metrics.support
        ));
    }

    out.push_str("\nEntity Distribution:\n");
    for share in distribution_shares(snapshot) {
        out.push_str(&format!(
            "- {}: {} ({})\n",
            share.entity_type.label(),
            share.count,
            format_percent(share.share, ENTITY_BAR_DECIMALS)
        ));
    }

    out.push_str(&format!(
        "\nTraining Progress ({} Epochs):\n",
        snapshot.training_progress.len()
    ));
    for point in &snapshot.training_progress {
        out.push_str(&format!(
            "- epoch {}: train {:.4} | val {:.4}\n",
            point.epoch, point.train_loss, point.val_loss
        ));
    }

    out.push_str("\nModel Comparison (F1):\n");
    for row in comparison_rows(snapshot) {
        out.push_str(&format!(
            "- {}: {}\n",
            row.model,
            format_percent(row.f1, HEADLINE_DECIMALS)
        ));
    }

    out
}

#[derive(serde::Serialize)]
struct HeadlessReport<'a> {
    metrics: &'a MetricsSnapshot,
    headline: HeadlineFigures,
    distribution: Vec<DistributionShare>,
    comparison: Vec<ModelScore>,
}

#[derive(serde::Serialize)]
struct HeadlineFigures {
    precision: String,
    recall: String,
    f1_score: String,
}

impl<'a> HeadlessReport<'a> {
    fn from_snapshot(snapshot: &'a MetricsSnapshot) -> Self {
        let overall = &snapshot.overall;
        Self {
            metrics: snapshot,
            headline: HeadlineFigures {
                precision: format_percent(overall.precision, HEADLINE_DECIMALS),
                recall: format_percent(overall.recall, HEADLINE_DECIMALS),
                f1_score: format_percent(overall.f1_score, HEADLINE_DECIMALS),
            },
            distribution: distribution_shares(snapshot),
            comparison: comparison_rows(snapshot),
        }
    }
}
