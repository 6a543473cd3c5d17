// Rendering for the NER dashboard.
// Every function here reads `App`; none of them mutate it.

pub mod screens;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    if app.is_dashboard_ready() {
        screens::dashboard::render_dashboard(app, f);
    } else {
        screens::loading::render_loading(app, f);
    }

    if let Some(alert) = &app.alert {
        widgets::popup::render_alert(alert, f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiClient, PredictedEntity, PredictionError};
    use crate::app::{Alert, AppActions, AppEvent};
    use crate::domain::{EntityType, Tab};
    use crate::test_support::sample_snapshot;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn offline_app() -> Result<App, reqwest::Error> {
        let client = ApiClient::new("http://127.0.0.1:9")?;
        let (actions, _events) = AppActions::new(client);
        Ok(App::new(actions))
    }

    fn draw(app: &App) -> Result<String, Box<dyn std::error::Error>> {
        let mut terminal = Terminal::new(TestBackend::new(120, 40))?;
        terminal.draw(|f| ui(app, f))?;
        Ok(buffer_text(terminal.backend().buffer()))
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_every_tab_shows_placeholder_until_loaded() -> TestResult {
        let mut app = offline_app()?;

        for tab in Tab::ALL {
            app.select_tab(tab);
            let screen = draw(&app)?;
            assert!(screen.contains("Loading dashboard metrics..."));
            assert!(!screen.contains("Healthcare NER Dashboard"));
        }

        Ok(())
    }

    #[test]
    fn test_failed_load_keeps_placeholder() -> TestResult {
        let mut app = offline_app()?;
        app.apply_event(AppEvent::MetricsLoaded(Err(crate::api::LoadError::Invalid(
            "recall out of range".to_string(),
        ))));

        assert!(draw(&app)?.contains("Loading dashboard metrics..."));
        Ok(())
    }

    #[test]
    fn test_loaded_dashboard_renders_headline() -> TestResult {
        let mut app = offline_app()?;
        app.apply_event(AppEvent::MetricsLoaded(Ok(sample_snapshot()?)));

        let screen = draw(&app)?;
        assert!(screen.contains("Healthcare NER Dashboard"));
        assert!(screen.contains("Live Prediction"));
        assert!(screen.contains("87.65%"));

        Ok(())
    }

    #[test]
    fn test_every_tab_renders_once_loaded() -> TestResult {
        let mut app = offline_app()?;
        app.apply_event(AppEvent::MetricsLoaded(Ok(sample_snapshot()?)));

        for tab in Tab::ALL {
            app.select_tab(tab);
            let screen = draw(&app)?;
            assert!(screen.contains("Healthcare NER Dashboard"), "{tab:?}");
        }

        app.select_tab(Tab::Details);
        assert!(draw(&app)?.contains("5385"));

        app.select_tab(Tab::Training);
        assert!(draw(&app)?.contains("Training Progress (3 Epochs)"));

        Ok(())
    }

    #[test]
    fn test_predict_tab_lists_detected_entities() -> TestResult {
        let mut app = offline_app()?;
        app.apply_event(AppEvent::MetricsLoaded(Ok(sample_snapshot()?)));
        app.select_tab(Tab::Predict);
        app.apply_event(AppEvent::PredictionSettled(Ok(vec![PredictedEntity {
            text: "aspirin".to_string(),
            entity_type: EntityType::Chemical,
        }])));

        let screen = draw(&app)?;
        assert!(screen.contains("Detected Entities (1)"));
        assert!(screen.contains("aspirin"));
        assert!(screen.contains("Quick Examples"));

        Ok(())
    }

    #[test]
    fn test_alert_is_drawn_over_dashboard() -> TestResult {
        let mut app = offline_app()?;
        app.apply_event(AppEvent::MetricsLoaded(Ok(sample_snapshot()?)));
        app.apply_event(AppEvent::PredictionSettled(Err(PredictionError::Aborted)));

        let alert = app.alert.clone().ok_or("alert not raised")?;
        assert_eq!(
            alert,
            Alert::prediction_failed(&PredictionError::Aborted)
        );
        assert!(draw(&app)?.contains("API connection failed."));

        Ok(())
    }
}
