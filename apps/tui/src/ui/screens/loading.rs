use crate::app::App;
use crate::ui::widgets::charts::PURPLE;
use crate::ui::widgets::popup::centered_rect;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, WhichUse, BRAILLE_SIX};

pub const LOADING_LABEL: &str = "Loading dashboard metrics...";

/// Shown until a metrics snapshot is stored; nothing else is reachable.
pub fn render_loading(app: &App, f: &mut Frame<'_>) {
    let area = centered_rect(50, 30, f.area());
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let label_width = u16::try_from(LOADING_LABEL.len() + 2).unwrap_or(u16::MAX);
    let throbber_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(label_width),
            Constraint::Min(0),
        ])
        .split(rows[1])[1];

    let throbber = Throbber::default()
        .label(LOADING_LABEL)
        .style(Style::default().fg(Color::Gray))
        .throbber_style(Style::default().fg(PURPLE).add_modifier(Modifier::BOLD))
        .throbber_set(BRAILLE_SIX)
        .use_type(WhichUse::Spin);
    let mut state = app.throbber.clone();
    f.render_stateful_widget(throbber, throbber_area, &mut state);

    let hint = Paragraph::new(format!("metrics from {}", app.actions.client.base_url()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, rows[3]);
}
