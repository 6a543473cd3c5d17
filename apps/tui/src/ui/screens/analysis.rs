use crate::api::MetricsSnapshot;
use crate::domain::EntityType;
use crate::ui::widgets::charts::{entity_color, render_labelled_bars, titled_block, AMBER};
use crate::view::{format_percent, ENTITY_BAR_DECIMALS, ERROR_ANALYSIS, TOP_ENTITIES};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Gauge};
use ratatui::Frame;

pub fn render_analysis(metrics: &MetricsSnapshot, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let top_entities = TOP_ENTITIES
        .iter()
        .map(|(entity, count, entity_type)| {
            (
                (*entity).to_string(),
                *count,
                count.to_string(),
                entity_color(*entity_type),
            )
        })
        .collect::<Vec<_>>();

    render_labelled_bars(
        f,
        columns[0],
        "Top 15 Most Frequently Detected Entities",
        &top_entities,
        Direction::Horizontal,
        None,
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(8)])
        .split(columns[1]);

    let errors = ERROR_ANALYSIS
        .iter()
        .map(|(category, count)| ((*category).to_string(), *count, count.to_string(), AMBER))
        .collect::<Vec<_>>();

    render_labelled_bars(
        f,
        right[0],
        "Error Analysis",
        &errors,
        Direction::Horizontal,
        None,
    );

    render_entity_f1_gauges(metrics, f, right[1]);
}

fn render_entity_f1_gauges(metrics: &MetricsSnapshot, f: &mut Frame<'_>, area: Rect) {
    let block = titled_block("Entity Performance", Color::Cyan);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(inner);

    for (entity_type, row) in EntityType::ALL.into_iter().zip(rows.iter()) {
        let f1 = metrics.entity(entity_type).f1_score;
        let gauge = Gauge::default()
            .block(Block::default().title(entity_type.label()))
            .gauge_style(Style::default().fg(entity_color(entity_type)).bg(Color::DarkGray))
            .ratio(f1.clamp(0.0, 1.0))
            .label(format_percent(f1, ENTITY_BAR_DECIMALS));
        f.render_widget(gauge, *row);
    }
}
