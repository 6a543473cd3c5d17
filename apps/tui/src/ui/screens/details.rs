use crate::api::MetricsSnapshot;
use crate::domain::EntityType;
use crate::ui::widgets::charts::{entity_color, titled_block};
use crate::view::{format_percent, HEADLINE_DECIMALS};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Cell, Row, Table};
use ratatui::Frame;

pub fn render_details(metrics: &MetricsSnapshot, f: &mut Frame<'_>, area: Rect) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    for (entity_type, section) in EntityType::ALL.into_iter().zip(sections.iter()) {
        render_entity_table(metrics, entity_type, f, *section);
    }
}

fn render_entity_table(
    metrics: &MetricsSnapshot,
    entity_type: EntityType,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let entity = metrics.entity(entity_type);
    let accent = entity_color(entity_type);

    let header = Row::new(["Precision", "Recall", "F1-Score", "Support"])
        .style(Style::default().fg(Color::Gray));

    let value_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let values = Row::new(vec![
        Cell::from(format_percent(entity.precision, HEADLINE_DECIMALS)),
        Cell::from(format_percent(entity.recall, HEADLINE_DECIMALS)),
        Cell::from(format_percent(entity.f1_score, HEADLINE_DECIMALS)),
        Cell::from(entity.support.to_string()),
    ])
    .style(value_style);

    let title = format!("{} Entities", entity_type.label());
    let table = Table::new(vec![values], [Constraint::Ratio(1, 4); 4])
        .header(header)
        .block(titled_block(&title, accent));

    f.render_widget(table, area);
}
