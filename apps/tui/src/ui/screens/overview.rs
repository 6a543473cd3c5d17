use crate::api::MetricsSnapshot;
use crate::app::App;
use crate::ui::widgets::charts::{
    basis_points, entity_color, render_labelled_bars, render_metric_card, titled_block, PURPLE,
    TEAL,
};
use crate::ui::widgets::radar::render_performance_radar;
use crate::view::{
    distribution_shares, entity_metric_rows, format_percent, radar_points, HEADLINE_DECIMALS,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line as TextLine;
use ratatui::widgets::{Bar, BarChart, BarGroup};
use ratatui::Frame;

pub fn render_overview(app: &App, metrics: &MetricsSnapshot, f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Percentage(55),
            Constraint::Min(6),
        ])
        .split(area);

    render_cards(metrics, f, rows[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_distribution(metrics, f, middle[0]);
    render_performance_radar(f, middle[1], &radar_points(metrics), app.animation_counter);
    render_entity_performance(metrics, f, rows[2]);
}

fn render_cards(metrics: &MetricsSnapshot, f: &mut Frame<'_>, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let overall = &metrics.overall;
    render_metric_card(
        f,
        cards[0],
        "Overall Precision",
        &format_percent(overall.precision, HEADLINE_DECIMALS),
        "Model accuracy",
        PURPLE,
    );
    render_metric_card(
        f,
        cards[1],
        "Overall Recall",
        &format_percent(overall.recall, HEADLINE_DECIMALS),
        "Detection coverage",
        TEAL,
    );
    render_metric_card(
        f,
        cards[2],
        "Overall F1-Score",
        &format_percent(overall.f1_score, HEADLINE_DECIMALS),
        "Harmonic mean",
        PURPLE,
    );
}

fn render_distribution(metrics: &MetricsSnapshot, f: &mut Frame<'_>, area: Rect) {
    let entries = distribution_shares(metrics)
        .into_iter()
        .map(|share| {
            (
                share.entity_type.label().to_string(),
                share.count,
                format!("{} ({})", share.count, format_percent(share.share, 0)),
                entity_color(share.entity_type),
            )
        })
        .collect::<Vec<_>>();

    render_labelled_bars(
        f,
        area,
        "Entity Distribution",
        &entries,
        Direction::Vertical,
        None,
    );
}

fn render_entity_performance(metrics: &MetricsSnapshot, f: &mut Frame<'_>, area: Rect) {
    let value_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let groups = entity_metric_rows(metrics)
        .into_iter()
        .map(|row| {
            let bars = vec![
                Bar::default()
                    .value(basis_points(row.chemical))
                    .text_value(format_percent(row.chemical, HEADLINE_DECIMALS))
                    .style(Style::default().fg(PURPLE))
                    .value_style(value_style.bg(PURPLE)),
                Bar::default()
                    .value(basis_points(row.disease))
                    .text_value(format_percent(row.disease, HEADLINE_DECIMALS))
                    .style(Style::default().fg(TEAL))
                    .value_style(value_style.bg(TEAL)),
            ];
            BarGroup::default()
                .label(TextLine::from(row.metric))
                .bars(&bars)
        })
        .collect::<Vec<_>>();

    let mut chart = BarChart::default()
        .block(titled_block(
            "Entity-Specific Performance (Chemical / Disease)",
            Color::Cyan,
        ))
        .bar_width(8)
        .bar_gap(1)
        .group_gap(4)
        .max(basis_points(1.0));

    for group in groups {
        chart = chart.data(group);
    }

    f.render_widget(chart, area);
}
