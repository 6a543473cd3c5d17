use crate::domain::{EntityType, Tab};
use ratatui::layout::{Alignment, Direction, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

pub const PURPLE: Color = Color::Rgb(147, 51, 234);
pub const TEAL: Color = Color::Rgb(20, 184, 166);
pub const AMBER: Color = Color::Rgb(245, 158, 11);
pub const PINK: Color = Color::Rgb(219, 39, 119);
pub const ALERT_RED: Color = Color::Rgb(220, 38, 38);

pub const fn entity_color(entity_type: EntityType) -> Color {
    match entity_type {
        EntityType::Chemical => PURPLE,
        EntityType::Disease => TEAL,
    }
}

/// Colour for entity badges on the live prediction tab.
pub const fn prediction_color(entity_type: EntityType) -> Color {
    match entity_type {
        EntityType::Chemical => PURPLE,
        EntityType::Disease => PINK,
    }
}

pub fn titled_block(title: &str, accent: Color) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
}

/// Bar values are integers; fractions are charted in basis points.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn basis_points(fraction: f64) -> u64 {
    (fraction.clamp(0.0, 1.0) * 10_000.0).round() as u64
}

pub fn render_tab_bar(active: Tab, f: &mut Frame<'_>, area: Rect) {
    let titles = Tab::ALL
        .iter()
        .map(|tab| TextLine::from(format!("{} {}", tab.index() + 1, tab.label())))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(active.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(PURPLE).add_modifier(Modifier::BOLD))
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

/// Headline card: title, large value and a dim subtitle.
pub fn render_metric_card(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    value: &str,
    subtitle: &str,
    accent: Color,
) {
    let text = Text::from(vec![
        TextLine::from(Span::styled(title, Style::default().fg(Color::Gray))),
        TextLine::from(Span::styled(
            value,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(subtitle, Style::default().fg(Color::DarkGray))),
    ]);

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::LEFT)
                .border_style(Style::default().fg(accent).add_modifier(Modifier::BOLD)),
        )
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

/// One labelled bar per `(label, value, display, colour)` entry.
pub fn render_labelled_bars(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    entries: &[(String, u64, String, Color)],
    direction: Direction,
    max: Option<u64>,
) {
    let bars: Vec<Bar<'_>> = entries
        .iter()
        .map(|(label, value, display, color)| {
            Bar::default()
                .value(*value)
                .text_value(display.clone())
                .label(TextLine::from(label.as_str()))
                .style(Style::default().fg(*color))
                .value_style(
                    Style::default()
                        .fg(Color::White)
                        .bg(*color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let max_value = max.unwrap_or_else(|| {
        entries
            .iter()
            .map(|(_, value, _, _)| *value)
            .max()
            .unwrap_or(0)
            .max(1)
    });

    let mut chart = BarChart::default()
        .block(titled_block(title, Color::Cyan))
        .direction(direction)
        .data(BarGroup::default().bars(&bars))
        .max(max_value);

    chart = if direction == Direction::Horizontal {
        chart.bar_width(1).bar_gap(0)
    } else {
        chart.bar_width(9).bar_gap(2)
    };

    f.render_widget(chart, area);
}
