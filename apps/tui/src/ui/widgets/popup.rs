use crate::app::Alert;
use crate::ui::widgets::charts::ALERT_RED;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);

    horizontal_layout[1]
}

/// Modal notice drawn over whatever is on screen.
pub fn render_alert(alert: &Alert, f: &mut Frame<'_>) {
    let area = centered_rect(60, 30, f.area());

    let mut lines = vec![
        TextLine::from(""),
        TextLine::from(Span::styled(
            alert.message.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    if let Some(detail) = &alert.detail {
        lines.push(TextLine::from(""));
        lines.push(TextLine::from(Span::styled(
            detail.as_str(),
            Style::default().fg(Color::Gray),
        )));
    }

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": OK"),
    ]));

    let block = Block::default()
        .title(format!(" {} ", alert.title))
        .title_style(Style::default().fg(ALERT_RED).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ALERT_RED));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
