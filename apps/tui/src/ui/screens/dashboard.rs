use crate::app::App;
use crate::domain::Tab;
use crate::ui::screens::{analysis, comparison, details, overview, predict, training};
use crate::ui::widgets::charts::{render_tab_bar, PURPLE};
use crate::view::{format_percent, HEADLINE_DECIMALS};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_dashboard(app: &App, f: &mut Frame<'_>) {
    let Some(metrics) = app.metrics.as_ref() else {
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Header
            Constraint::Length(2), // Tab bar
            Constraint::Min(8),    // Active tab
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_header(metrics.overall.f1_score, f, layout[0]);
    render_tab_bar(app.active_tab, f, layout[1]);

    match app.active_tab {
        Tab::Overview => overview::render_overview(app, metrics, f, layout[2]),
        Tab::Analysis => analysis::render_analysis(metrics, f, layout[2]),
        Tab::Training => training::render_training(metrics, f, layout[2]),
        Tab::Comparison => comparison::render_comparison(metrics, f, layout[2]),
        Tab::Details => details::render_details(metrics, f, layout[2]),
        Tab::Predict => predict::render_predict(app, f, layout[2]),
    }

    render_status(app, f, layout[3]);
    render_shortcuts(app, f, layout[4]);
}

fn render_header(f1_score: f64, f: &mut Frame<'_>, area: Rect) {
    let badge = |text: String| {
        Span::styled(
            format!(" {text} "),
            Style::default()
                .fg(Color::White)
                .bg(PURPLE)
                .add_modifier(Modifier::BOLD),
        )
    };

    let text = Text::from(vec![
        TextLine::from(vec![
            Span::styled(
                "+ ",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Healthcare NER Dashboard",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        TextLine::from(Span::styled(
            "BioBERT-based Named Entity Recognition for Medical Text",
            Style::default().fg(Color::Gray),
        )),
        TextLine::from(vec![
            badge("BC5CDR Dataset".to_string()),
            Span::raw("  "),
            badge("BioBERT Model".to_string()),
            Span::raw("  "),
            badge(format!(
                "{} F1-Score",
                format_percent(f1_score, HEADLINE_DECIMALS)
            )),
        ]),
    ]);

    let header = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(PURPLE)),
        )
        .alignment(Alignment::Left);

    f.render_widget(header, area);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let (message, color) = if app.is_processing {
        ("Analyzing...".to_string(), Color::Yellow)
    } else if app.status_message.is_empty() {
        (
            format!("Connected to {}", app.actions.client.base_url()),
            Color::DarkGray,
        )
    } else {
        (app.status_message.clone(), Color::Green)
    };

    let status = Paragraph::new(message)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(" Status ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    f.render_widget(status, area);
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let key = |label: &'static str| {
        Span::styled(
            label,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut spans = vec![
        key("Tab/←/→"),
        Span::raw(": Switch tab  "),
        key("1-6"),
        Span::raw(": Jump  "),
    ];

    if app.active_tab == Tab::Predict {
        if app.editing {
            spans.extend([
                key("Enter"),
                Span::raw(": Predict  "),
                key("Esc"),
                Span::raw(": Stop typing"),
            ]);
        } else {
            spans.extend([
                key("i"),
                Span::raw(": Type  "),
                key("p"),
                Span::raw(": Predict  "),
                key("↑/↓ x"),
                Span::raw(": Use example  "),
                key("c"),
                Span::raw(": Clear  "),
            ]);
        }
    }

    if !app.editing {
        spans.extend([key("q"), Span::raw(": Quit")]);
    }

    f.render_widget(
        Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center),
        area,
    );
}
