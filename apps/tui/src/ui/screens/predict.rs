use crate::app::App;
use crate::ui::widgets::charts::{prediction_color, titled_block, PURPLE};
use crate::view::EXAMPLE_TEXTS;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, WhichUse, BRAILLE_SIX};

pub fn render_predict(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Input box
            Constraint::Length(1), // Predict button
            Constraint::Min(3),    // Detected entities
        ])
        .split(columns[0]);

    render_input(app, f, left[0]);
    render_predict_button(app, f, left[1]);
    render_entities(app, f, left[2]);
    render_examples(app, f, columns[1]);
}

fn render_input(app: &App, f: &mut Frame<'_>, area: Rect) {
    let (border_style, title) = if app.editing {
        (
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            " Input Medical Text (typing) ",
        )
    } else {
        (Style::default().fg(PURPLE), " Input Medical Text ")
    };

    let content = if app.input_text.is_empty() && !app.editing {
        Text::from(Span::styled(
            "Enter medical text to analyze... (press i to type)",
            Style::default().fg(Color::DarkGray),
        ))
    } else if app.editing {
        Text::from(TextLine::from(vec![
            Span::raw(app.input_text.as_str()),
            Span::styled("▏", Style::default().fg(Color::Yellow)),
        ]))
    } else {
        Text::from(app.input_text.as_str())
    };

    let input = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(input, area);
}

fn render_predict_button(app: &App, f: &mut Frame<'_>, area: Rect) {
    if app.is_processing {
        let throbber = Throbber::default()
            .label("Analyzing...")
            .style(Style::default().fg(Color::Yellow))
            .throbber_style(Style::default().fg(PURPLE).add_modifier(Modifier::BOLD))
            .throbber_set(BRAILLE_SIX)
            .use_type(WhichUse::Spin);
        let mut state = app.throbber.clone();
        f.render_stateful_widget(throbber, area, &mut state);
        return;
    }

    let style = if app.can_predict() {
        Style::default()
            .fg(Color::White)
            .bg(PURPLE)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let button = Paragraph::new(Span::styled(" Predict Entities ", style))
        .alignment(Alignment::Left);
    f.render_widget(button, area);
}

fn render_entities(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title = format!("Detected Entities ({})", app.predicted_entities.len());
    let block = titled_block(&title, Color::Cyan);

    if app.predicted_entities.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No entities detected yet",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block)
        .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem<'_>> = app
        .predicted_entities
        .iter()
        .map(|entity| {
            let color = prediction_color(entity.entity_type);
            ListItem::new(TextLine::from(vec![
                Span::styled(
                    format!(" {} ", entity.entity_type.label()),
                    Style::default()
                        .fg(Color::White)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(entity.text.as_str(), Style::default().fg(color)),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn render_examples(app: &App, f: &mut Frame<'_>, area: Rect) {
    let items: Vec<ListItem<'_>> = EXAMPLE_TEXTS
        .iter()
        .enumerate()
        .map(|(index, example)| {
            let (prefix, style) = if index == app.example_index {
                (
                    "> ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(Color::Gray))
            };
            ListItem::new(Text::from(vec![
                TextLine::from(Span::styled(format!("{prefix}{example}"), style)),
                TextLine::from(""),
            ]))
        })
        .collect();

    let list = List::new(items).block(titled_block("Quick Examples", Color::Cyan));
    f.render_widget(list, area);
}
