use crate::api::MetricsSnapshot;
use crate::ui::widgets::charts::{titled_block, PURPLE, TEAL};
use crate::view::{loss_bounds, training_series};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

pub fn render_training(metrics: &MetricsSnapshot, f: &mut Frame<'_>, area: Rect) {
    let title = format!(
        "Training Progress ({} Epochs)",
        metrics.training_progress.len()
    );

    if metrics.training_progress.is_empty() {
        let paragraph = Paragraph::new("No training history available")
            .block(titled_block(&title, Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let (train, val) = training_series(metrics);
    let ([first_epoch, last_epoch], [_, max_loss]) = loss_bounds(metrics);

    let datasets = vec![
        Dataset::default()
            .name("Training Loss")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(PURPLE))
            .data(&train),
        Dataset::default()
            .name("Validation Loss")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(TEAL))
            .data(&val),
    ];

    let x_labels = vec![
        Span::raw(format!("{first_epoch:.0}")),
        Span::raw(format!("{:.0}", (first_epoch + last_epoch) / 2.0)),
        Span::raw(format!("{last_epoch:.0}")),
    ];
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{:.3}", max_loss / 2.0)),
        Span::raw(format!("{max_loss:.3}")),
    ];

    let chart = Chart::new(datasets)
        .block(titled_block(&title, Color::Cyan))
        .x_axis(
            Axis::default()
                .title("Epoch")
                .style(Style::default().fg(Color::Gray))
                .bounds([first_epoch, last_epoch])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Loss")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, max_loss])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}
