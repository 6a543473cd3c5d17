use crate::ui::widgets::charts::PURPLE;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Polar plot of `(label, value)` pairs on a 0-100 scale.
pub fn render_performance_radar(
    f: &mut Frame<'_>,
    area: Rect,
    points: &[(&'static str, f64)],
    animation: f64,
) {
    let block = Block::default()
        .title("Performance Metrics")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 8 || inner.height < 6 || points.is_empty() {
        let paragraph = Paragraph::new("Not enough room for the radar")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    // Terminal cells are about twice as tall as wide
    let width = f64::from(inner.width);
    let height = f64::from(inner.height) * 2.0;

    #[allow(clippy::cast_precision_loss)]
    let step = TAU / points.len() as f64;
    let vertex = |index: usize, scale: f64, max_radius: f64| {
        #[allow(clippy::cast_precision_loss)]
        let angle = FRAC_PI_2 - step * index as f64;
        (
            angle.cos().mul_add(max_radius * scale, width / 2.0),
            angle.sin().mul_add(max_radius * scale, height / 2.0),
        )
    };

    f.render_widget(
        Canvas::default()
            .paint(|ctx| {
                let max_radius = width.min(height) / 2.0 * 0.7;
                let center_x = width / 2.0;
                let center_y = height / 2.0;

                for i in 1..=4 {
                    ctx.draw(&Circle {
                        x: center_x,
                        y: center_y,
                        radius: max_radius * (f64::from(i) / 4.0),
                        color: Color::DarkGray,
                    });
                }

                for index in 0..points.len() {
                    let (x2, y2) = vertex(index, 1.0, max_radius);
                    ctx.draw(&CanvasLine {
                        x1: center_x,
                        y1: center_y,
                        x2,
                        y2,
                        color: Color::DarkGray,
                    });
                }

                ctx.layer();

                // Pulse follows the animation counter
                let pulse = (animation * 0.8).sin().mul_add(0.015, 0.985);
                for (index, (_, value)) in points.iter().enumerate() {
                    let next = (index + 1) % points.len();
                    let (x1, y1) = vertex(index, value / 100.0 * pulse, max_radius);
                    let (x2, y2) = vertex(next, points[next].1 / 100.0 * pulse, max_radius);
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: PURPLE,
                    });
                }

                for (index, (label, value)) in points.iter().enumerate() {
                    let (x, y) = vertex(index, 1.15, max_radius);
                    ctx.print(
                        x,
                        y,
                        TextLine::from(vec![
                            Span::styled(*label, Style::default().fg(Color::Gray)),
                            Span::styled(format!(" {value:.1}"), Style::default().fg(Color::White)),
                        ]),
                    );
                }
            })
            .x_bounds([0.0, width])
            .y_bounds([0.0, height]),
        inner,
    );
}
