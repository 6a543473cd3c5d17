use crate::api::MetricsSnapshot;
use crate::ui::widgets::charts::{basis_points, render_labelled_bars, PURPLE, TEAL};
use crate::view::{comparison_rows, format_percent, HEADLINE_DECIMALS};
use ratatui::layout::{Direction, Rect};
use ratatui::Frame;

pub fn render_comparison(metrics: &MetricsSnapshot, f: &mut Frame<'_>, area: Rect) {
    let entries = comparison_rows(metrics)
        .into_iter()
        .map(|row| {
            (
                row.model.to_string(),
                basis_points(row.f1),
                format_percent(row.f1, HEADLINE_DECIMALS),
                if row.is_ours { TEAL } else { PURPLE },
            )
        })
        .collect::<Vec<_>>();

    render_labelled_bars(
        f,
        area,
        "Model Comparison (F1-Score)",
        &entries,
        Direction::Horizontal,
        Some(basis_points(1.0)),
    );
}
