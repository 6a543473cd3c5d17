//! Chart-ready projections of a [`MetricsSnapshot`].
//!
//! Everything here is a pure function of the loaded snapshot plus the fixed
//! reference data below. Nothing is cached; each frame recomputes what the
//! active tab needs.

use crate::api::MetricsSnapshot;
use crate::domain::EntityType;
use serde::Serialize;

/// Decimal places for headline metric cards and detail tables.
pub const HEADLINE_DECIMALS: usize = 2;
/// Decimal places for the per-entity F1 bars on the analysis tab.
pub const ENTITY_BAR_DECIMALS: usize = 1;

pub const OUR_MODEL: &str = "BioBERT (Ours)";

/// Published F1 scores the loaded model is compared against.
pub const BASELINES: [(&str, f64); 3] = [
    ("Rule-Based", 0.45),
    ("BiLSTM-CRF", 0.76),
    ("SOTA", 0.90),
];

pub const TOP_ENTITIES: [(&str, u64, EntityType); 15] = [
    ("aspirin", 45, EntityType::Chemical),
    ("diabetes", 42, EntityType::Disease),
    ("hypertension", 38, EntityType::Disease),
    ("metformin", 35, EntityType::Chemical),
    ("warfarin", 32, EntityType::Chemical),
    ("cancer", 30, EntityType::Disease),
    ("insulin", 28, EntityType::Chemical),
    ("pneumonia", 25, EntityType::Disease),
    ("cisplatin", 23, EntityType::Chemical),
    ("cardiovascular disease", 22, EntityType::Disease),
    ("atorvastatin", 20, EntityType::Chemical),
    ("asthma", 18, EntityType::Disease),
    ("lisinopril", 17, EntityType::Chemical),
    ("hepatitis", 15, EntityType::Disease),
    ("ibuprofen", 14, EntityType::Chemical),
];

pub const ERROR_ANALYSIS: [(&str, u64); 5] = [
    ("Abbreviation Errors", 45),
    ("Overlapping Entities", 38),
    ("Rare Terminology", 28),
    ("Context Ambiguity", 22),
    ("Boundary Errors", 18),
];

pub const EXAMPLE_TEXTS: [&str; 5] = [
    "Patient diagnosed with diabetes mellitus and prescribed metformin 500mg twice daily.",
    "Aspirin and warfarin are anticoagulants used to prevent blood clots.",
    "Chemotherapy with cisplatin was initiated for ovarian cancer treatment.",
    "Patient with hypertension taking lisinopril and experiencing headache.",
    "Atorvastatin reduces cholesterol levels and prevents cardiovascular disease.",
];

/// Formats a fraction in `[0, 1]` as a percentage with `decimals` places.
/// Ties round half up (81.25 at one place is "81.3%").
pub fn format_percent(fraction: f64, decimals: usize) -> String {
    let scale = 10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let percent = (fraction * 100.0 * scale).round() / scale;
    format!("{percent:.decimals$}%")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelScore {
    pub model: &'static str,
    pub f1: f64,
    pub is_ours: bool,
}

/// Baselines with the loaded model slotted in between BiLSTM-CRF and SOTA.
pub fn comparison_rows(snapshot: &MetricsSnapshot) -> Vec<ModelScore> {
    let [rule_based, bilstm, sota] = BASELINES;
    let baseline = |(model, f1): (&'static str, f64)| ModelScore {
        model,
        f1,
        is_ours: false,
    };

    vec![
        baseline(rule_based),
        baseline(bilstm),
        ModelScore {
            model: OUR_MODEL,
            f1: snapshot.overall.f1_score,
            is_ours: true,
        },
        baseline(sota),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub metric: &'static str,
    pub chemical: f64,
    pub disease: f64,
}

pub fn entity_metric_rows(snapshot: &MetricsSnapshot) -> [MetricRow; 3] {
    let chemical = &snapshot.chemical;
    let disease = &snapshot.disease;

    [
        MetricRow {
            metric: "Precision",
            chemical: chemical.precision,
            disease: disease.precision,
        },
        MetricRow {
            metric: "Recall",
            chemical: chemical.recall,
            disease: disease.recall,
        },
        MetricRow {
            metric: "F1-Score",
            chemical: chemical.f1_score,
            disease: disease.f1_score,
        },
    ]
}

/// Performance profile on a 0-100 scale.
pub fn radar_points(snapshot: &MetricsSnapshot) -> [(&'static str, f64); 5] {
    [
        ("Precision", snapshot.overall.precision * 100.0),
        ("Recall", snapshot.overall.recall * 100.0),
        ("F1-Score", snapshot.overall.f1_score * 100.0),
        ("Chemical F1", snapshot.chemical.f1_score * 100.0),
        ("Disease F1", snapshot.disease.f1_score * 100.0),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionShare {
    pub entity_type: EntityType,
    pub count: u64,
    pub share: f64,
}

/// Per-type share of all annotated entities. A zero total yields zero shares.
pub fn distribution_shares(snapshot: &MetricsSnapshot) -> Vec<DistributionShare> {
    let distribution = &snapshot.entity_distribution;
    let total = distribution.total();

    EntityType::ALL
        .iter()
        .map(|&entity_type| {
            let count = distribution.count(entity_type);
            #[allow(clippy::cast_precision_loss)]
            let share = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            };
            DistributionShare {
                entity_type,
                count,
                share,
            }
        })
        .collect()
}

/// `(train, validation)` loss series as `(epoch, loss)` points.
pub fn training_series(snapshot: &MetricsSnapshot) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    snapshot
        .training_progress
        .iter()
        .map(|point| {
            let epoch = f64::from(point.epoch);
            ((epoch, point.train_loss), (epoch, point.val_loss))
        })
        .unzip()
}

/// Axis bounds `([min_epoch, max_epoch], [0, max_loss])` for the loss chart.
pub fn loss_bounds(snapshot: &MetricsSnapshot) -> ([f64; 2], [f64; 2]) {
    let progress = &snapshot.training_progress;

    let first = progress.first().map_or(0.0, |point| f64::from(point.epoch));
    let last = progress.last().map_or(1.0, |point| f64::from(point.epoch));
    let max_loss = progress
        .iter()
        .flat_map(|point| [point.train_loss, point.val_loss])
        .fold(0.0_f64, f64::max);

    let x = if last > first { [first, last] } else { [first, first + 1.0] };
    let y = if max_loss > 0.0 { [0.0, max_loss] } else { [0.0, 1.0] };
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_snapshot;

    #[test]
    fn test_percent_uses_requested_precision() {
        assert_eq!(format_percent(0.8765, HEADLINE_DECIMALS), "87.65%");
        assert_eq!(format_percent(0.9217, ENTITY_BAR_DECIMALS), "92.2%");
        assert_eq!(format_percent(1.0, HEADLINE_DECIMALS), "100.00%");
        assert_eq!(format_percent(0.0, ENTITY_BAR_DECIMALS), "0.0%");
    }

    #[test]
    fn test_percent_rounds_ties_up() {
        assert_eq!(format_percent(0.8125, ENTITY_BAR_DECIMALS), "81.3%");
        assert_eq!(format_percent(0.625, 0), "63%");
        assert_eq!(format_percent(0.125, 0), "13%");
    }

    #[test]
    fn test_comparison_places_loaded_f1_third() -> Result<(), serde_json::Error> {
        let snapshot = sample_snapshot()?;
        let rows = comparison_rows(&snapshot);

        let models: Vec<_> = rows.iter().map(|row| row.model).collect();
        assert_eq!(models, ["Rule-Based", "BiLSTM-CRF", OUR_MODEL, "SOTA"]);
        assert!(rows[2].is_ours);
        assert!((rows[2].f1 - 0.8765).abs() < f64::EPSILON);
        assert_eq!(rows.iter().filter(|row| row.is_ours).count(), 1);

        Ok(())
    }

    #[test]
    fn test_metric_rows_follow_entity_metrics() -> Result<(), serde_json::Error> {
        let snapshot = sample_snapshot()?;
        let [precision, recall, f1] = entity_metric_rows(&snapshot);

        assert!((precision.chemical - 0.9134).abs() < f64::EPSILON);
        assert!((recall.disease - 0.8472).abs() < f64::EPSILON);
        assert_eq!(f1.metric, "F1-Score");

        Ok(())
    }

    #[test]
    fn test_radar_points_scale_to_hundred() -> Result<(), serde_json::Error> {
        let snapshot = sample_snapshot()?;
        let points = radar_points(&snapshot);

        assert_eq!(points[3].0, "Chemical F1");
        assert!((points[3].1 - 92.17).abs() < 1e-9);

        Ok(())
    }

    #[test]
    fn test_distribution_shares_sum_to_one() -> Result<(), serde_json::Error> {
        let snapshot = sample_snapshot()?;
        let shares = distribution_shares(&snapshot);

        let total: f64 = shares.iter().map(|share| share.share).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(shares[0].count, 5385);

        Ok(())
    }

    #[test]
    fn test_distribution_with_no_entities_is_zero() -> Result<(), serde_json::Error> {
        let mut snapshot = sample_snapshot()?;
        snapshot.entity_distribution.chemical = 0;
        snapshot.entity_distribution.disease = 0;

        assert!(distribution_shares(&snapshot)
            .iter()
            .all(|share| share.share == 0.0));

        Ok(())
    }

    #[test]
    fn test_training_series_and_bounds() -> Result<(), serde_json::Error> {
        let snapshot = sample_snapshot()?;
        let (train, val) = training_series(&snapshot);

        assert_eq!(train.len(), 3);
        assert_eq!(val[2], (3.0, 0.149));

        let (x, y) = loss_bounds(&snapshot);
        assert_eq!(x, [1.0, 3.0]);
        assert_eq!(y, [0.0, 0.412]);

        Ok(())
    }
}
