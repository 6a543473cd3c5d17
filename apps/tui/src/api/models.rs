use crate::api::error::{LoadError, PredictionError};
use crate::domain::EntityType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub support: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDistribution {
    pub chemical: u64,
    pub disease: u64,
}

impl EntityDistribution {
    pub const fn count(&self, entity_type: EntityType) -> u64 {
        match entity_type {
            EntityType::Chemical => self.chemical,
            EntityType::Disease => self.disease,
        }
    }

    pub const fn total(&self) -> u64 {
        self.chemical + self.disease
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochLoss {
    pub epoch: u32,
    pub train_loss: f64,
    pub val_loss: f64,
}

/// Evaluation results served by `GET /metrics`. Loaded once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub overall: OverallMetrics,
    pub chemical: EntityMetrics,
    pub disease: EntityMetrics,
    pub entity_distribution: EntityDistribution,
    pub training_progress: Vec<EpochLoss>,
}

impl MetricsSnapshot {
    pub const fn entity(&self, entity_type: EntityType) -> &EntityMetrics {
        match entity_type {
            EntityType::Chemical => &self.chemical,
            EntityType::Disease => &self.disease,
        }
    }

    /// Rejects fractions outside `[0, 1]` and non-finite losses.
    pub fn validate(&self) -> Result<(), LoadError> {
        let fractions = [
            ("overall.precision", self.overall.precision),
            ("overall.recall", self.overall.recall),
            ("overall.f1_score", self.overall.f1_score),
            ("chemical.precision", self.chemical.precision),
            ("chemical.recall", self.chemical.recall),
            ("chemical.f1_score", self.chemical.f1_score),
            ("disease.precision", self.disease.precision),
            ("disease.recall", self.disease.recall),
            ("disease.f1_score", self.disease.f1_score),
        ];

        for (name, value) in fractions {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(LoadError::Invalid(format!("{name} = {value}")));
            }
        }

        for point in &self.training_progress {
            if !point.train_loss.is_finite() || !point.val_loss.is_finite() {
                return Err(LoadError::Invalid(format!(
                    "non-finite loss at epoch {}",
                    point.epoch
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictedEntity {
    pub text: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
}

/// Body of `POST /api/predict`. The inference server expects positional inputs.
#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub data: [&'a str; 1],
}

impl<'a> PredictRequest<'a> {
    pub const fn new(text: &'a str) -> Self {
        Self { data: [text] }
    }
}

/// `{"data": [[[text, type], ...]]}`; `data` and `data[0]` may be absent or null.
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub data: Option<Vec<Option<Vec<(String, String)>>>>,
}

impl PredictResponse {
    /// Pairs in response order. A missing first output is an empty list; any
    /// label other than Chemical or Disease fails the whole response.
    pub fn into_entities(self) -> Result<Vec<PredictedEntity>, PredictionError> {
        let Some(pairs) = self.data.and_then(|outputs| outputs.into_iter().next().flatten()) else {
            return Ok(Vec::new());
        };

        pairs
            .into_iter()
            .map(|(text, label)| -> Result<PredictedEntity, PredictionError> {
                let entity_type =
                    EntityType::parse(&label).ok_or(PredictionError::UnknownLabel(label))?;
                Ok(PredictedEntity { text, entity_type })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<Vec<PredictedEntity>, PredictionError> {
        serde_json::from_str::<PredictResponse>(body)?.into_entities()
    }

    #[test]
    fn test_missing_first_output_is_empty() -> Result<(), PredictionError> {
        assert!(parse(r"{}")?.is_empty());
        assert!(parse(r#"{"data": null}"#)?.is_empty());
        assert!(parse(r#"{"data": []}"#)?.is_empty());
        assert!(parse(r#"{"data": [null]}"#)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_pairs_keep_response_order() -> Result<(), PredictionError> {
        let entities = parse(r#"{"data": [[["warfarin", "Chemical"], ["stroke", "Disease"]]]}"#)?;
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].text, "warfarin");
        assert_eq!(entities[1].entity_type, EntityType::Disease);
        Ok(())
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let result = parse(r#"{"data": [[["BRCA1", "Gene"]]]}"#);
        assert!(matches!(result, Err(PredictionError::UnknownLabel(label)) if label == "Gene"));
    }

    #[test]
    fn test_wrong_pair_shape_is_malformed() {
        let result = parse(r#"{"data": [[["aspirin"]]]}"#);
        assert!(matches!(result, Err(PredictionError::Malformed(_))));
    }

    #[test]
    fn test_request_wraps_text_in_data_array() -> Result<(), serde_json::Error> {
        let body = serde_json::to_value(PredictRequest::new("aspirin"))?;
        assert_eq!(body, serde_json::json!({ "data": ["aspirin"] }));
        Ok(())
    }

    #[test]
    fn test_validate_rejects_fraction_above_one() -> Result<(), serde_json::Error> {
        let snapshot: MetricsSnapshot = serde_json::from_value(serde_json::json!({
            "overall": { "precision": 1.2, "recall": 0.8, "f1_score": 0.8 },
            "chemical": { "precision": 0.9, "recall": 0.9, "f1_score": 0.9, "support": 10 },
            "disease": { "precision": 0.7, "recall": 0.7, "f1_score": 0.7, "support": 8 },
            "entity_distribution": { "chemical": 10, "disease": 8 },
            "training_progress": []
        }))?;
        assert!(matches!(snapshot.validate(), Err(LoadError::Invalid(_))));
        Ok(())
    }
}
