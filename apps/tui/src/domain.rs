use serde::{Deserialize, Serialize};

/// Entity labels produced by the BC5CDR-trained model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Chemical,
    Disease,
}

impl EntityType {
    pub const ALL: [Self; 2] = [Self::Chemical, Self::Disease];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "chemical" => Some(Self::Chemical),
            "disease" => Some(Self::Disease),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Chemical => "Chemical",
            Self::Disease => "Disease",
        }
    }
}

/// Dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Analysis,
    Training,
    Comparison,
    Details,
    Predict,
}

impl Tab {
    pub const ALL: [Self; 6] = [
        Self::Overview,
        Self::Analysis,
        Self::Training,
        Self::Comparison,
        Self::Details,
        Self::Predict,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Analysis => "analysis",
            Self::Training => "training",
            Self::Comparison => "comparison",
            Self::Details => "details",
            Self::Predict => "predict",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Analysis => 1,
            Self::Training => 2,
            Self::Comparison => 3,
            Self::Details => 4,
            Self::Predict => 5,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Overview),
            1 => Some(Self::Analysis),
            2 => Some(Self::Training),
            3 => Some(Self::Comparison),
            4 => Some(Self::Details),
            5 => Some(Self::Predict),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Analysis => "Analysis",
            Self::Training => "Training",
            Self::Comparison => "Comparison",
            Self::Details => "Details",
            Self::Predict => "Live Prediction",
        }
    }

    pub const fn next(self) -> Self {
        match Self::from_index((self.index() + 1) % Self::ALL.len()) {
            Some(tab) => tab,
            None => Self::Overview,
        }
    }

    pub const fn prev(self) -> Self {
        let len = Self::ALL.len();
        match Self::from_index((self.index() + len - 1) % len) {
            Some(tab) => tab,
            None => Self::Overview,
        }
    }
}
