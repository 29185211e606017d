// src/config/metrics.rs
use serde::{Serialize, Deserialize};
use std::fmt;

/// Six-axis strategic profile attached to every product.
///
/// Scores are conventionally in `[0, 100]` but nothing here enforces it;
/// generators are responsible for staying in range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductMetrics {
    pub demand: u32,
    pub differentiation: u32,
    pub feasibility: u32,
    pub monetization: u32,
    pub stickiness: u32,
    pub competition: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricDimension {
    Demand,
    Differentiation,
    Feasibility,
    Monetization,
    Stickiness,
    Competition,
}

impl MetricDimension {
    // Radar order, clockwise from the top
    pub const ALL: [MetricDimension; 6] = [
        MetricDimension::Demand,
        MetricDimension::Differentiation,
        MetricDimension::Feasibility,
        MetricDimension::Monetization,
        MetricDimension::Stickiness,
        MetricDimension::Competition,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetricDimension::Demand => "Demand",
            MetricDimension::Differentiation => "Differentiation",
            MetricDimension::Feasibility => "Feasibility",
            MetricDimension::Monetization => "Monetization",
            MetricDimension::Stickiness => "Stickiness",
            MetricDimension::Competition => "Competition",
        }
    }
}

impl fmt::Display for MetricDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ProductMetrics {
    pub fn get(&self, dimension: MetricDimension) -> u32 {
        match dimension {
            MetricDimension::Demand => self.demand,
            MetricDimension::Differentiation => self.differentiation,
            MetricDimension::Feasibility => self.feasibility,
            MetricDimension::Monetization => self.monetization,
            MetricDimension::Stickiness => self.stickiness,
            MetricDimension::Competition => self.competition,
        }
    }

    /// Build a profile by asking `score` for each dimension in radar order.
    pub fn from_fn(mut score: impl FnMut(MetricDimension) -> u32) -> Self {
        Self {
            demand: score(MetricDimension::Demand),
            differentiation: score(MetricDimension::Differentiation),
            feasibility: score(MetricDimension::Feasibility),
            monetization: score(MetricDimension::Monetization),
            stickiness: score(MetricDimension::Stickiness),
            competition: score(MetricDimension::Competition),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetricDimension, u32)> + '_ {
        MetricDimension::ALL.iter().map(move |d| (*d, self.get(*d)))
    }

    /// Compact JSON form used when describing a product to the insight service.
    pub fn to_json(&self) -> String {
        // Plain integer fields cannot fail to serialize
        serde_json::to_string(self).unwrap_or_default()
    }
}
