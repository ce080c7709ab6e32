//! Metric table to Plotly bar chart conversion.
//!
//! The serialized form is the `{ "data": [...], "layout": {...} }` object that
//! `Plotly.newPlot` consumes directly. Trace and layout fields follow what
//! Plotly Express emits for a single-series bar chart.

use log::error;
use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::models::MetricTable;

pub const DEFAULT_TITLE: &str = "Business KPI Dashboard";

const X_FIELD: &str = "metric";
const Y_FIELD: &str = "value";
const BAR_COLOR: &str = "#636efa";
const EMPTY_OBJECT: &str = "{}";

// Largest integer an f64 (and a JS number) represents exactly.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("metric table is empty")]
    EmptyTable,
    #[error("chart encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDescription {
    pub data: Vec<BarTrace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub alignmentgroup: String,
    pub hovertemplate: String,
    pub legendgroup: String,
    pub marker: Marker,
    pub name: String,
    pub offsetgroup: String,
    pub orientation: String,
    pub showlegend: bool,
    pub textposition: String,
    pub x: Vec<String>,
    pub xaxis: String,
    #[serde(serialize_with = "serialize_numbers")]
    pub y: Vec<f64>,
    pub yaxis: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub barmode: String,
    pub legend: Legend,
    pub margin: Margin,
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub tracegroupgap: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
    pub t: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub anchor: String,
    pub domain: [f64; 2],
    pub title: Title,
}

impl Axis {
    fn new(anchor: &str, title: &str) -> Self {
        Axis {
            anchor: anchor.to_string(),
            domain: [0.0, 1.0],
            title: Title {
                text: title.to_string(),
            },
        }
    }
}

/// Integral values go out as JSON integers so the client sees `120000`, not `120000.0`.
fn serialize_numbers<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(values.len()))?;
    for v in values {
        if v.fract() == 0.0 && v.abs() < MAX_EXACT_INT {
            seq.serialize_element(&(*v as i64))?;
        } else {
            seq.serialize_element(v)?;
        }
    }
    seq.end()
}

/// JSON text of a chart description, or the `{}` sentinel when the chart
/// could not be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedChart(String);

impl SerializedChart {
    pub fn empty() -> Self {
        SerializedChart(EMPTY_OBJECT.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0 == EMPTY_OBJECT
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SerializedChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct ChartSerializer {
    title: String,
}

impl Default for ChartSerializer {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl ChartSerializer {
    pub fn new(title: impl Into<String>) -> Self {
        ChartSerializer {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn describe(&self, table: &MetricTable) -> Result<ChartDescription, ChartError> {
        if table.is_empty() {
            return Err(ChartError::EmptyTable);
        }

        let trace = BarTrace {
            kind: ChartKind::Bar,
            alignmentgroup: "True".to_string(),
            hovertemplate: format!("{}=%{{x}}<br>{}=%{{y}}<extra></extra>", X_FIELD, Y_FIELD),
            legendgroup: String::new(),
            marker: Marker {
                color: BAR_COLOR.to_string(),
            },
            name: String::new(),
            offsetgroup: String::new(),
            orientation: "v".to_string(),
            showlegend: false,
            textposition: "auto".to_string(),
            x: table.names(),
            xaxis: "x".to_string(),
            y: table.values(),
            yaxis: "y".to_string(),
        };

        Ok(ChartDescription {
            data: vec![trace],
            layout: Layout {
                barmode: "relative".to_string(),
                legend: Legend { tracegroupgap: 0 },
                margin: Margin { t: 60 },
                title: Title {
                    text: self.title.clone(),
                },
                xaxis: Axis::new("y", X_FIELD),
                yaxis: Axis::new("x", Y_FIELD),
            },
        })
    }

    pub fn try_serialize(&self, table: &MetricTable) -> Result<SerializedChart, ChartError> {
        let description = self.describe(table)?;
        Ok(SerializedChart(serde_json::to_string(&description)?))
    }

    /// Falls back to the `{}` sentinel on any chart error.
    pub fn serialize(&self, table: &MetricTable) -> SerializedChart {
        self.try_serialize(table).unwrap_or_else(|e| {
            error!("Error generating plot: {}", e);
            SerializedChart::empty()
        })
    }
}
