use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    pub name: String,
    pub value: f64,
}

impl MetricRow {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        MetricRow {
            name: name.into(),
            value,
        }
    }
}

/// Ordered snapshot of KPI rows. Row order is preserved all the way to the chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricTable {
    rows: Vec<MetricRow>,
}

impl MetricTable {
    pub fn new(rows: Vec<MetricRow>) -> Self {
        MetricTable { rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.name.clone()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.value).collect()
    }
}

impl FromIterator<MetricRow> for MetricTable {
    fn from_iter<I: IntoIterator<Item = MetricRow>>(iter: I) -> Self {
        MetricTable::new(iter.into_iter().collect())
    }
}
