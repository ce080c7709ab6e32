use log::warn;
use thiserror::Error;

use crate::models::{MetricRow, MetricTable};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("metric source unavailable: {0}")]
    Unavailable(String),
}

/// Source of the KPI snapshot rendered by the dashboard.
///
/// Implementations may block (database query, HTTP call); the server always
/// calls them from the blocking pool.
pub trait MetricProvider: Send + Sync {
    fn fetch(&self) -> Result<MetricTable, ProviderError>;

    /// Never fails. An acquisition error degrades to an empty table.
    fn snapshot(&self) -> MetricTable {
        match self.fetch() {
            Ok(table) => table,
            Err(e) => {
                warn!("Error fetching data: {}", e);
                MetricTable::empty()
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticMetricProvider;

impl StaticMetricProvider {
    pub fn new() -> Self {
        StaticMetricProvider
    }
}

impl MetricProvider for StaticMetricProvider {
    fn fetch(&self) -> Result<MetricTable, ProviderError> {
        Ok(MetricTable::new(vec![
            MetricRow::new("Sales", 120000.0),
            MetricRow::new("Profit", 30000.0),
            MetricRow::new("Customer Satisfaction", 85.0),
        ]))
    }
}
