use async_trait::async_trait;
use bench_core::{BenchError, MeasurementSource, Reading};
use std::path::PathBuf;

/// Readings exported as a JSON array of `{timestamp, voltage, temperature}` objects
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MeasurementSource for JsonFileSource {
    async fn readings(&self) -> Result<Vec<Reading>, BenchError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            BenchError::SourceError(format!("failed to read {}: {}", self.path.display(), e))
        })?;

        let readings: Vec<Reading> = serde_json::from_str(&raw).map_err(|e| {
            BenchError::InvalidData(format!("{} is not a reading array: {}", self.path.display(), e))
        })?;

        tracing::info!(count = readings.len(), path = %self.path.display(), "loaded readings");
        Ok(readings)
    }
}
