use async_trait::async_trait;
use crate::{BenchError, Reading};

/// Anything that can hand over a batch of logged readings: instrument drivers,
/// data loggers, files.
#[async_trait]
pub trait MeasurementSource: Send + Sync {
    async fn readings(&self) -> Result<Vec<Reading>, BenchError>;
}

/// In-memory source, mostly useful in tests and for replaying captured data
#[async_trait]
impl MeasurementSource for Vec<Reading> {
    async fn readings(&self) -> Result<Vec<Reading>, BenchError> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_vec_source_replays_readings() {
        let captured = vec![
            Reading::new(Utc::now(), 4.9981939, 23.0),
            Reading::new(Utc::now(), 4.9981985, 23.1),
        ];

        let source: Box<dyn MeasurementSource> = Box::new(captured.clone());
        let replayed = source.readings().await.unwrap();

        assert_eq!(replayed, captured);
    }
}
