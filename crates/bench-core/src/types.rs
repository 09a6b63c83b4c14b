use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged multimeter reading with the ambient temperature at the time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub timestamp: DateTime<Utc>,
    /// Volts
    pub voltage: f64,
    /// Degrees Celsius
    pub temperature: f64,
}

impl Reading {
    pub fn new(timestamp: DateTime<Utc>, voltage: f64, temperature: f64) -> Self {
        Self {
            timestamp,
            voltage,
            temperature,
        }
    }
}

/// Column views over a slice of readings
pub trait ReadingColumns {
    fn voltages(&self) -> Vec<f64>;
    fn temperatures(&self) -> Vec<f64>;
    fn timestamps(&self) -> Vec<DateTime<Utc>>;
}

impl ReadingColumns for [Reading] {
    fn voltages(&self) -> Vec<f64> {
        self.iter().map(|r| r.voltage).collect()
    }

    fn temperatures(&self) -> Vec<f64> {
        self.iter().map(|r| r.temperature).collect()
    }

    fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.iter().map(|r| r.timestamp).collect()
    }
}
