// Cloth-drying forecast domain model
use super::error::{PipelineError, Result};

pub const REGION_COUNT: usize = 5;

/// One scrape of the cloth-drying index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastReading {
    pub today: String,
    pub tomorrow: String,
    /// Amedas regional readings, digits only.
    pub regional: [String; REGION_COUNT],
}

impl ForecastReading {
    pub fn new(today: String, tomorrow: String, regional: [String; REGION_COUNT]) -> Self {
        Self {
            today,
            tomorrow,
            regional,
        }
    }

    /// Today's label as an integer index. Labels that are not plain
    /// integers are rejected rather than coerced.
    pub fn today_index(&self) -> Result<u32> {
        let label = self.today.trim();
        label.parse::<u32>().map_err(|_| {
            PipelineError::Parse(format!("today's index {:?} is not an integer", label))
        })
    }
}
