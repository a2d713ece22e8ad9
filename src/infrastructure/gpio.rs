// Linux sysfs GPIO lines for the RGB LED
use crate::application::indicator::Indicator;
use crate::domain::error::{PipelineError, Result};
use linux_embedded_hal::SysfsPin;
use linux_embedded_hal::sysfs_gpio::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedPins {
    pub red: u64,
    pub green: u64,
    pub blue: u64,
}

fn open_output(number: u64) -> Result<SysfsPin> {
    let pin = SysfsPin::new(number);
    pin.export()
        .map_err(|e| PipelineError::Gpio(format!("export of GPIO {} failed: {}", number, e)))?;
    pin.set_direction(Direction::Out)
        .map_err(|e| PipelineError::Gpio(format!("GPIO {} cannot be set to output: {}", number, e)))?;
    Ok(pin)
}

/// Export the three LED lines as outputs and hand them to an indicator.
pub fn open_indicator(pins: LedPins) -> Result<Indicator<SysfsPin>> {
    tracing::debug!("opening LED GPIO r={} g={} b={}", pins.red, pins.green, pins.blue);
    Ok(Indicator::new(
        open_output(pins.red)?,
        open_output(pins.green)?,
        open_output(pins.blue)?,
    ))
}
