// RGB LED indicator driven by three output pins
use crate::domain::error::{PipelineError, Result};
use crate::domain::led::LedColor;
use embedded_hal::digital::{OutputPin, PinState};

pub struct Indicator<P: OutputPin> {
    red: P,
    green: P,
    blue: P,
}

impl<P: OutputPin> Indicator<P> {
    pub fn new(red: P, green: P, blue: P) -> Self {
        Self { red, green, blue }
    }

    /// Drive all three channels for `color`.
    pub fn show(&mut self, color: LedColor) -> Result<()> {
        let (r, g, b) = color.levels();
        tracing::debug!("LED {:?} -> r={} g={} b={}", color, r, g, b);

        for (pin, level) in [(&mut self.red, r), (&mut self.green, g), (&mut self.blue, b)] {
            pin.set_state(PinState::from(level))
                .map_err(|e| PipelineError::Gpio(format!("{:?}", e)))?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::fake::FakePin;
    use super::*;

    #[test]
    fn test_show_sets_every_channel() {
        let (r, g, b) = (FakePin::default(), FakePin::default(), FakePin::default());
        let mut indicator = Indicator::new(r.clone(), g.clone(), b.clone());

        indicator.show(LedColor::Red).unwrap();
        assert_eq!((r.level(), g.level(), b.level()), (Some(true), Some(false), Some(false)));

        indicator.show(LedColor::Blue).unwrap();
        assert_eq!((r.level(), g.level(), b.level()), (Some(false), Some(false), Some(true)));

        indicator.show(LedColor::for_index(51)).unwrap();
        assert_eq!((r.level(), g.level(), b.level()), (Some(false), Some(true), Some(false)));
    }
}
