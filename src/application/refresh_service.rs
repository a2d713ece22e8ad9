// Refresh service - One fetch, render, display and indicate cycle
use crate::application::display_adapter::DisplayAdapter;
use crate::application::forecast_source::ForecastSource;
use crate::application::indicator::Indicator;
use crate::application::renderer::Renderer;
use crate::domain::error::Result;
use crate::domain::led::LedColor;
use chrono::{DateTime, TimeZone};
use embedded_hal::digital::OutputPin;
use std::sync::Arc;

pub struct RefreshService<P: OutputPin> {
    source: Arc<dyn ForecastSource>,
    renderer: Renderer,
    display: DisplayAdapter,
    indicator: Indicator<P>,
}

impl<P: OutputPin> RefreshService<P> {
    pub fn new(
        source: Arc<dyn ForecastSource>,
        renderer: Renderer,
        display: DisplayAdapter,
        indicator: Indicator<P>,
    ) -> Self {
        Self {
            source,
            renderer,
            display,
            indicator,
        }
    }

    /// Run the pipeline once and return the colour shown on the LED.
    pub async fn run<Tz>(&mut self, now: DateTime<Tz>) -> Result<LedColor>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        self.display.clear()?;

        let reading = self.source.fetch_reading().await?;
        tracing::info!(
            "cloth drying index: today={} tomorrow={} regional={}",
            reading.today,
            reading.tomorrow,
            reading.regional.join(",")
        );

        // Reject a non-numeric label before anything reaches the panel
        let today = reading.today_index()?;

        let bitmap = self.renderer.render(&reading, &now, self.display.size());
        self.display.display(&bitmap)?;
        self.display.update()?;

        let color = LedColor::for_index(today);
        self.indicator.show(color)?;
        tracing::info!("LED set to {:?} for index {}", color, today);

        Ok(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::display_adapter::fake::{PanelCall, RecordingPanel};
    use crate::application::indicator::fake::FakePin;
    use crate::application::renderer::Renderer;
    use crate::application::renderer::fake::{BlockFace, Field};
    use crate::domain::error::PipelineError;
    use crate::domain::forecast::ForecastReading;
    use crate::infrastructure::extractor::extract_reading;
    use async_trait::async_trait;
    use chrono::Utc;

    const SAMPLE: &str = include_str!("../../fixtures/cloth_dried.html");

    struct StaticSource {
        html: String,
    }

    #[async_trait]
    impl ForecastSource for StaticSource {
        async fn fetch_reading(&self) -> Result<ForecastReading> {
            extract_reading(&self.html)
        }
    }

    struct Rig {
        service: RefreshService<FakePin>,
        panel_calls: std::sync::Arc<std::sync::Mutex<Vec<PanelCall>>>,
        frames: std::sync::Arc<std::sync::Mutex<Vec<crate::domain::bitmap::Bitmap>>>,
        pins: [FakePin; 3],
    }

    fn rig(html: String) -> Rig {
        let panel = RecordingPanel::new("EPD 2.7", 264, 176);
        let panel_calls = panel.calls.clone();
        let frames = panel.frames.clone();
        let display = DisplayAdapter::new(Box::new(panel), "EPD 2.7").unwrap();
        let pins = [FakePin::default(), FakePin::default(), FakePin::default()];
        let indicator = Indicator::new(pins[0].clone(), pins[1].clone(), pins[2].clone());
        let service = RefreshService::new(
            Arc::new(StaticSource { html }),
            Renderer::new(Box::new(BlockFace)),
            display,
            indicator,
        );
        Rig {
            service,
            panel_calls,
            frames,
            pins,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 7, 30, 0).unwrap()
    }

    #[tokio::test]
    async fn test_end_to_end_with_fixture() {
        let mut rig = rig(SAMPLE.to_string());

        let color = rig.service.run(now()).await.unwrap();

        // fixture has today = 90
        assert_eq!(color, LedColor::Red);
        let levels: Vec<_> = rig.pins.iter().map(|p| p.level()).collect();
        assert_eq!(levels, vec![Some(true), Some(false), Some(false)]);

        let calls = rig.panel_calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0], PanelCall::Clear);
        assert!(matches!(calls[1], PanelCall::Display(n) if n > 0));
        assert_eq!(calls[2], PanelCall::Update);

        let frames = rig.frames.lock().unwrap();
        assert_eq!(frames.len(), 1);
        let frame = &frames[0];
        assert_eq!(frame.size(), (264, 176));

        let reading = extract_reading(SAMPLE).unwrap();
        let expected = Renderer::new(Box::new(BlockFace)).render(&reading, &now(), (264, 176));
        assert_eq!(*frame, expected);
        for field in Field::ALL {
            field.assert_drawn(frame, &reading, &now());
        }
    }

    #[tokio::test]
    async fn test_parse_failure_stops_after_clear() {
        let html = SAMPLE.replace("exponentLargeRight", "somethingElse");
        let mut rig = rig(html);

        let err = rig.service.run(now()).await.unwrap_err();

        assert!(matches!(err, PipelineError::Parse(_)));
        assert_eq!(*rig.panel_calls.lock().unwrap(), vec![PanelCall::Clear]);
        assert!(rig.pins.iter().all(|p| p.level().is_none()));
    }

    #[tokio::test]
    async fn test_non_numeric_today_fails_before_display() {
        let html = SAMPLE.replace("<dd>90</dd>", "<dd>--</dd>");
        let mut rig = rig(html);

        let err = rig.service.run(now()).await.unwrap_err();

        assert!(matches!(err, PipelineError::Parse(_)));
        assert_eq!(*rig.panel_calls.lock().unwrap(), vec![PanelCall::Clear]);
    }
}
