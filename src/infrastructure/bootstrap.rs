// Bootstrap - Builds the refresh service from configuration in startup order
use crate::application::display_adapter::{DisplayAdapter, PanelDriver};
use crate::application::forecast_source::ForecastSource;
use crate::application::indicator::Indicator;
use crate::application::refresh_service::RefreshService;
use crate::application::renderer::Renderer;
use crate::domain::error::Result;
use crate::infrastructure::config::{AppConfig, SourceSettings};
use crate::infrastructure::fetcher::HttpFetcher;
use crate::infrastructure::fonts::FontResolver;
use crate::infrastructure::forecast_sources::{FileForecastSource, HttpForecastSource};
use crate::infrastructure::gpio::LedPins;
use embedded_hal::digital::OutputPin;
use std::path::Path;
use std::sync::Arc;

pub fn forecast_source(settings: &SourceSettings) -> Result<Arc<dyn ForecastSource>> {
    Ok(match &settings.fixture_path {
        Some(path) => Arc::new(FileForecastSource::new(path.clone())),
        None => {
            let fetcher = HttpFetcher::new(&settings.fetch_options())?;
            Arc::new(HttpForecastSource::new(fetcher, settings.url.clone()))
        }
    })
}

/// Font first, then LED pins, then the panel, then the source. A missing
/// font fails before either hardware opener runs.
pub fn assemble<P, I, D>(config: &AppConfig, open_indicator: I, open_panel: D) -> Result<RefreshService<P>>
where
    P: OutputPin,
    I: FnOnce(LedPins) -> Result<Indicator<P>>,
    D: FnOnce(&Path) -> Result<Box<dyn PanelDriver>>,
{
    let face = FontResolver::new(config.fonts.candidates.clone()).resolve()?;
    let renderer = Renderer::new(Box::new(face));

    let indicator = open_indicator(config.led.pins())?;

    let driver = open_panel(&config.panel.epd_path)?;
    let display = DisplayAdapter::new(driver, &config.panel.expected_model)?;

    let source = forecast_source(&config.source)?;

    Ok(RefreshService::new(source, renderer, display, indicator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::display_adapter::fake::{PanelCall, RecordingPanel};
    use crate::application::indicator::fake::FakePin;
    use crate::domain::error::PipelineError;
    use crate::domain::led::LedColor;
    use crate::infrastructure::fonts::fixture::mono_font;
    use chrono::{TimeZone, Utc};
    use std::cell::Cell;
    use std::path::PathBuf;

    fn fixture_config(fonts: Vec<PathBuf>) -> AppConfig {
        let mut config = AppConfig::default();
        config.fonts.candidates = fonts;
        config.source.fixture_path =
            Some(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/cloth_dried.html"));
        config
    }

    fn fake_pins(pins: LedPins) -> Result<Indicator<FakePin>> {
        assert_eq!(pins, LedPins { red: 6, green: 12, blue: 5 });
        Ok(Indicator::new(FakePin::default(), FakePin::default(), FakePin::default()))
    }

    #[test]
    fn test_missing_font_fails_before_hardware() {
        let config = fixture_config(vec![PathBuf::from("/nonexistent/FreeMonoBold.ttf")]);
        let pins_opened = Cell::new(false);
        let panel_opened = Cell::new(false);

        let result = assemble(
            &config,
            |pins| {
                pins_opened.set(true);
                fake_pins(pins)
            },
            |_| -> Result<Box<dyn PanelDriver>> {
                panel_opened.set(true);
                Ok(Box::new(RecordingPanel::new("EPD 2.7", 264, 176)))
            },
        );

        assert!(matches!(result.err(), Some(PipelineError::Config(_))));
        assert!(!pins_opened.get());
        assert!(!panel_opened.get());
    }

    #[test]
    fn test_wrong_panel_is_rejected() {
        let config = fixture_config(vec![mono_font()]);

        let result = assemble(&config, fake_pins, |_| -> Result<Box<dyn PanelDriver>> {
            Ok(Box::new(RecordingPanel::new("EPD 2.0", 200, 96)))
        });

        assert!(matches!(result.err(), Some(PipelineError::HardwareMismatch(_))));
    }

    #[tokio::test]
    async fn test_assembled_service_runs_with_real_font() {
        let config = fixture_config(vec![PathBuf::from("/nonexistent/FreeMonoBold.ttf"), mono_font()]);
        let panel = RecordingPanel::new("EPD 2.7", 264, 176);
        let calls = panel.calls.clone();
        let frames = panel.frames.clone();
        let opened_at = Cell::new(None);

        let mut service = assemble(&config, fake_pins, |path| -> Result<Box<dyn PanelDriver>> {
            opened_at.set(Some(path.to_path_buf()));
            Ok(Box::new(panel))
        })
        .ok()
        .unwrap();

        let now = Utc.with_ymd_and_hms(2024, 5, 1, 7, 30, 0).unwrap();
        assert_eq!(service.run(now).await.unwrap(), LedColor::Red);

        assert_eq!(opened_at.take(), Some(PathBuf::from("/dev/epd")));
        let calls = calls.lock().unwrap().clone();
        assert_eq!(calls.first(), Some(&PanelCall::Clear));
        assert_eq!(calls.last(), Some(&PanelCall::Update));

        let frames = frames.lock().unwrap();
        let frame = &frames[0];
        assert_eq!(frame.size(), (264, 176));
        // large "90" in the today area, below the timestamp line
        assert!(frame.black_pixels_in(5, 30, 190, 110) > 500);
        // regional column
        assert!(frame.black_pixels_in(200, 20, 261, 173) > 0);
    }
}
