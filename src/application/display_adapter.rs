// Display adapter - Panel identity check and the clear/display/update contract
use crate::domain::bitmap::Bitmap;
use crate::domain::error::{PipelineError, Result};
use crate::domain::panel::PanelInfo;

/// A vendor e-paper driver.
pub trait PanelDriver {
    fn info(&self) -> &PanelInfo;
    fn clear(&mut self) -> Result<()>;
    fn display(&mut self, bitmap: &Bitmap) -> Result<()>;
    fn update(&mut self) -> Result<()>;
}

pub struct DisplayAdapter {
    driver: Box<dyn PanelDriver>,
}

impl DisplayAdapter {
    pub fn new(driver: Box<dyn PanelDriver>, expected_model: &str) -> Result<Self> {
        let info = driver.info();
        tracing::info!(
            "panel = {} {} x {}  version={}  cog={}  film={:?}",
            info.model,
            info.width,
            info.height,
            info.version,
            info.cog,
            info.film
        );

        if info.model != expected_model {
            return Err(PipelineError::HardwareMismatch(format!(
                "incorrect panel: expected {}, found {}",
                expected_model, info.model
            )));
        }

        Ok(Self { driver })
    }

    pub fn size(&self) -> (u32, u32) {
        self.driver.info().size()
    }

    pub fn clear(&mut self) -> Result<()> {
        self.driver.clear()
    }

    pub fn display(&mut self, bitmap: &Bitmap) -> Result<()> {
        if bitmap.size() != self.size() {
            return Err(PipelineError::HardwareMismatch(format!(
                "image size mismatch: bitmap is {:?}, panel is {:?}",
                bitmap.size(),
                self.size()
            )));
        }
        self.driver.display(bitmap)
    }

    pub fn update(&mut self) -> Result<()> {
        self.driver.update()
    }
}

#[cfg(test)]
pub mod fake {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum PanelCall {
        Clear,
        Display(usize),
        Update,
    }

    /// Records every driver call; `Display` carries the bitmap's black pixel count.
    pub struct RecordingPanel {
        pub info: PanelInfo,
        pub calls: Arc<Mutex<Vec<PanelCall>>>,
        pub frames: Arc<Mutex<Vec<Bitmap>>>,
    }

    impl RecordingPanel {
        pub fn new(model: &str, width: u32, height: u32) -> Self {
            Self {
                info: PanelInfo {
                    model: model.to_string(),
                    width,
                    height,
                    cog: 2,
                    film: Some(231),
                    version: "4".to_string(),
                },
                calls: Arc::new(Mutex::new(Vec::new())),
                frames: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl PanelDriver for RecordingPanel {
        fn info(&self) -> &PanelInfo {
            &self.info
        }

        fn clear(&mut self) -> Result<()> {
            self.calls.lock().unwrap().push(PanelCall::Clear);
            Ok(())
        }

        fn display(&mut self, bitmap: &Bitmap) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(PanelCall::Display(bitmap.black_pixels()));
            self.frames.lock().unwrap().push(bitmap.clone());
            Ok(())
        }

        fn update(&mut self) -> Result<()> {
            self.calls.lock().unwrap().push(PanelCall::Update);
            Ok(())
        }
    }
}
