// Font resolution and TrueType text drawing
use crate::application::renderer::{Typeface, BLACK};
use crate::domain::error::{PipelineError, Result};
use ab_glyph::{Font, FontVec, PxScale};
use image::GrayImage;
use imageproc::drawing::draw_text_mut;
use std::path::{Path, PathBuf};

/// Ordered list of font files; the first one that exists and parses wins.
#[derive(Debug, Clone)]
pub struct FontResolver {
    candidates: Vec<PathBuf>,
}

impl FontResolver {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    pub fn resolve(&self) -> Result<TrueTypeFace> {
        for path in &self.candidates {
            if !path.exists() {
                tracing::debug!("font candidate {} not present", path.display());
                continue;
            }

            match TrueTypeFace::load(path) {
                Ok(face) => {
                    tracing::info!("using font {}", face.path().display());
                    return Ok(face);
                }
                Err(e) => tracing::warn!("skipping font {}: {}", path.display(), e),
            }
        }

        let tried: Vec<String> = self.candidates.iter().map(|p| p.display().to_string()).collect();
        Err(PipelineError::Config(format!(
            "no font file found (tried: {})",
            if tried.is_empty() { "nothing".to_string() } else { tried.join(", ") }
        )))
    }
}

pub struct TrueTypeFace {
    font: FontVec,
    path: PathBuf,
}

impl TrueTypeFace {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| PipelineError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let font = FontVec::try_from_vec(bytes)
            .map_err(|e| PipelineError::Config(format!("invalid font {}: {}", path.display(), e)))?;
        Ok(Self {
            font,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `size` is an em size in pixels, matching point sizes at 72 dpi.
    fn scale(&self, size: f32) -> PxScale {
        self.font.pt_to_px_scale(size).unwrap_or(PxScale::from(size))
    }
}

impl Typeface for TrueTypeFace {
    fn draw_text(&self, canvas: &mut GrayImage, x: i32, y: i32, size: f32, text: &str) {
        draw_text_mut(canvas, BLACK, x, y, self.scale(size), &self.font, text);
    }
}
