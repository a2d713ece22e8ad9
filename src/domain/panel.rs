// E-paper panel identity
use super::error::{PipelineError, Result};
use regex::Regex;
use std::sync::LazyLock;

static PANEL_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(EPD\s+\d+(?:\.\d+)?)\s+(\d+)x(\d+)\s+COG\s+(\d+)(?:\s+FILM\s+(\d+))?")
        .expect("panel line pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelInfo {
    /// Model string, e.g. "EPD 2.7".
    pub model: String,
    pub width: u32,
    pub height: u32,
    pub cog: u32,
    pub film: Option<u32>,
    pub version: String,
}

impl PanelInfo {
    /// Parse the driver's panel line, e.g. "EPD 2.7 264x176 COG 2 FILM 231".
    pub fn parse(panel_line: &str, version: &str) -> Result<Self> {
        let line = panel_line.trim();
        let caps = PANEL_LINE.captures(line).ok_or_else(|| {
            PipelineError::HardwareMismatch(format!("unrecognised panel description {:?}", line))
        })?;

        let number = |i: usize| -> Result<u32> {
            caps[i]
                .parse()
                .map_err(|_| PipelineError::HardwareMismatch(format!("bad number in panel description {:?}", line)))
        };

        Ok(Self {
            model: caps[1].split_whitespace().collect::<Vec<_>>().join(" "),
            width: number(2)?,
            height: number(3)?,
            cog: number(4)?,
            film: caps.get(5).and_then(|m| m.as_str().parse().ok()),
            version: version.trim().to_string(),
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
