// rePaper EPD FUSE driver (panel exposed as files under /dev/epd)
use crate::application::display_adapter::PanelDriver;
use crate::domain::bitmap::Bitmap;
use crate::domain::error::Result;
use crate::domain::panel::PanelInfo;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

const CMD_CLEAR: &[u8] = b"C";
const CMD_UPDATE: &[u8] = b"U";

pub struct EpdFuse {
    root: PathBuf,
    info: PanelInfo,
}

impl EpdFuse {
    pub fn open(root: &Path) -> Result<Self> {
        let panel = std::fs::read_to_string(root.join("panel"))?;
        let version = std::fs::read_to_string(root.join("version"))?;
        let info = PanelInfo::parse(&panel, &version)?;
        tracing::debug!("opened EPD at {}: {:?}", root.display(), info);

        Ok(Self {
            root: root.to_path_buf(),
            info,
        })
    }

    fn write_file(&self, relative: &str, bytes: &[u8]) -> Result<()> {
        let mut file = OpenOptions::new().write(true).open(self.root.join(relative))?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(())
    }

    fn command(&self, cmd: &[u8]) -> Result<()> {
        self.write_file("command", cmd)
    }
}

impl PanelDriver for EpdFuse {
    fn info(&self) -> &PanelInfo {
        &self.info
    }

    fn clear(&mut self) -> Result<()> {
        self.command(CMD_CLEAR)
    }

    fn display(&mut self, bitmap: &Bitmap) -> Result<()> {
        // display_inverse takes 1 = white, which is what the packing produces
        self.write_file("LE/display_inverse", &bitmap.to_packed_bytes())
    }

    fn update(&mut self) -> Result<()> {
        self.command(CMD_UPDATE)
    }
}
