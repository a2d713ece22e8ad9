use crate::infrastructure::fetcher::FetchOptions;
use crate::infrastructure::gpio::LedPins;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SOURCE_URL: &str = "http://www.tenki.jp/indexes/cloth_dried/3/16/4410.html";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceSettings,
    pub fonts: FontSettings,
    pub panel: PanelSettings,
    pub led: LedSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SourceSettings {
    pub url: String,
    pub timeout_secs: u64,
    pub user_agent: Option<String>,
    pub system_proxy: bool,
    /// Saved copy of the page to use instead of the network.
    pub fixture_path: Option<PathBuf>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            timeout_secs: FetchOptions::default().timeout.as_secs(),
            user_agent: None,
            system_proxy: true,
            fixture_path: None,
        }
    }
}

impl SourceSettings {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
            system_proxy: self.system_proxy,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FontSettings {
    pub candidates: Vec<PathBuf>,
}

impl Default for FontSettings {
    fn default() -> Self {
        // fonts live in different places on Raspbian and Debian
        Self {
            candidates: [
                "/usr/share/fonts/truetype/freefont/FreeMonoBold.ttf",
                "/usr/share/fonts/truetype/ttf-dejavu/DejaVuSansMono-Bold.ttf",
                "/usr/share/fonts/truetype/freefont/FreeMono.ttf",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PanelSettings {
    pub epd_path: PathBuf,
    pub expected_model: String,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            epd_path: PathBuf::from("/dev/epd"),
            expected_model: "EPD 2.7".to_string(),
        }
    }
}

/// BCM GPIO numbers of the LED channels.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LedSettings {
    pub red: u64,
    pub green: u64,
    pub blue: u64,
}

impl Default for LedSettings {
    fn default() -> Self {
        Self {
            red: 6,
            green: 12,
            blue: 5,
        }
    }
}

impl LedSettings {
    pub fn pins(&self) -> LedPins {
        LedPins {
            red: self.red,
            green: self.green,
            blue: self.blue,
        }
    }
}

/// Defaults, then `config/laundry.*` if present, then `LAUNDRY__*` env vars.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_app_config_from("config/laundry")
}

pub fn load_app_config_from(file_stem: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(file_stem).required(false))
        .add_source(
            config::Environment::with_prefix("LAUNDRY")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("fonts.candidates")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
