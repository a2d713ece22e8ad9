// Extractor for the tenki.jp cloth-drying index page
use crate::domain::error::{PipelineError, Result};
use crate::domain::forecast::{ForecastReading, REGION_COUNT};
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

const TODAY_SELECTOR: &str = "#exponentLargeLeft > dd > dl > dd";
const TOMORROW_SELECTOR: &str = "#exponentLargeRight > dd > dl > dd";

static TRAILING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+$").expect("trailing digit pattern is valid"));

fn regional_selector(index: usize) -> String {
    // Amedas cells start at the second column
    format!("td.amedasIcon:nth-child({}) > p:nth-child(2)", index + 2)
}

/// Text content of the first element matching `selector`.
fn select_text(document: &Html, selector: &str) -> Result<String> {
    let parsed = Selector::parse(selector)
        .map_err(|e| PipelineError::Parse(format!("invalid selector {}: {}", selector, e)))?;

    let element = document
        .select(&parsed)
        .next()
        .ok_or_else(|| PipelineError::Parse(format!("no element matches {}", selector)))?;

    let text: String = element.text().collect();
    tracing::debug!("{} -> {:?}", selector, text);
    Ok(text)
}

fn trailing_digits(text: &str) -> Result<String> {
    TRAILING_DIGITS
        .find(text.trim_end())
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| PipelineError::Parse(format!("no trailing digits in {:?}", text)))
}

/// Pull today's and tomorrow's labels plus the five regional readings.
pub fn extract_reading(markup: &str) -> Result<ForecastReading> {
    let document = Html::parse_document(markup);

    let today = select_text(&document, TODAY_SELECTOR)?.trim().to_string();
    let tomorrow = select_text(&document, TOMORROW_SELECTOR)?.trim().to_string();

    let mut regional: [String; REGION_COUNT] = Default::default();
    for (i, slot) in regional.iter_mut().enumerate() {
        let text = select_text(&document, &regional_selector(i))?;
        *slot = trailing_digits(&text)?;
    }

    Ok(ForecastReading::new(today, tomorrow, regional))
}
