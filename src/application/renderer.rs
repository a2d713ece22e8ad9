// Renderer - Lays out a forecast reading on the panel bitmap
use crate::domain::bitmap::Bitmap;
use crate::domain::forecast::ForecastReading;
use chrono::{DateTime, TimeZone};
use image::{GrayImage, Luma};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

pub const TIMESTAMP_FONT_SIZE: f32 = 20.0;
pub const TODAY_FONT_SIZE: f32 = 110.0;
pub const TOMORROW_FONT_SIZE: f32 = 70.0;
pub const REST_FONT_SIZE: f32 = 35.0;

pub const TIMESTAMP_ORIGIN: (i32, i32) = (4, 4);
pub const TODAY_ORIGIN: (i32, i32) = (5, 15);
pub const TOMORROW_ORIGIN: (i32, i32) = (5, 110);
pub const REGIONAL_COLUMN_X: i32 = 200;
pub const REGIONAL_TOP_Y: i32 = 20;
pub const REGIONAL_ROW_PITCH: i32 = 30;

const FRAME_INSET: i32 = 3;
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Anti-aliased coverage at or above half intensity turns black.
const INK_THRESHOLD: u8 = 128;

pub const BLACK: Luma<u8> = Luma([0]);
pub const WHITE: Luma<u8> = Luma([255]);

/// Draws text in black onto a grayscale canvas. `(x, y)` is the top-left of
/// the line box; pixels outside the canvas must be dropped.
pub trait Typeface {
    fn draw_text(&self, canvas: &mut GrayImage, x: i32, y: i32, size: f32, text: &str);
}

pub struct Renderer {
    face: Box<dyn Typeface>,
}

impl Renderer {
    pub fn new(face: Box<dyn Typeface>) -> Self {
        Self { face }
    }

    pub fn regional_origin(index: usize) -> (i32, i32) {
        (REGIONAL_COLUMN_X, REGIONAL_TOP_Y + REGIONAL_ROW_PITCH * index as i32)
    }

    /// Render `reading` for a panel of `size`. The result is always exactly
    /// `size`; anything drawn past an edge is clipped.
    pub fn render<Tz>(&self, reading: &ForecastReading, now: &DateTime<Tz>, size: (u32, u32)) -> Bitmap
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let (width, height) = size;
        let mut canvas = GrayImage::from_pixel(width, height, WHITE);

        // Frame spans (3,3)..=(w-3,h-3)
        let frame_w = width as i32 - 2 * FRAME_INSET + 1;
        let frame_h = height as i32 - 2 * FRAME_INSET + 1;
        if frame_w > 0 && frame_h > 0 {
            let frame = Rect::at(FRAME_INSET, FRAME_INSET).of_size(frame_w as u32, frame_h as u32);
            draw_hollow_rect_mut(&mut canvas, frame, BLACK);
        }

        let timestamp = now.format(TIMESTAMP_FORMAT).to_string();
        let (x, y) = TIMESTAMP_ORIGIN;
        self.face.draw_text(&mut canvas, x, y, TIMESTAMP_FONT_SIZE, &timestamp);

        let (x, y) = TODAY_ORIGIN;
        self.face.draw_text(&mut canvas, x, y, TODAY_FONT_SIZE, &reading.today);

        let (x, y) = TOMORROW_ORIGIN;
        self.face.draw_text(&mut canvas, x, y, TOMORROW_FONT_SIZE, &reading.tomorrow);

        for (i, value) in reading.regional.iter().enumerate() {
            let (x, y) = Self::regional_origin(i);
            self.face.draw_text(&mut canvas, x, y, REST_FONT_SIZE, value);
        }

        tracing::debug!("rendered {}x{} frame at {}", width, height, timestamp);
        Bitmap::from_luma(&canvas, INK_THRESHOLD)
    }
}
