// Domain layer - Forecast, frame buffer and hardware models
pub mod bitmap;
pub mod error;
pub mod forecast;
pub mod led;
pub mod panel;
