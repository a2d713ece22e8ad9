// Application layer - Pipeline use case and the seams around it
pub mod display_adapter;
pub mod forecast_source;
pub mod indicator;
pub mod refresh_service;
pub mod renderer;
