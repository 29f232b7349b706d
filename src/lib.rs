pub mod app;
pub mod cache;
pub mod category;
pub mod config;
pub mod credits;
pub mod error;
pub mod format;
pub mod hydration;
pub mod images;
pub mod loaders;
pub mod pagination;
pub mod params;
pub mod tmdb;
