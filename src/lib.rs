pub mod app;
pub mod models;
