//! HTTP surface: session gate middleware, gated pages, and re-validation.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
