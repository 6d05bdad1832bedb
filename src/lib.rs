//! SpaceX launch browser
//!
//! Screen state for a launch list, a launch detail view and a launch site
//! map, backed by the public SpaceX REST API.

pub mod api;
pub mod config;
pub mod detail;
pub mod errors;
pub mod geo;
pub mod lifecycle;
pub mod links;
pub mod list;
pub mod location;
pub mod map;
pub mod models;
pub mod navigation;
pub mod render;
