//! Typed async client for the device-monitoring dashboard backend:
//! API services, chart-configuration builders, and the route table the
//! dashboard views are wired from.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

pub use error::{DashboardError, Result};
