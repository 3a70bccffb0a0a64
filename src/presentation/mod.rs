// Presentation layer - Route table and application state
pub mod app_state;
pub mod routes;
