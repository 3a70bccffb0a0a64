// Domain layer - DTOs and display logic
pub mod alert;
pub mod chart;
pub mod dashboard;
pub mod device;
pub mod health;
pub mod monitor;
pub mod simulation;
pub mod user;
