pub mod adapters;
pub mod config;

pub use adapters::RazorpayAdapter;
pub use config::{AppConfig, RazorpayConfig};
