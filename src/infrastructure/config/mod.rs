pub mod app_config;
pub mod razorpay_config;

pub use app_config::AppConfig;
pub use razorpay_config::RazorpayConfig;
