pub mod razorpay_adapter;

pub use razorpay_adapter::RazorpayAdapter;
