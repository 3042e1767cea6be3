pub mod dto;
pub mod payment_service;

pub use dto::{
    CreateOrderRequest, ErrorResponse, OrderResponse, VerifyPaymentRequest, VerifyPaymentResponse,
};
pub use payment_service::PaymentService;
