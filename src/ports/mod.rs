pub mod payment_gateway_port;

pub use payment_gateway_port::{GatewayOrder, GatewayOrderRequest, PaymentGatewayPort};

#[cfg(test)]
pub mod testing;
