pub mod entities;
pub mod errors;
pub mod signature;
pub mod value_objects;

pub use entities::{OrderDescriptor, OrderRequest, PaymentCallback, VerificationResult};
pub use errors::{DomainError, DomainResult};
pub use value_objects::{Currency, Money, Receipt};
