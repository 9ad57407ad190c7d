//! Domain layer: strong types with validation and invariants (no I/O).

mod response;
mod validation;
mod value;

pub use response::{ConsumerProfile, RechargeEntry};
pub use validation::ValidationError;
pub use value::{CustomerNumber, MeterNumber, Otp, PhoneNumber, RawPhoneNumber, SessionToken};
