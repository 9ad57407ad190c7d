//! Typed Rust client for the BPDB smart-meter HTTP API.
//!
//! The design is layered: a domain layer of strong types, a transport layer
//! for wire-format details, and a small client layer orchestrating requests.
//! The `bpdb` binary adds a command surface on top of this library.
//!
//! ```rust,no_run
//! use bpdb::{MeterClient, Otp, RawPhoneNumber};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), bpdb::MeterError> {
//!     let mut client = MeterClient::new()?;
//!     let phone = RawPhoneNumber::new("01812345678")?;
//!     client.send_otp(&phone).await?;
//!     // ...wait for the SMS to arrive...
//!     let otp = Otp::new("123456")?;
//!     client.login(&phone, &otp).await?;
//!     let profile = client.consumer_info().await?;
//!     println!("{profile:?}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{DEFAULT_BASE_URL, MeterClient, MeterClientBuilder, MeterError};
pub use domain::{
    ConsumerProfile, CustomerNumber, MeterNumber, Otp, PhoneNumber, RawPhoneNumber, RechargeEntry,
    SessionToken, ValidationError,
};
