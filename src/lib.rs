//! Typed Rust client for the SMSCountry HTTP API.
//!
//! The crate is split into a domain layer of plain types, a transport layer for the
//! gateway's wire-format quirks (form fields, the `num^msg~num^msg` bulk payload, plain-text
//! responses), and a small client layer orchestrating requests.
//!
//! Messages are sent with HTTP POST to the message endpoints. A send succeeds when the
//! gateway answers `OK:<job id>` or `SMS message(s) sent`; anything else is reported as
//! [`SmsCountryError::Rejected`].
//!
//! ```rust,no_run
//! use smscountry::SmsCountryClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smscountry::SmsCountryError> {
//!     let client = SmsCountryClient::new("user", "password");
//!     let balance = client.balance().await?;
//!     println!("balance: {balance}");
//!
//!     let sender = client.sender("ACME");
//!     sender.send_sms("hello", "919876543210", false).await?;
//!     sender
//!         .send_bulk_sms(&["hi", "bye"], &["919876543210", "919876543211"], true)
//!         .await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT, EndpointPaths, Endpoints, Sender, SmsCountryClient,
    SmsCountryClientBuilder, SmsCountryError,
};
pub use domain::{
    BulkEntry, BulkMessageRequest, Credentials, DeliveryReport, MessageRequest, MessageType,
    PhoneNumber, SendSmsResponse, SenderId, ValidationError,
};
