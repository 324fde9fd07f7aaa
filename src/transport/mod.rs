//! Transport layer: wire-format details (form encoding and plain-text response decoding).

mod balance;
mod send_sms;

pub use balance::{TransportError, decode_balance_response, encode_balance_query};
pub use send_sms::{SendOutcome, decode_send_response, encode_bulk_sms_form, encode_send_sms_form};
