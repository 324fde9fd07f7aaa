use crate::domain::validation::ValidationError;
use crate::domain::value::{DeliveryReport, MessageType};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One message to one destination number.
pub struct MessageRequest {
    message: String,
    mobile_number: String,
    delivery_report: DeliveryReport,
    message_type: MessageType,
}

impl MessageRequest {
    /// Form field name used by SMSCountry for the body (`message`).
    pub const MESSAGE_FIELD: &'static str = "message";
    /// Form field name used by SMSCountry for the destination (`mobilenumber`).
    pub const MOBILE_NUMBER_FIELD: &'static str = "mobilenumber";

    pub fn new(
        message: impl Into<String>,
        mobile_number: impl Into<String>,
        delivery_report: impl Into<DeliveryReport>,
    ) -> Self {
        Self {
            message: message.into(),
            mobile_number: mobile_number.into(),
            delivery_report: delivery_report.into(),
            message_type: MessageType::Normal,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn mobile_number(&self) -> &str {
        &self.mobile_number
    }

    pub fn delivery_report(&self) -> DeliveryReport {
        self.delivery_report
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkEntry {
    mobile_number: String,
    message: String,
}

impl BulkEntry {
    pub fn mobile_number(&self) -> &str {
        &self.mobile_number
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Several (number, message) pairs delivered through one multi-message call.
///
/// Invariant: at least one entry.
pub struct BulkMessageRequest {
    entries: Vec<BulkEntry>,
    delivery_report: DeliveryReport,
    message_type: MessageType,
}

impl BulkMessageRequest {
    /// Form field name used by SMSCountry for the combined payload (`mno_msg`).
    pub const FIELD: &'static str = "mno_msg";

    /// Pair up `messages[i]` with `mobile_numbers[i]`.
    ///
    /// Both slices must be non-empty and of equal length.
    pub fn new<M, N>(
        messages: &[M],
        mobile_numbers: &[N],
        delivery_report: impl Into<DeliveryReport>,
    ) -> Result<Self, ValidationError>
    where
        M: AsRef<str>,
        N: AsRef<str>,
    {
        if messages.len() != mobile_numbers.len() {
            return Err(ValidationError::LengthMismatch {
                messages: messages.len(),
                mobile_numbers: mobile_numbers.len(),
            });
        }
        if messages.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let entries = messages
            .iter()
            .zip(mobile_numbers)
            .map(|(message, mobile_number)| BulkEntry {
                mobile_number: mobile_number.as_ref().to_owned(),
                message: message.as_ref().to_owned(),
            })
            .collect();

        Ok(Self {
            entries,
            delivery_report: delivery_report.into(),
            message_type: MessageType::Normal,
        })
    }

    pub fn entries(&self) -> &[BulkEntry] {
        &self.entries
    }

    pub fn delivery_report(&self) -> DeliveryReport {
        self.delivery_report
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }
}
