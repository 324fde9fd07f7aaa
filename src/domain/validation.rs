use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    LengthMismatch { messages: usize, mobile_numbers: usize },
    InvalidPhoneNumber { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::LengthMismatch {
                messages,
                mobile_numbers,
            } => {
                write!(
                    f,
                    "messages and mobile numbers differ in length: {messages} messages, {mobile_numbers} mobile numbers"
                )
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}
