//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{BulkEntry, BulkMessageRequest, MessageRequest};
pub use response::SendSmsResponse;
pub use validation::ValidationError;
pub use value::{Credentials, DeliveryReport, MessageType, PhoneNumber, SenderId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_request_fixes_normal_message_type() {
        let req = MessageRequest::new("hello", "919876543210", true);
        assert_eq!(req.message(), "hello");
        assert_eq!(req.mobile_number(), "919876543210");
        assert_eq!(req.delivery_report(), DeliveryReport::Requested);
        assert_eq!(req.message_type(), MessageType::Normal);
    }

    #[test]
    fn bulk_request_pairs_by_index() {
        let req = BulkMessageRequest::new(&["hi", "bye"], &["111", "222"], false).unwrap();
        let pairs = req
            .entries()
            .iter()
            .map(|entry| (entry.mobile_number(), entry.message()))
            .collect::<Vec<_>>();
        assert_eq!(pairs, vec![("111", "hi"), ("222", "bye")]);
        assert_eq!(req.delivery_report(), DeliveryReport::NotRequested);
        assert_eq!(req.message_type(), MessageType::Normal);
    }

    #[test]
    fn bulk_request_rejects_length_mismatch() {
        let err = BulkMessageRequest::new(&["a", "b", "c"], &["111", "222"], false).unwrap_err();
        assert_eq!(
            err,
            ValidationError::LengthMismatch {
                messages: 3,
                mobile_numbers: 2
            }
        );
    }

    #[test]
    fn bulk_request_requires_non_empty() {
        let none: [&str; 0] = [];
        let err = BulkMessageRequest::new(&none, &none, false).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Empty {
                field: BulkMessageRequest::FIELD
            }
        ));
    }

    #[test]
    fn bulk_request_accepts_phone_numbers() {
        let pn = PhoneNumber::parse(None, "+91 98765 43210").unwrap();
        let req = BulkMessageRequest::new(&["hi".to_owned()], &[pn], true).unwrap();
        assert_eq!(req.entries()[0].mobile_number(), "919876543210");
    }
}
