use crate::domain::{BulkMessageRequest, DeliveryReport, MessageRequest, MessageType};

/// Body the gateway returns from some deployments instead of an `OK:` line.
const SENT_LITERAL: &str = "SMS message(s) sent";
const OK_PREFIX: &str = "OK:";

const ENTRY_SEPARATOR: char = '~';
const NUMBER_SEPARATOR: char = '^';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Accepted(String),
    Rejected(String),
    Empty,
}

pub fn encode_send_sms_form(request: &MessageRequest) -> Vec<(String, String)> {
    let mut params = vec![
        (
            MessageRequest::MOBILE_NUMBER_FIELD.to_owned(),
            request.mobile_number().to_owned(),
        ),
        (
            MessageRequest::MESSAGE_FIELD.to_owned(),
            request.message().to_owned(),
        ),
    ];
    push_options(&mut params, request.message_type(), request.delivery_report());
    params
}

pub fn encode_bulk_sms_form(request: &BulkMessageRequest) -> Vec<(String, String)> {
    let mut params = vec![(
        BulkMessageRequest::FIELD.to_owned(),
        encode_multi_message(request),
    )];
    push_options(&mut params, request.message_type(), request.delivery_report());
    params
}

/// `num0^msg0~num1^msg1~...`; entries are not escaped.
pub fn encode_multi_message(request: &BulkMessageRequest) -> String {
    let mut payload = String::new();
    for (idx, entry) in request.entries().iter().enumerate() {
        if idx > 0 {
            payload.push(ENTRY_SEPARATOR);
        }
        payload.push_str(entry.mobile_number());
        payload.push(NUMBER_SEPARATOR);
        payload.push_str(entry.message());
    }
    payload
}

fn push_options(
    params: &mut Vec<(String, String)>,
    message_type: MessageType,
    delivery_report: DeliveryReport,
) {
    params.push((MessageType::FIELD.to_owned(), message_type.code().to_owned()));
    params.push((
        DeliveryReport::FIELD.to_owned(),
        delivery_report.code().to_owned(),
    ));
}

/// Classify a send response body. Matching is case-sensitive and happens after trimming.
pub fn decode_send_response(body: &str) -> SendOutcome {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return SendOutcome::Empty;
    }
    if trimmed.starts_with(OK_PREFIX) || trimmed == SENT_LITERAL {
        SendOutcome::Accepted(trimmed.to_owned())
    } else {
        SendOutcome::Rejected(trimmed.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_single_message_form_params() {
        let req = MessageRequest::new("hello there", "919876543210", true);
        let params = encode_send_sms_form(&req);

        assert_eq!(
            params,
            vec![
                ("mobilenumber".to_owned(), "919876543210".to_owned()),
                ("message".to_owned(), "hello there".to_owned()),
                ("mtype".to_owned(), "N".to_owned()),
                ("dr".to_owned(), "Y".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_bulk_form_params() {
        let req = BulkMessageRequest::new(&["hi", "bye"], &["111", "222"], false).unwrap();
        let params = encode_bulk_sms_form(&req);

        assert_eq!(
            params,
            vec![
                ("mno_msg".to_owned(), "111^hi~222^bye".to_owned()),
                ("mtype".to_owned(), "N".to_owned()),
                ("dr".to_owned(), "N".to_owned()),
            ]
        );
    }

    #[test]
    fn multi_message_with_single_entry_has_no_separator() {
        let req = BulkMessageRequest::new(&["only"], &["111"], false).unwrap();
        assert_eq!(encode_multi_message(&req), "111^only");
    }

    #[test]
    fn multi_message_keeps_delimiters_inside_entries() {
        let req = BulkMessageRequest::new(&["a^b", "c~d"], &["1", "2"], false).unwrap();
        assert_eq!(encode_multi_message(&req), "1^a^b~2^c~d");
    }

    #[test]
    fn decode_accepts_ok_prefix_and_sent_literal() {
        assert_eq!(
            decode_send_response("OK:accepted"),
            SendOutcome::Accepted("OK:accepted".to_owned())
        );
        assert_eq!(
            decode_send_response("  OK:12345\r\n"),
            SendOutcome::Accepted("OK:12345".to_owned())
        );
        assert_eq!(
            decode_send_response("SMS message(s) sent\n"),
            SendOutcome::Accepted("SMS message(s) sent".to_owned())
        );
    }

    #[test]
    fn decode_rejects_everything_else() {
        assert_eq!(
            decode_send_response("FAILED:bad number"),
            SendOutcome::Rejected("FAILED:bad number".to_owned())
        );
        assert_eq!(
            decode_send_response("ok:12345"),
            SendOutcome::Rejected("ok:12345".to_owned())
        );
        assert_eq!(
            decode_send_response("SMS message(s) sent!"),
            SendOutcome::Rejected("SMS message(s) sent!".to_owned())
        );
    }

    #[test]
    fn decode_blank_body_is_empty() {
        assert_eq!(decode_send_response(""), SendOutcome::Empty);
        assert_eq!(decode_send_response(" \n "), SendOutcome::Empty);
    }
}
