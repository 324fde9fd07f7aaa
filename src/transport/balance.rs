use std::num::ParseFloatError;

use url::form_urlencoded;

use crate::domain::Credentials;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("balance response is empty")]
    Empty,

    #[error("invalid balance {token:?}: {source}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Query string for the balance endpoint. Credentials travel in the URL.
pub fn encode_balance_query(credentials: &Credentials) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(Credentials::USER_FIELD, credentials.user())
        .append_pair(Credentials::PASSWORD_FIELD, credentials.password())
        .finish()
}

/// The balance is the first whitespace-delimited token of the body, e.g. `123.45 units`.
pub fn decode_balance_response(body: &str) -> Result<f64, TransportError> {
    let token = body.split_whitespace().next().ok_or(TransportError::Empty)?;
    token
        .parse::<f64>()
        .map_err(|source| TransportError::InvalidNumber {
            token: token.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_balance_query_escapes_credentials() {
        assert_eq!(
            encode_balance_query(&Credentials::new("acme", "s3cret")),
            "User=acme&passwd=s3cret"
        );
        assert_eq!(
            encode_balance_query(&Credentials::new("a b", "p&q=r")),
            "User=a+b&passwd=p%26q%3Dr"
        );
    }

    #[test]
    fn decode_balance_takes_leading_token() {
        assert_eq!(decode_balance_response("123.45 units").unwrap(), 123.45);
        assert_eq!(decode_balance_response("  42\r\n").unwrap(), 42.0);
        assert_eq!(decode_balance_response("0.5").unwrap(), 0.5);
    }

    #[test]
    fn decode_balance_rejects_blank_body() {
        assert!(matches!(
            decode_balance_response(""),
            Err(TransportError::Empty)
        ));
        assert!(matches!(
            decode_balance_response("   \n"),
            Err(TransportError::Empty)
        ));
    }

    #[test]
    fn decode_balance_rejects_non_numeric_token() {
        match decode_balance_response("abc") {
            Err(TransportError::InvalidNumber { token, .. }) => assert_eq!(token, "abc"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(decode_balance_response("Invalid User 10").is_err());
    }
}
