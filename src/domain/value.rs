use std::fmt;

use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Clone, PartialEq, Eq, Hash)]
/// SMSCountry account credentials, sent with every request.
///
/// `Debug` output never includes the password.
pub struct Credentials {
    user: String,
    password: String,
}

impl Credentials {
    /// Field name used by SMSCountry for the account (`User`).
    pub const USER_FIELD: &'static str = "User";
    /// Field name used by SMSCountry for the password (`passwd`).
    pub const PASSWORD_FIELD: &'static str = "passwd";

    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender id registered with SMSCountry (`sid`).
///
/// The gateway attributes every message to this identity. It is passed through as given;
/// whether the gateway accepts it is decided server-side.
pub struct SenderId(String);

impl SenderId {
    /// Form field name used by SMSCountry (`sid`).
    pub const FIELD: &'static str = "sid";

    /// Wrap a sender id.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SenderId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SenderId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for SenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
/// Message encodings understood by SMSCountry (`mtype`).
///
/// Only [`MessageType::Normal`] is sent by [`crate::Sender`]; the remaining codes are listed so
/// that gateway responses and logs can be interpreted.
pub enum MessageType {
    #[default]
    Normal,
    Unicode,
    Picture,
    Logo,
    Flash,
    /// Requires a `wap_url` parameter on the gateway side.
    WapPush,
    /// GPRS based.
    LongSms,
    Ringtone,
}

impl MessageType {
    /// Form field name used by SMSCountry (`mtype`).
    pub const FIELD: &'static str = "mtype";

    /// Wire code for this message type.
    pub fn code(self) -> &'static str {
        match self {
            Self::Normal => "N",
            Self::Unicode => "OL",
            Self::Picture => "P",
            Self::Logo => "L",
            Self::Flash => "F",
            Self::WapPush => "WP",
            Self::LongSms => "LS",
            Self::Ringtone => "R",
        }
    }

    /// Map a wire code back to a message type.
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "N" => Self::Normal,
            "OL" => Self::Unicode,
            "P" => Self::Picture,
            "L" => Self::Logo,
            "F" => Self::Flash,
            "WP" => Self::WapPush,
            "LS" => Self::LongSms,
            "R" => Self::Ringtone,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Whether the gateway should later report delivery status (`dr`).
pub enum DeliveryReport {
    Requested,
    #[default]
    NotRequested,
}

impl DeliveryReport {
    /// Form field name used by SMSCountry (`dr`).
    pub const FIELD: &'static str = "dr";

    /// Wire code (`Y` or `N`).
    pub fn code(self) -> &'static str {
        match self {
            Self::Requested => "Y",
            Self::NotRequested => "N",
        }
    }
}

impl From<bool> for DeliveryReport {
    fn from(value: bool) -> Self {
        if value {
            Self::Requested
        } else {
            Self::NotRequested
        }
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number rendered the way SMSCountry expects destination numbers.
///
/// SMSCountry takes international numbers as plain digits with the country code and no
/// leading `+`. Equality, ordering, and hashing are based on that form.
///
/// This type is opt-in: every send operation also accepts plain strings, which are passed
/// through untouched.
pub struct PhoneNumber {
    raw: String,
    gateway: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Form field name used by SMSCountry (`mobilenumber`).
    pub const FIELD: &'static str = "mobilenumber";

    /// Parse and normalize a phone number.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();
        let gateway = e164.trim_start_matches('+').to_owned();

        Ok(Self {
            raw,
            gateway,
            parsed,
        })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// International digits without a leading `+`, as sent in `mobilenumber`.
    pub fn gateway_format(&self) -> &str {
        &self.gateway
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.gateway
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.gateway
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.gateway == other.gateway
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.gateway.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.gateway.cmp(&other.gateway)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_debug_redacts_password() {
        let creds = Credentials::new("acme", "s3cret");
        assert_eq!(creds.user(), "acme");
        assert_eq!(creds.password(), "s3cret");

        let debug = format!("{creds:?}");
        assert!(debug.contains("acme"));
        assert!(!debug.contains("s3cret"));
    }

    #[test]
    fn sender_id_is_passed_through_verbatim() {
        let sender = SenderId::new(" ACME ");
        assert_eq!(sender.as_str(), " ACME ");
        assert_eq!(SenderId::from("ACME").to_string(), "ACME");
    }

    #[test]
    fn message_type_codes_match_gateway_table() {
        let all = [
            (MessageType::Normal, "N"),
            (MessageType::Unicode, "OL"),
            (MessageType::Picture, "P"),
            (MessageType::Logo, "L"),
            (MessageType::Flash, "F"),
            (MessageType::WapPush, "WP"),
            (MessageType::LongSms, "LS"),
            (MessageType::Ringtone, "R"),
        ];
        for (kind, code) in all {
            assert_eq!(kind.code(), code);
            assert_eq!(MessageType::from_code(code), Some(kind));
        }
        assert_eq!(MessageType::from_code("n"), None);
        assert_eq!(MessageType::default(), MessageType::Normal);
    }

    #[test]
    fn delivery_report_maps_bool_to_y_or_n() {
        assert_eq!(DeliveryReport::from(true).code(), "Y");
        assert_eq!(DeliveryReport::from(false).code(), "N");
        assert_eq!(DeliveryReport::default(), DeliveryReport::NotRequested);
    }

    #[test]
    fn phone_number_renders_without_plus() {
        let p1 = PhoneNumber::parse(None, "+91 98765 43210").unwrap();
        let p2 = PhoneNumber::parse(Some(phonenumber::country::Id::IN), " 9876543210 ").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.gateway_format(), "919876543210");
        assert_eq!(p2.raw(), "9876543210");
        assert_eq!(p1.as_ref(), "919876543210");
        assert_eq!(String::from(p2), "919876543210");
    }

    #[test]
    fn phone_number_rejects_empty_and_garbage() {
        assert!(matches!(
            PhoneNumber::parse(None, "   "),
            Err(ValidationError::Empty {
                field: PhoneNumber::FIELD
            })
        ));
        assert!(matches!(
            PhoneNumber::parse(None, "not-a-number"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
    }
}
