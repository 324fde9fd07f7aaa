//! Endpoint configuration for the SMSCountry web services.

/// Default scheme and host of the SMSCountry API.
pub const DEFAULT_BASE_URL: &str = "https://api.smscountry.com";

/// Paths of the SMSCountry web services, relative to the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointPaths {
    pub message: &'static str,
    pub bulk_message: &'static str,
    pub multi_message: &'static str,
    pub bulk_report: &'static str,
    pub balance: &'static str,
}

impl EndpointPaths {
    pub const SMSCOUNTRY: Self = Self {
        message: "/SMSCwebservice_bulk.aspx",
        bulk_message: "/SMSCwebservice_bulk.aspx",
        multi_message: "/SMSCWebservice_MultiMessages.asp",
        bulk_report: "/smscwebservices_bulk_reports.aspx",
        balance: "/SMSCwebservice_User_GetBal.asp",
    };
}

impl Default for EndpointPaths {
    fn default() -> Self {
        Self::SMSCOUNTRY
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Base URL plus the fixed set of service paths.
///
/// Immutable once built; the client derives every request URL from it.
pub struct Endpoints {
    base_url: String,
    paths: EndpointPaths,
}

impl Endpoints {
    /// Use `base_url` (scheme and host, e.g. `http://api.smscountry.com`) with the standard paths.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            paths: EndpointPaths::SMSCOUNTRY,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn paths(&self) -> &EndpointPaths {
        &self.paths
    }

    pub fn message_url(&self) -> String {
        self.url(self.paths.message)
    }

    pub fn bulk_message_url(&self) -> String {
        self.url(self.paths.bulk_message)
    }

    pub fn multi_message_url(&self) -> String {
        self.url(self.paths.multi_message)
    }

    pub fn bulk_report_url(&self) -> String {
        self.url(self.paths.bulk_report)
    }

    pub fn balance_url(&self) -> String {
        self.url(self.paths.balance)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints_point_at_smscountry() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.message_url(),
            "https://api.smscountry.com/SMSCwebservice_bulk.aspx"
        );
        assert_eq!(endpoints.bulk_message_url(), endpoints.message_url());
        assert_eq!(
            endpoints.multi_message_url(),
            "https://api.smscountry.com/SMSCWebservice_MultiMessages.asp"
        );
        assert_eq!(
            endpoints.bulk_report_url(),
            "https://api.smscountry.com/smscwebservices_bulk_reports.aspx"
        );
        assert_eq!(
            endpoints.balance_url(),
            "https://api.smscountry.com/SMSCwebservice_User_GetBal.asp"
        );
    }

    #[test]
    fn trailing_slash_is_dropped_from_base_url() {
        let endpoints = Endpoints::new("http://gateway.test/");
        assert_eq!(endpoints.base_url(), "http://gateway.test");
        assert_eq!(
            endpoints.balance_url(),
            "http://gateway.test/SMSCwebservice_User_GetBal.asp"
        );
    }
}
