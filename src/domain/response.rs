/// Acceptance reported by the gateway for a send call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSmsResponse {
    /// Gateway response body with surrounding whitespace removed.
    pub body: String,
}

impl SendSmsResponse {
    /// Gateway job id, when the body has the form `OK:<job id>`.
    pub fn job_id(&self) -> Option<&str> {
        self.body
            .strip_prefix("OK:")
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::SendSmsResponse;

    #[test]
    fn job_id_is_taken_from_ok_prefix() {
        let resp = SendSmsResponse {
            body: "OK:12345".to_owned(),
        };
        assert_eq!(resp.job_id(), Some("12345"));

        let resp = SendSmsResponse {
            body: "OK:".to_owned(),
        };
        assert_eq!(resp.job_id(), None);

        let resp = SendSmsResponse {
            body: "SMS message(s) sent".to_owned(),
        };
        assert_eq!(resp.job_id(), None);
    }
}
