use tracing::debug;

use super::{SmsCountryClient, SmsCountryError};
use crate::domain::{BulkMessageRequest, Credentials, MessageRequest, SendSmsResponse, SenderId};

#[derive(Debug, Clone)]
/// Sends messages as one registered sender id.
///
/// Created with [`SmsCountryClient::sender`]. Many senders can share one client.
pub struct Sender {
    client: SmsCountryClient,
    sender_id: SenderId,
}

impl Sender {
    pub(super) fn new(client: SmsCountryClient, sender_id: SenderId) -> Self {
        Self { client, sender_id }
    }

    pub fn sender_id(&self) -> &SenderId {
        &self.sender_id
    }

    pub fn client(&self) -> &SmsCountryClient {
        &self.client
    }

    /// Send one message to one destination number.
    ///
    /// `mobile_number` is passed through as given; a [`crate::PhoneNumber`] can be used to
    /// normalize it first.
    ///
    /// Errors:
    /// - [`SmsCountryError::Transport`] when the request or body read fails,
    /// - [`SmsCountryError::EmptyResponse`] for a missing or blank body,
    /// - [`SmsCountryError::Rejected`] when the gateway does not acknowledge the message.
    pub async fn send_sms(
        &self,
        message: impl Into<String>,
        mobile_number: impl Into<String>,
        delivery_report: bool,
    ) -> Result<SendSmsResponse, SmsCountryError> {
        let request = MessageRequest::new(message, mobile_number, delivery_report);
        self.send(&request).await
    }

    /// Send a prepared [`MessageRequest`].
    pub async fn send(
        &self,
        request: &MessageRequest,
    ) -> Result<SendSmsResponse, SmsCountryError> {
        let mut params = self.account_params();
        params.extend(crate::transport::encode_send_sms_form(request));

        debug!(
            sender_id = %self.sender_id,
            mobile_number = request.mobile_number(),
            "sending SMS"
        );
        self.client
            .send_form(self.client.endpoints.message_url(), params)
            .await
    }

    /// Send `messages[i]` to `mobile_numbers[i]` in one multi-message call.
    ///
    /// Both slices must be non-empty and of equal length; otherwise
    /// [`SmsCountryError::Validation`] is returned and no request is made. Other errors are
    /// the same as for [`Sender::send_sms`].
    pub async fn send_bulk_sms<M, N>(
        &self,
        messages: &[M],
        mobile_numbers: &[N],
        delivery_report: bool,
    ) -> Result<SendSmsResponse, SmsCountryError>
    where
        M: AsRef<str>,
        N: AsRef<str>,
    {
        let request = BulkMessageRequest::new(messages, mobile_numbers, delivery_report)?;
        self.send_bulk(&request).await
    }

    /// Send a prepared [`BulkMessageRequest`].
    pub async fn send_bulk(
        &self,
        request: &BulkMessageRequest,
    ) -> Result<SendSmsResponse, SmsCountryError> {
        let mut params = self.account_params();
        params.extend(crate::transport::encode_bulk_sms_form(request));

        debug!(
            sender_id = %self.sender_id,
            entries = request.entries().len(),
            "sending bulk SMS"
        );
        self.client
            .send_form(self.client.endpoints.multi_message_url(), params)
            .await
    }

    fn account_params(&self) -> Vec<(String, String)> {
        let credentials = &self.client.credentials;
        vec![
            (
                Credentials::USER_FIELD.to_owned(),
                credentials.user().to_owned(),
            ),
            (
                Credentials::PASSWORD_FIELD.to_owned(),
                credentials.password().to_owned(),
            ),
            (SenderId::FIELD.to_owned(), self.sender_id.as_str().to_owned()),
        ]
    }
}
