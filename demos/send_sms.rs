use std::io;

use smscountry::{PhoneNumber, SmsCountryClient};

fn required_env(name: &str) -> io::Result<String> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let user = required_env("SMSCOUNTRY_USER")?;
    let password = required_env("SMSCOUNTRY_PASSWORD")?;
    let sender_id = required_env("SMSCOUNTRY_SENDER_ID")?;
    let phone_raw = required_env("SMSCOUNTRY_PHONE")?;
    let message = std::env::var("SMSCOUNTRY_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smscountry demo.".to_owned());

    let client = SmsCountryClient::new(user, password);
    let phone = PhoneNumber::parse(None, phone_raw)?;
    let response = client
        .sender(sender_id)
        .send_sms(message, phone, true)
        .await?;

    println!("response: {}, job id: {:?}", response.body, response.job_id());

    Ok(())
}
