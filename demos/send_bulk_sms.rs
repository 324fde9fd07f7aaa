use std::io;

use smscountry::SmsCountryClient;

fn required_env(name: &str) -> io::Result<String> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

/// `SMSCOUNTRY_PHONE` holds comma-separated numbers; each gets its own numbered message.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let user = required_env("SMSCOUNTRY_USER")?;
    let password = required_env("SMSCOUNTRY_PASSWORD")?;
    let sender_id = required_env("SMSCOUNTRY_SENDER_ID")?;
    let phones = required_env("SMSCOUNTRY_PHONE")?;

    let numbers = phones
        .split(',')
        .map(str::trim)
        .filter(|number| !number.is_empty())
        .collect::<Vec<_>>();
    let messages = (1..=numbers.len())
        .map(|idx| format!("Bulk demo message {idx}"))
        .collect::<Vec<_>>();

    let client = SmsCountryClient::builder(user, password)
        .user_agent("smscountry-demos")
        .build()?;
    let response = client
        .sender(sender_id)
        .send_bulk_sms(&messages, &numbers, false)
        .await?;

    println!("response: {}, job id: {:?}", response.body, response.job_id());

    Ok(())
}
