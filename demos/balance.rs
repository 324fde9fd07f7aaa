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

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let user = required_env("SMSCOUNTRY_USER")?;
    let password = required_env("SMSCOUNTRY_PASSWORD")?;

    let client = SmsCountryClient::new(user, password);
    let balance = client.balance().await?;
    println!("balance: {balance}");

    Ok(())
}
