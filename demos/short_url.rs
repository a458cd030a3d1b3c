use std::io;

use fasmga::{FasmgaClient, IdType, ShortOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("FASMGA_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "FASMGA_TOKEN environment variable is required",
        )
    })?;

    let client = FasmgaClient::new(token)?;
    // A custom `id` would take precedence over `id_type`.
    let options = ShortOptions {
        captcha: Some(true),
        ..ShortOptions::generated("https://example.com", false, IdType::MixedCase)
    };
    let created = client.short(options).await?;

    println!("created: {}", created.success);

    Ok(())
}
