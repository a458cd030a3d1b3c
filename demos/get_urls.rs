use std::io;

use fasmga::FasmgaClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("FASMGA_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "FASMGA_TOKEN environment variable is required",
        )
    })?;

    let client = FasmgaClient::new(token)?;
    for url in client.get_urls().await? {
        println!(
            "{} -> {} (clicks: {}, security: {:?})",
            url.id.as_str(),
            url.redirect_url,
            url.clicks,
            url.security_type
        );
    }

    Ok(())
}
