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
    let user = client.get_user().await?;

    println!(
        "username: {}, premium: {}, 2fa: {}, banned: {}",
        user.username, user.is_premium, user.two_factor_enabled, user.is_banned
    );

    Ok(())
}
