use std::io;

use fasmga::{EditOptions, FasmgaClient, PasswordUpdate};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("FASMGA_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "FASMGA_TOKEN environment variable is required",
        )
    })?;
    let id = std::env::var("FASMGA_URL_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "FASMGA_URL_ID environment variable is required",
        )
    })?;

    let client = FasmgaClient::new(token)?;
    // `PasswordUpdate::Remove` would clear the password instead.
    let options = EditOptions {
        password: Some(PasswordUpdate::set("mySuperSecurePassword")?),
        ..Default::default()
    };
    let edited = client.edit(id, options).await?;

    println!("edited: {}", edited.success);

    Ok(())
}
