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
    let id = std::env::var("FASMGA_URL_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "FASMGA_URL_ID environment variable is required",
        )
    })?;

    let client = FasmgaClient::new(token)?;
    // Deleted urls cannot be restored.
    let deleted = client.delete(id).await?;

    println!("deleted: {}", deleted.success);

    Ok(())
}
