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
    let ratelimit = client.get_ratelimit().await?;

    println!("remain: {}, message: {}", ratelimit.remain, ratelimit.message);

    Ok(())
}
