use anyhow::Result;
use clap::Parser;
use device_query::cli::Args;
use device_query::driver;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // `.env` may hold credentials referenced from the testbed as %ENV{...}
    dotenv::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    driver::run(&args).await
}
