/// `consumer-info` command: tabulate the logged-in account's profile.
use anyhow::Result;

use crate::cli::output::consumer_table;

/// Run `bpdb consumer-info`.
pub async fn run() -> Result<()> {
    println!("Fetching consumer information...");
    let client = super::authenticated_client()?;

    match client.consumer_info().await? {
        Some(profile) => {
            println!("\nConsumer Information:");
            println!("{}", consumer_table(&profile));
        }
        None => println!("No consumer information found."),
    }
    Ok(())
}
