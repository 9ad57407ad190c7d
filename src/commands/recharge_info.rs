/// `recharge-info` command: tabulate prepaid top-up history.
use anyhow::Result;

use bpdb::{CustomerNumber, MeterNumber};

use crate::cli::args::RechargeInfoArgs;
use crate::cli::output::recharge_table;

/// Run `bpdb recharge-info`.
pub async fn run(args: &RechargeInfoArgs) -> Result<()> {
    let customer = CustomerNumber::new(args.customer_number.as_str())?;
    let meter = MeterNumber::new(args.meter_number.as_str())?;

    println!("Fetching recharge history...");
    let client = super::authenticated_client()?;
    let entries = client.recharge_info(&customer, &meter).await?;

    if entries.is_empty() {
        println!("No recharge history found.");
        return Ok(());
    }

    println!("\nRecharge History:");
    println!("{}", recharge_table(&entries));
    Ok(())
}
