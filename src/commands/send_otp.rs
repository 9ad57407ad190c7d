/// `send-otp` command: ask the provider to text an OTP to a phone number.
use anyhow::Result;

use bpdb::RawPhoneNumber;

use crate::cli::args::SendOtpArgs;

/// Run `bpdb send-otp`.
pub async fn run(args: &SendOtpArgs) -> Result<()> {
    let phone = RawPhoneNumber::new(args.phone_number.as_str())?;

    println!("Sending OTP to {}...", phone.raw());
    let client = super::fresh_client()?;
    client.send_otp(&phone).await?;
    println!("OTP sent to {}", phone.raw());
    Ok(())
}
