/// `login` command: exchange phone number + OTP for a session token.
use anyhow::Result;

use bpdb::{Otp, RawPhoneNumber};

use crate::cli::args::LoginArgs;
use crate::cli::session;

/// Run `bpdb login`. Persists the session token for later commands.
pub async fn run(args: &LoginArgs) -> Result<()> {
    let phone = RawPhoneNumber::new(args.phone_number.as_str())?;
    let otp = Otp::new(args.otp.as_str())?;

    println!("Logging in with phone number {}...", phone.raw());
    let mut client = super::fresh_client()?;
    let token = client.login(&phone, &otp).await?;
    session::store(&token)?;
    println!("Successfully logged in with {}", phone.raw());
    Ok(())
}
