/// CLI argument definitions via clap derive.
use clap::{Parser, Subcommand};

/// bpdb — manage BPDB smart-meter accounts from the CLI.
#[derive(Debug, Parser)]
#[command(
    name = "bpdb",
    about = "Access BPDB smart-meter consumer information and recharge history",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// All subcommands, mapping 1:1 to API client operations.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send an OTP to a phone number for authentication.
    SendOtp(SendOtpArgs),
    /// Log in with a phone number and OTP; stores the session for later commands.
    Login(LoginArgs),
    /// Show recharge history for a customer and meter number.
    RechargeInfo(RechargeInfoArgs),
    /// Show consumer information for the logged-in account.
    ConsumerInfo,
}

/// Arguments for `bpdb send-otp`.
#[derive(Debug, Parser)]
pub struct SendOtpArgs {
    /// Phone number registered with BPDB (passed through as given).
    pub phone_number: String,
}

/// Arguments for `bpdb login`.
#[derive(Debug, Parser)]
pub struct LoginArgs {
    /// Phone number the OTP was sent to.
    pub phone_number: String,

    /// One-time password received via SMS.
    pub otp: String,
}

/// Arguments for `bpdb recharge-info`.
#[derive(Debug, Parser)]
pub struct RechargeInfoArgs {
    /// BPDB customer account number.
    pub customer_number: String,

    /// Prepaid meter number.
    pub meter_number: String,
}
