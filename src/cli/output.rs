/// Output formatting: table rendering for recharge and consumer data.
use comfy_table::{Table, presets::ASCII_BORDERS_ONLY_CONDENSED};

use bpdb::{ConsumerProfile, RechargeEntry};

/// Build the recharge-history table, one row per entry in provider order.
pub fn recharge_table(entries: &[RechargeEntry]) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_BORDERS_ONLY_CONDENSED);
    table.set_header(["Date", "Gross Amount", "Energy Cost", "Tokens"]);
    for entry in entries {
        table.add_row([
            entry.date.as_str(),
            entry.gross_amount.as_str(),
            entry.energy_cost.as_str(),
            &entry.tokens.join(", "),
        ]);
    }
    table
}

/// Build the two-column consumer-information table, fields in fixed order.
pub fn consumer_table(profile: &ConsumerProfile) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_BORDERS_ONLY_CONDENSED);
    table.add_row(["Division", &profile.division]);
    table.add_row(["Meter Type", &profile.meter_type]);
    table.add_row(["Account Type", &profile.account_type]);
    table.add_row(["S&D Division", &profile.snd_division]);
    table.add_row(["Sanction Load", &profile.sanction_load]);
    table.add_row(["Customer Name", &profile.customer_name]);
    table.add_row(["Customer Address", &profile.customer_address]);
    table.add_row(["Tariff Category", &profile.tariff_category]);
    table
}
