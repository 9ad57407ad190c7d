#[derive(Debug, Clone, PartialEq, Eq)]
/// One historical prepaid top-up record.
///
/// Amounts are preserved as decimal strings exactly as the provider sent them.
/// Entries come back in provider order (observed reverse-chronological, not
/// re-sorted by this crate).
pub struct RechargeEntry {
    pub date: String,
    pub gross_amount: String,
    pub energy_cost: String,
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Flat snapshot of the logged-in account, immutable once returned.
pub struct ConsumerProfile {
    pub division: String,
    pub meter_type: String,
    pub account_type: String,
    pub snd_division: String,
    pub sanction_load: String,
    pub customer_name: String,
    pub customer_address: String,
    pub tariff_category: String,
}
