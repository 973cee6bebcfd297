/// Currency used when a form or record does not carry one.
pub const DEFAULT_CURRENCY: &str = "INR";

/// Symbol rendered for any currency code without a dedicated mapping.
pub const FALLBACK_CURRENCY_SYMBOL: &str = "$";

/// Budget consumption (in percent) above which a trip is flagged.
pub const BUDGET_WARNING_THRESHOLD_PERCENT: u32 = 90;

/// Simulated processing latency between trip submission and the itinerary hand-off.
pub const DEFAULT_PLANNING_DELAY_MS: u64 = 1500;

/// Number of travelers assumed when the form leaves the field blank.
pub const DEFAULT_TRAVELERS: u32 = 1;

/// Calendar date format used by every form and record.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
