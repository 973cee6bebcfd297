//! Currency codes and display formatting.

mod currency_format;
mod currency_model;

pub use currency_format::{currency_symbol, format_amount, format_currency};
pub use currency_model::CurrencyCode;
