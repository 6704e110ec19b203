//! Sales totals and average ticket.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};
use crate::summary::NumericAccumulator;

/// Currency symbol printed before money amounts by default.
pub const DEFAULT_CURRENCY: &str = "R$";

/// Summary of a list of sale amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesSummary {
    /// Number of sales.
    pub count: usize,
    /// Total revenue.
    pub total: f64,
    /// Average revenue per sale.
    pub average_ticket: f64,
}

impl SalesSummary {
    pub fn compute(amounts: &[f64]) -> Result<Self> {
        let acc: NumericAccumulator = amounts.iter().copied().collect();
        let average_ticket = acc
            .mean()
            .ok_or_else(|| TallyError::EmptyData("no sales given".to_string()))?;

        Ok(Self {
            count: acc.count(),
            total: acc.sum(),
            average_ticket,
        })
    }
}

/// Format an amount with a currency symbol, thousands separators and two
/// decimals, e.g. `R$ 1,234.50`.
pub fn format_money(currency: &str, amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{} {}{}.{}", currency, sign, grouped, cents)
}
