//! Money value object: a decimal amount in a concrete currency.
//!
//! Amounts are stored in natural form (`44.99`, not cents) as
//! `rust_decimal::Decimal`, so display formatting is exact.

use core::str::FromStr;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::markup::HtmlSafe;
use crate::value_object::ValueObject;

/// Currencies the storefront can render prices in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Aud,
    Cad,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Aud => "AUD",
            Currency::Cad => "CAD",
        }
    }

    /// Display symbol, prefixed to the amount.
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy => "¥",
            Currency::Aud => "A$",
            Currency::Cad => "C$",
        }
    }

    /// Number of decimal places shown for this currency.
    pub fn decimal_places(self) -> u32 {
        match self {
            Currency::Jpy => 0,
            _ => 2,
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            "JPY" => Ok(Currency::Jpy),
            "AUD" => Ok(Currency::Aud),
            "CAD" => Ok(Currency::Cad),
            other => Err(DomainError::unknown_currency(other)),
        }
    }
}

/// An amount of money in a concrete currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Format as plain text, e.g. `$2.00`, `-€5.50`, `¥500`.
    ///
    /// The sign precedes the currency symbol; the amount is rounded to the
    /// currency's decimal places.
    pub fn format(&self) -> String {
        let places = self.currency.decimal_places();
        let rounded = self.amount.abs().round_dp(places);
        let sign = if self.amount.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!(
            "{sign}{}{:.*}",
            self.currency.symbol(),
            places as usize,
            rounded
        )
    }

    /// Format as HTML-safe markup, ready for direct insertion into a page.
    pub fn to_html(&self) -> HtmlSafe {
        HtmlSafe::escape(&self.format())
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.format())
    }
}
