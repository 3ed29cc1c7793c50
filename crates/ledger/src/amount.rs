use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::LedgerError;

/// Expense amount represented as **integer cents**.
///
/// The ledger file stores amounts as decimal text (`12.50`); parsing them into
/// cents keeps the two-digit precision exact across rewrites of the file.
///
/// The store does not check the sign: positivity is a constraint of the input
/// form, not of the ledger.
///
/// # Examples
///
/// ```rust
/// use ledger::Amount;
///
/// let amount = Amount::new(12_50);
/// assert_eq!(amount.cents(), 1250);
/// assert_eq!(amount.to_string(), "12.50");
/// ```
///
/// Parsing accepts `.` or `,` as decimal separator and rejects more than two
/// decimals:
///
/// ```rust
/// use ledger::Amount;
///
/// assert_eq!("40".parse::<Amount>().unwrap().cents(), 4000);
/// assert_eq!("12,5".parse::<Amount>().unwrap().cents(), 1250);
/// assert!("12.345".parse::<Amount>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is at least one cent.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Amount> for i64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl FromStr for Amount {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cents(s, false).map(Amount)
    }
}

impl Amount {
    /// Parse an amount read back from the ledger file.
    ///
    /// Same rules as [`FromStr`], except that extra decimals are rounded half
    /// away from zero to the cent. Files written by the legacy form can hold
    /// float noise such as `0.30000000000000004`.
    ///
    /// ```rust
    /// use ledger::Amount;
    ///
    /// assert_eq!(Amount::parse_rounded("0.30000000000000004").unwrap().cents(), 30);
    /// assert_eq!(Amount::parse_rounded("12.345").unwrap().cents(), 1235);
    /// ```
    pub fn parse_rounded(s: &str) -> Result<Self, LedgerError> {
        parse_cents(s, true).map(Amount)
    }
}

fn parse_cents(s: &str, round_extra_decimals: bool) -> Result<i64, LedgerError> {
    let invalid = || LedgerError::InvalidAmount(format!("invalid amount \"{s}\""));
    let overflow = || LedgerError::InvalidAmount("amount too large".to_string());

    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidAmount("empty amount".to_string()));
    }

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let rest = rest.replace(',', ".");
    let (units_str, frac_str) = match rest.split_once('.') {
        Some((units, frac)) => (units, frac),
        None => (rest.as_str(), ""),
    };

    if units_str.is_empty() || !units_str.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    if !frac_str.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    if frac_str.len() > 2 && !round_extra_decimals {
        return Err(LedgerError::InvalidAmount("too many decimals".to_string()));
    }

    let units: i64 = units_str.parse().map_err(|_| overflow())?;
    let (cents_str, extra) = frac_str.split_at(frac_str.len().min(2));
    let mut cents: i64 = match cents_str.len() {
        0 => 0,
        1 => cents_str.parse::<i64>().map_err(|_| invalid())? * 10,
        _ => cents_str.parse().map_err(|_| invalid())?,
    };
    if extra.starts_with(['5', '6', '7', '8', '9']) {
        cents += 1;
    }

    let total = units
        .checked_mul(100)
        .and_then(|v| v.checked_add(cents))
        .ok_or_else(overflow)?;

    Ok(if negative { -total } else { total })
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Amount::parse_rounded(&raw).map_err(serde::de::Error::custom)
    }
}
