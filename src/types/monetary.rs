use crate::types::errors::MonetaryError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DECIMAL_PLACES: usize = 2;
const SCALE: i64 = 10i64.pow(DECIMAL_PLACES as u32);
const CURRENCY_SYMBOL: char = '$';
const THOUSANDS_SEPARATOR: char = ',';

/// A US dollar amount held as whole cents.
///
/// Parses the currency strings served by the records source (`"$1,234"`, `"$1,670.57"`)
/// and displays the same way (`"$1,234.00"`), so a parsed amount never passes through a float.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Monetary(i64);

impl Monetary {
    pub fn new() -> Self {
        Monetary(0)
    }

    /// Whole currency units, e.g. `from_units(1234)` is `$1,234.00`.
    #[cfg(test)]
    pub fn from_units(units: i64) -> Self {
        Monetary(units * SCALE)
    }

    #[cfg(test)]
    pub fn from_cents(cents: i64) -> Self {
        Monetary(cents)
    }

    #[cfg(test)]
    pub fn cents(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, rhs: Monetary) -> Option<Monetary> {
        self.0.checked_add(rhs.0).map(Monetary)
    }

    pub fn checked_sub(self, rhs: Monetary) -> Option<Monetary> {
        self.0.checked_sub(rhs.0).map(Monetary)
    }

    /// Renders without the currency symbol or separators, e.g. `-1234.50`.
    pub fn to_plain_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = SCALE as u64;
        format!("{}{}.{:0width$}", sign, abs / scale, abs % scale, width = DECIMAL_PLACES)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(digit);
    }

    grouped
}

/// Separators, when present, must split the digits into a leading group of one to three
/// followed by groups of exactly three.
fn has_valid_grouping(integer_part: &str) -> bool {
    if !integer_part.contains(THOUSANDS_SEPARATOR) {
        return true;
    }

    let mut groups = integer_part.split(THOUSANDS_SEPARATOR);
    let leading = groups.next().map_or(0, str::len);

    (1..=3).contains(&leading) && groups.all(|group| group.len() == 3)
}

impl Display for Monetary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = SCALE as u64;
        write!(
            formatter,
            "{}{}{}.{:0width$}",
            sign,
            CURRENCY_SYMBOL,
            group_thousands(abs / scale),
            abs % scale,
            width = DECIMAL_PLACES
        )
    }
}

impl FromStr for Monetary {
    type Err = MonetaryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MonetaryError::InvalidFormat("Value is an empty string".to_string()));
        }

        // Accepts both "-$40" and "$-40".
        let (is_negative, rest) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value)
        };
        let rest = rest.strip_prefix(CURRENCY_SYMBOL).unwrap_or(rest);
        let (is_negative, rest) = match rest.strip_prefix('-') {
            Some(rest) if !is_negative => (true, rest),
            Some(_) => return Err(MonetaryError::InvalidFormat(format!("Value [{value}] has more than one sign"))),
            None => (is_negative, rest)
        };

        let (integer_part, fraction_part) = match rest.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (rest, None)
        };

        if integer_part.is_empty() || !has_valid_grouping(integer_part) {
            return Err(MonetaryError::InvalidFormat(format!("Value [{value}] has an invalid integer part")));
        }

        let digits: String = integer_part.chars().filter(|c| *c != THOUSANDS_SEPARATOR).collect();

        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(MonetaryError::InvalidFormat(format!("Value [{value}] has an invalid integer part")));
        }

        let integer: i64 = digits.parse().map_err(|_| MonetaryError::Overflow)?;

        let fraction: i64 = match fraction_part {
            Some(fraction) => {
                if fraction.len() > DECIMAL_PLACES {
                    return Err(MonetaryError::InvalidFormat(format!("Value [{value}] has too many decimal places")));
                }

                if !fraction.chars().all(|c| c.is_ascii_digit()) {
                    return Err(MonetaryError::InvalidFormat(format!("Value [{value}] has an invalid fraction part")));
                }

                let padded = format!("{:0<width$}", fraction, width = DECIMAL_PLACES);

                padded.parse().map_err(|error| {
                    MonetaryError::InvalidFormat(format!("Value [{value}] has an invalid fraction part: {:?}", error))
                })?
            }
            None => 0
        };

        let magnitude = integer.checked_mul(SCALE)
            .and_then(|v| v.checked_add(fraction))
            .ok_or(MonetaryError::Overflow)?;

        Ok(Monetary(if is_negative { -magnitude } else { magnitude }))
    }
}

impl<'de> Deserialize<'de> for Monetary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Monetary::from_str(&value).map_err(de::Error::custom)
    }
}

impl Serialize for Monetary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_plain_string())
    }
}
