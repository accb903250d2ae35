//! Calendar-period tenors.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Unit of a [`Tenor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenorUnit {
    /// Calendar days
    Days,
    /// Weeks (7 days)
    Weeks,
    /// Months (30 days)
    Months,
    /// Years (365 days)
    Years,
}

/// Fixed day-count approximation per unit, coarsest first.
///
/// This is the order [`Tenor::from_days`] tries units in.
const UNIT_DAYS: [(TenorUnit, i64); 4] = [
    (TenorUnit::Years, 365),
    (TenorUnit::Months, 30),
    (TenorUnit::Weeks, 7),
    (TenorUnit::Days, 1),
];

impl TenorUnit {
    /// Returns the number of days one unit stands for.
    ///
    /// This is an approximation (30-day months, 365-day years), not a
    /// calendar-exact length.
    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            TenorUnit::Days => 1,
            TenorUnit::Weeks => 7,
            TenorUnit::Months => 30,
            TenorUnit::Years => 365,
        }
    }

    /// Returns the unit letter used in tenor strings.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            TenorUnit::Days => 'D',
            TenorUnit::Weeks => 'W',
            TenorUnit::Months => 'M',
            TenorUnit::Years => 'Y',
        }
    }

    /// Looks up a unit from its letter, ignoring case.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'D' => Some(TenorUnit::Days),
            'W' => Some(TenorUnit::Weeks),
            'M' => Some(TenorUnit::Months),
            'Y' => Some(TenorUnit::Years),
            _ => None,
        }
    }
}

impl fmt::Display for TenorUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TenorUnit::Days => "Days",
            TenorUnit::Weeks => "Weeks",
            TenorUnit::Months => "Months",
            TenorUnit::Years => "Years",
        };
        write!(f, "{name}")
    }
}

/// A calendar period such as `3M` or `10Y`.
///
/// Tenors are always held in canonical form: a day count that is a whole
/// number of weeks is expressed in weeks, and a month count that is a whole
/// number of years is expressed in years. So `7D == 1W` and `48M == 4Y`.
///
/// Ordering goes through [`Tenor::to_days`]. Two different tenors that map
/// to the same day count (`30D` and `1M`) are neither equal nor ordered.
///
/// # Example
///
/// ```rust
/// use ordinate_core::types::{Tenor, TenorUnit};
///
/// let t: Tenor = "48m".parse().unwrap();
/// assert_eq!(t.unit(), TenorUnit::Years);
/// assert_eq!(t.multiplier(), 4);
/// assert_eq!(t.to_string(), "4Y");
/// assert!(t > Tenor::M6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tenor {
    unit: TenorUnit,
    multiplier: u32,
}

impl Tenor {
    /// 1-day tenor.
    pub const D1: Self = Self::canonical(TenorUnit::Days, 1);
    /// 1-week tenor.
    pub const W1: Self = Self::canonical(TenorUnit::Weeks, 1);
    /// 1-month tenor.
    pub const M1: Self = Self::canonical(TenorUnit::Months, 1);
    /// 3-month tenor.
    pub const M3: Self = Self::canonical(TenorUnit::Months, 3);
    /// 6-month tenor.
    pub const M6: Self = Self::canonical(TenorUnit::Months, 6);
    /// 1-year tenor.
    pub const Y1: Self = Self::canonical(TenorUnit::Years, 1);
    /// 2-year tenor.
    pub const Y2: Self = Self::canonical(TenorUnit::Years, 2);
    /// 5-year tenor.
    pub const Y5: Self = Self::canonical(TenorUnit::Years, 5);
    /// 10-year tenor.
    pub const Y10: Self = Self::canonical(TenorUnit::Years, 10);
    /// 30-year tenor.
    pub const Y30: Self = Self::canonical(TenorUnit::Years, 30);

    /// Creates a tenor, canonicalizing the unit.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidMultiplier`] if `multiplier` is zero.
    pub fn new(unit: TenorUnit, multiplier: u32) -> CoreResult<Self> {
        if multiplier == 0 {
            return Err(CoreError::InvalidMultiplier { multiplier });
        }
        Ok(Self::canonical(unit, multiplier))
    }

    /// Creates a tenor of `n` days.
    pub fn days(n: u32) -> CoreResult<Self> {
        Self::new(TenorUnit::Days, n)
    }

    /// Creates a tenor of `n` weeks.
    pub fn weeks(n: u32) -> CoreResult<Self> {
        Self::new(TenorUnit::Weeks, n)
    }

    /// Creates a tenor of `n` months.
    pub fn months(n: u32) -> CoreResult<Self> {
        Self::new(TenorUnit::Months, n)
    }

    /// Creates a tenor of `n` years.
    pub fn years(n: u32) -> CoreResult<Self> {
        Self::new(TenorUnit::Years, n)
    }

    const fn canonical(unit: TenorUnit, multiplier: u32) -> Self {
        match unit {
            TenorUnit::Days if multiplier % 7 == 0 => Self {
                unit: TenorUnit::Weeks,
                multiplier: multiplier / 7,
            },
            TenorUnit::Months if multiplier % 12 == 0 => Self {
                unit: TenorUnit::Years,
                multiplier: multiplier / 12,
            },
            _ => Self { unit, multiplier },
        }
    }

    const fn is_canonical(unit: TenorUnit, multiplier: u32) -> bool {
        match unit {
            TenorUnit::Days => multiplier % 7 != 0,
            TenorUnit::Months => multiplier % 12 != 0,
            _ => true,
        }
    }

    /// Parses a tenor string: a positive integer followed by one of
    /// `D`, `W`, `M`, `Y` (case-insensitive). No sign, whitespace or
    /// decimal point is accepted.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let mut chars = s.chars();
        let unit_chr = chars
            .next_back()
            .ok_or_else(|| CoreError::parse(s, "empty tenor string"))?;
        let unit = TenorUnit::from_char(unit_chr)
            .ok_or_else(|| CoreError::parse(s, format!("unknown time unit '{unit_chr}'")))?;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::parse(
                s,
                "multiplier must be a positive integer",
            ));
        }
        let multiplier: u32 = digits
            .parse()
            .map_err(|e: std::num::ParseIntError| CoreError::parse(s, e.to_string()))?;
        if multiplier == 0 {
            return Err(CoreError::parse(s, "multiplier must be positive"));
        }

        Ok(Self::canonical(unit, multiplier))
    }

    /// Converts a day count back to a tenor.
    ///
    /// Units are tried from coarsest to finest (years, months, weeks, days);
    /// the first unit that divides `days` exactly and yields a canonical
    /// tenor wins. A multiple of 360 days that is not a whole number of
    /// years therefore comes back in days rather than as `12M`, which would
    /// canonicalize to `1Y` and lose five days.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Conversion`] if `days` is not positive or does
    /// not fit a tenor multiplier.
    pub fn from_days(days: i64) -> CoreResult<Self> {
        if days <= 0 {
            return Err(CoreError::conversion(days, "day count must be positive"));
        }

        for (unit, unit_days) in UNIT_DAYS {
            if days % unit_days != 0 {
                continue;
            }
            let multiplier = u32::try_from(days / unit_days)
                .map_err(|_| CoreError::conversion(days, "multiplier overflows u32"))?;
            if Self::is_canonical(unit, multiplier) {
                return Ok(Self { unit, multiplier });
            }
        }

        Err(CoreError::conversion(days, "no unit divides the day count"))
    }

    /// Returns the approximate length in days.
    #[must_use]
    pub fn to_days(&self) -> i64 {
        i64::from(self.multiplier) * self.unit.days()
    }

    /// Returns the canonical unit.
    #[must_use]
    pub fn unit(&self) -> TenorUnit {
        self.unit
    }

    /// Returns the canonical multiplier.
    #[must_use]
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }
}

impl FromStr for Tenor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tenor::parse(s)
    }
}

impl TryFrom<i64> for Tenor {
    type Error = CoreError;

    fn try_from(days: i64) -> Result<Self, Self::Error> {
        Tenor::from_days(days)
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.multiplier, self.unit.to_char())
    }
}

impl PartialOrd for Tenor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.to_days().cmp(&other.to_days()) {
            Ordering::Equal => None,
            ord => Some(ord),
        }
    }
}

// Day-count comparisons.

impl PartialEq<i64> for Tenor {
    fn eq(&self, other: &i64) -> bool {
        self.to_days() == *other
    }
}

impl PartialEq<Tenor> for i64 {
    fn eq(&self, other: &Tenor) -> bool {
        *self == other.to_days()
    }
}

impl PartialOrd<i64> for Tenor {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.to_days().cmp(other))
    }
}

impl PartialOrd<Tenor> for i64 {
    fn partial_cmp(&self, other: &Tenor) -> Option<Ordering> {
        Some(self.cmp(&other.to_days()))
    }
}

// Tenor-string comparisons. An unparsable string compares unequal and
// unordered.

impl PartialEq<&str> for Tenor {
    fn eq(&self, other: &&str) -> bool {
        Tenor::parse(other).is_ok_and(|t| *self == t)
    }
}

impl PartialEq<Tenor> for &str {
    fn eq(&self, other: &Tenor) -> bool {
        other == self
    }
}

impl PartialOrd<&str> for Tenor {
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        Tenor::parse(other).ok().and_then(|t| self.partial_cmp(&t))
    }
}

impl PartialOrd<Tenor> for &str {
    fn partial_cmp(&self, other: &Tenor) -> Option<Ordering> {
        Tenor::parse(self).ok().and_then(|t| t.partial_cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenor(s: &str) -> Tenor {
        Tenor::parse(s).unwrap()
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(tenor("1D").unit(), TenorUnit::Days);
        assert_eq!(tenor("3W").unit(), TenorUnit::Weeks);
        assert_eq!(tenor("6M").unit(), TenorUnit::Months);
        assert_eq!(tenor("10Y").unit(), TenorUnit::Years);
        assert_eq!(tenor("10Y").multiplier(), 10);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(tenor("3m"), tenor("3M"));
        assert_eq!(tenor("2y"), Tenor::Y2);
    }

    #[test]
    fn test_ambiguity_resolution() {
        assert_eq!(tenor("7D"), tenor("1W"));
        assert_eq!(tenor("12M"), tenor("1Y"));
        assert_eq!(tenor("48M"), tenor("4Y"));
        assert_eq!(tenor("14D").to_string(), "2W");
        assert_eq!(tenor("18M").to_string(), "18M");
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "D", "3Q", "3", "-3M", "+3M", "3.5Y", " 3M", "3 M", "0D", "M3"] {
            assert!(
                matches!(Tenor::parse(bad), Err(CoreError::Parse { .. })),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(
            Tenor::new(TenorUnit::Months, 0),
            Err(CoreError::InvalidMultiplier { multiplier: 0 })
        );
        assert_eq!(Tenor::new(TenorUnit::Days, 21).unwrap().to_string(), "3W");
    }

    #[test]
    fn test_to_days() {
        assert_eq!(tenor("1D").to_days(), 1);
        assert_eq!(tenor("3W").to_days(), 21);
        assert_eq!(tenor("6M").to_days(), 180);
        assert_eq!(tenor("10Y").to_days(), 3650);
    }

    #[test]
    fn test_from_days_prefers_coarsest_unit() {
        assert_eq!(Tenor::from_days(365).unwrap(), Tenor::Y1);
        assert_eq!(Tenor::from_days(730).unwrap(), Tenor::Y2);
        assert_eq!(Tenor::from_days(90).unwrap(), Tenor::M3);
        assert_eq!(Tenor::from_days(210).unwrap(), tenor("7M"));
        assert_eq!(Tenor::from_days(14).unwrap(), tenor("2W"));
        assert_eq!(Tenor::from_days(5).unwrap(), tenor("5D"));
    }

    #[test]
    fn test_from_days_keeps_day_count() {
        // 360 days = 12 x 30 but 12M canonicalizes to 1Y (365 days).
        let t = Tenor::from_days(360).unwrap();
        assert_eq!(t.to_string(), "360D");
        assert_eq!(t.to_days(), 360);
    }

    #[test]
    fn test_from_days_rejects_non_positive() {
        assert!(matches!(Tenor::from_days(0), Err(CoreError::Conversion { .. })));
        assert!(matches!(Tenor::from_days(-7), Err(CoreError::Conversion { .. })));
        assert!(Tenor::try_from(-1_i64).is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(Tenor::M1 < Tenor::M3);
        assert!(Tenor::Y1 > tenor("11M"));
        assert!(tenor("2W") < tenor("15D"));
        let mut tenors = vec![Tenor::Y10, Tenor::W1, Tenor::M6, Tenor::D1];
        tenors.sort_by_key(Tenor::to_days);
        assert_eq!(tenors, vec![Tenor::D1, Tenor::W1, Tenor::M6, Tenor::Y10]);
    }

    #[test]
    fn test_same_day_count_is_unordered() {
        let days = tenor("30D");
        assert_ne!(days, Tenor::M1);
        assert_eq!(days.partial_cmp(&Tenor::M1), None);
        assert!(!(days < Tenor::M1) && !(days > Tenor::M1));
    }

    #[test]
    fn test_mixed_comparisons() {
        assert!(Tenor::M3 == 90_i64);
        assert!(90_i64 == Tenor::M3);
        assert!(Tenor::M3 < 91_i64);
        assert!(400_i64 > Tenor::Y1);

        assert!(Tenor::Y1 == "12M");
        assert!("1w" == Tenor::W1);
        assert!(Tenor::M6 < "1Y");
        assert!("2Y" > Tenor::Y1);
        assert!(Tenor::M6 != "garbage");
        assert_eq!(Tenor::M6.partial_cmp(&"garbage"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Tenor::Y10.to_string(), "10Y");
        assert_eq!(tenor("21d").to_string(), "3W");
        assert_eq!(TenorUnit::Months.to_string(), "Months");
    }

    #[test]
    fn test_unit_constructors() {
        assert_eq!(Tenor::days(14).unwrap(), tenor("2W"));
        assert_eq!(Tenor::weeks(1).unwrap(), Tenor::W1);
        assert_eq!(Tenor::months(24).unwrap(), Tenor::Y2);
        assert_eq!(Tenor::years(30).unwrap(), Tenor::Y30);
        assert!(Tenor::months(0).is_err());
    }
}
