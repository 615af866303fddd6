//! Coupon frequency.

use std::fmt;
use std::str::FromStr;

use pricer_core::lazy::Input;
use pricer_core::types::ConfigurationError;

/// Number of coupons paid per year.
///
/// Converts into a constant [`Input`], so it can be passed wherever a bond
/// expects its `frequency` attribute.
///
/// # Examples
///
/// ```
/// use pricer_models::schedules::Frequency;
///
/// let m: Frequency = "semi-annual".parse().unwrap();
/// assert_eq!(m, Frequency::SemiAnnual);
/// assert_eq!(m.coupons_per_year(), 2);
/// assert_eq!(Frequency::from_coupons_per_year(4.0), Some(Frequency::Quarterly));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// 1 coupon a year
    Annual,
    /// 2 coupons a year
    SemiAnnual,
    /// 4 coupons a year
    Quarterly,
    /// 12 coupons a year
    Monthly,
    /// 52 coupons a year
    Weekly,
    /// 365 coupons a year
    Daily,
}

impl Frequency {
    /// Every frequency, least frequent first.
    pub const ALL: [Frequency; 6] = [
        Frequency::Annual,
        Frequency::SemiAnnual,
        Frequency::Quarterly,
        Frequency::Monthly,
        Frequency::Weekly,
        Frequency::Daily,
    ];

    /// Coupons per year, M.
    #[inline]
    pub fn coupons_per_year(self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
            Frequency::Weekly => 52,
            Frequency::Daily => 365,
        }
    }

    /// Finds the frequency paying exactly `m` coupons a year.
    pub fn from_coupons_per_year(m: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f64::from(f.coupons_per_year()) == m)
    }

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Annual => "annual",
            Frequency::SemiAnnual => "semi-annual",
            Frequency::Quarterly => "quarterly",
            Frequency::Monthly => "monthly",
            Frequency::Weekly => "weekly",
            Frequency::Daily => "daily",
        }
    }

    /// Tenor shorthand for one coupon period.
    fn tenor(self) -> &'static str {
        match self {
            Frequency::Annual => "1y",
            Frequency::SemiAnnual => "6m",
            Frequency::Quarterly => "3m",
            Frequency::Monthly => "1m",
            Frequency::Weekly => "1w",
            Frequency::Daily => "1d",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = ConfigurationError;

    /// Accepts names ("Semi Annual", "semi_annual") or tenors ("6M").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        Self::ALL
            .into_iter()
            .find(|f| f.as_str().replace('-', "") == key || f.tenor() == key)
            .ok_or_else(|| ConfigurationError::InvalidInput {
                attribute: "frequency".to_string(),
                found: format!("unknown frequency '{}'", s),
            })
    }
}

impl From<Frequency> for Input {
    fn from(frequency: Frequency) -> Self {
        Input::Constant(f64::from(frequency.coupons_per_year()))
    }
}
