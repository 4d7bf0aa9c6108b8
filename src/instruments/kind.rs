//! Option kind (call/put) with payoff helpers.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::InstrumentError;

/// Kind of vanilla option.
///
/// The enum is closed: once a kind has been parsed at the input boundary,
/// an invalid kind is unrepresentable and every engine can match
/// exhaustively. Unrecognised strings fail with
/// [`InstrumentError::InvalidOptionKind`] at parse time.
///
/// # Examples
/// ```
/// use pricer_bsm::instruments::OptionKind;
///
/// let kind: OptionKind = "call".parse().unwrap();
/// assert_eq!(kind, OptionKind::Call);
///
/// assert!("butterfly".parse::<OptionKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionKind {
    /// Call option: the right to buy at the strike.
    Call,
    /// Put option: the right to sell at the strike.
    Put,
}

impl OptionKind {
    /// Payoff sign: `+1` for a call, `-1` for a put.
    ///
    /// A payoff of `max(sign * (S_T - K), 0)` covers both kinds with a
    /// single expression.
    #[inline]
    pub fn sign<T: Float>(self) -> T {
        match self {
            OptionKind::Call => T::one(),
            OptionKind::Put => -T::one(),
        }
    }

    /// Intrinsic value at a given spot level.
    ///
    /// `max(S - K, 0)` for a call, `max(K - S, 0)` for a put.
    ///
    /// # Examples
    /// ```
    /// use pricer_bsm::instruments::OptionKind;
    ///
    /// assert_eq!(OptionKind::Call.intrinsic(110.0_f64, 100.0), 10.0);
    /// assert_eq!(OptionKind::Put.intrinsic(110.0_f64, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn intrinsic<T: Float>(self, spot: T, strike: T) -> T {
        let diff = match self {
            OptionKind::Call => spot - strike,
            OptionKind::Put => strike - spot,
        };
        diff.max(T::zero())
    }
}

impl FromStr for OptionKind {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("call") {
            Ok(OptionKind::Call)
        } else if s.eq_ignore_ascii_case("put") {
            Ok(OptionKind::Put)
        } else {
            Err(InstrumentError::InvalidOptionKind(s.to_string()))
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "call"),
            OptionKind::Put => write!(f, "put"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercase() {
        assert_eq!("call".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!("put".parse::<OptionKind>().unwrap(), OptionKind::Put);
    }

    #[test]
    fn test_parse_uppercase() {
        assert_eq!("CALL".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!("Put".parse::<OptionKind>().unwrap(), OptionKind::Put);
    }

    #[test]
    fn test_parse_unknown_kind_fails() {
        let result = "straddle".parse::<OptionKind>();
        match result {
            Err(InstrumentError::InvalidOptionKind(s)) => assert_eq!(s, "straddle"),
            other => panic!("Expected InvalidOptionKind, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty_string_fails() {
        assert!("".parse::<OptionKind>().is_err());
    }

    #[test]
    fn test_sign() {
        assert_eq!(OptionKind::Call.sign::<f64>(), 1.0);
        assert_eq!(OptionKind::Put.sign::<f64>(), -1.0);
    }

    #[test]
    fn test_intrinsic_call() {
        assert_eq!(OptionKind::Call.intrinsic(105.0_f64, 100.0), 5.0);
        assert_eq!(OptionKind::Call.intrinsic(95.0_f64, 100.0), 0.0);
        assert_eq!(OptionKind::Call.intrinsic(100.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_intrinsic_put() {
        assert_eq!(OptionKind::Put.intrinsic(95.0_f64, 100.0), 5.0);
        assert_eq!(OptionKind::Put.intrinsic(105.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_display_roundtrip() {
        for kind in [OptionKind::Call, OptionKind::Put] {
            let parsed: OptionKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }
}
