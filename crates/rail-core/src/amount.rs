//! Denomination arithmetic on decimal digit strings.
//!
//! Ledger balances exceed every native integer width, so amounts cross
//! the API boundary as decimal digit strings and all arithmetic runs on
//! [`BigUint`]. Results are canonical: no exponent notation, no grouping
//! separators, no leading zeros except the single digit `"0"`.

use num_bigint::BigUint;

use crate::error::AmountError;

/// Named denominations of the ledger's token, each a fixed power of ten
/// of the indivisible base unit `raw`.
///
/// Names are case-sensitive wire identifiers: `Mrai` is mega, `mrai` is
/// milli. `XRB` is the display ticker and scales identically to `Mrai`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// `raw`, the indivisible base unit.
    Raw,
    /// `prai`, 10^15 raw.
    Pico,
    /// `urai`, 10^18 raw.
    Micro,
    /// `mrai`, 10^21 raw.
    Milli,
    /// `rai`, 10^24 raw.
    Rai,
    /// `krai`, 10^27 raw.
    Kilo,
    /// `Mrai`, 10^30 raw.
    Mega,
    /// `XRB`, 10^30 raw.
    Xrb,
    /// `Grai`, 10^33 raw.
    Giga,
    /// `Trai`, 10^36 raw.
    Tera,
}

impl Unit {
    /// Every known unit, smallest scale first.
    pub const ALL: [Unit; 10] = [
        Unit::Raw,
        Unit::Pico,
        Unit::Micro,
        Unit::Milli,
        Unit::Rai,
        Unit::Kilo,
        Unit::Mega,
        Unit::Xrb,
        Unit::Giga,
        Unit::Tera,
    ];

    /// The wire name of this unit.
    pub fn name(self) -> &'static str {
        match self {
            Unit::Raw => "raw",
            Unit::Pico => "prai",
            Unit::Micro => "urai",
            Unit::Milli => "mrai",
            Unit::Rai => "rai",
            Unit::Kilo => "krai",
            Unit::Mega => "Mrai",
            Unit::Xrb => "XRB",
            Unit::Giga => "Grai",
            Unit::Tera => "Trai",
        }
    }

    /// Power-of-ten exponent relative to raw.
    pub fn exponent(self) -> u32 {
        match self {
            Unit::Raw => 0,
            Unit::Pico => 15,
            Unit::Micro => 18,
            Unit::Milli => 21,
            Unit::Rai => 24,
            Unit::Kilo => 27,
            Unit::Mega | Unit::Xrb => 30,
            Unit::Giga => 33,
            Unit::Tera => 36,
        }
    }

    /// Parse a case-sensitive wire name.
    pub fn from_name(name: &str) -> Option<Unit> {
        Unit::ALL.into_iter().find(|unit| unit.name() == name)
    }

    /// Exponent for a wire name. Unknown names scale as raw (exponent 0);
    /// a compatibility quirk of the protocol, not an error.
    pub fn exponent_of(name: &str) -> u32 {
        Unit::from_name(name).map(Unit::exponent).unwrap_or(0)
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert `amount` between two known denominations.
///
/// Down-scaling divisions round half-up to zero decimal places, so
/// conversions across an exact power-of-ten boundary are lossless in
/// both directions.
pub fn convert(amount: &str, from: Unit, to: Unit) -> Result<String, AmountError> {
    let value = parse_amount(amount)?;
    let shift = i64::from(from.exponent()) - i64::from(to.exponent());
    Ok(scale(value, shift).to_string())
}

/// String-boundary variant of [`convert`]: unit names outside the known
/// set behave as raw (see [`Unit::exponent_of`]).
pub fn convert_by_name(amount: &str, from: &str, to: &str) -> Result<String, AmountError> {
    let value = parse_amount(amount)?;
    let shift = i64::from(Unit::exponent_of(from)) - i64::from(Unit::exponent_of(to));
    Ok(scale(value, shift).to_string())
}

/// `base - amount`, failing rather than going negative: the ledger has
/// no negative balances.
pub fn subtract(base: &str, amount: &str) -> Result<String, AmountError> {
    let base_value = parse_amount(base)?;
    let amount_value = parse_amount(amount)?;
    if amount_value > base_value {
        return Err(AmountError::Insufficient {
            base: base.to_owned(),
            amount: amount.to_owned(),
        });
    }
    Ok((base_value - amount_value).to_string())
}

/// `base + amount`. Never overflows; magnitude is unbounded.
pub fn add(base: &str, amount: &str) -> Result<String, AmountError> {
    let sum = parse_amount(base)? + parse_amount(amount)?;
    Ok(sum.to_string())
}

/// Encode a raw amount as exactly 32 uppercase hex characters,
/// zero-padded on the left. Amounts are defined to fit 128 bits; larger
/// values are an error rather than a truncated encoding.
pub fn to_hex(amount: &str) -> Result<String, AmountError> {
    let value = parse_amount(amount)?;
    if value.bits() > 128 {
        return Err(AmountError::Overflow(amount.to_owned()));
    }
    Ok(format!("{:0>32}", value.to_str_radix(16).to_uppercase()))
}

fn parse_amount(amount: &str) -> Result<BigUint, AmountError> {
    if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::InvalidDigits(amount.to_owned()));
    }
    BigUint::parse_bytes(amount.as_bytes(), 10)
        .ok_or_else(|| AmountError::InvalidDigits(amount.to_owned()))
}

/// Multiply by 10^shift. Negative shifts divide, rounding half-up to an
/// integer result.
fn scale(value: BigUint, shift: i64) -> BigUint {
    if shift == 0 {
        return value;
    }
    if shift > 0 {
        return value * BigUint::from(10u32).pow(shift as u32);
    }
    let divisor = BigUint::from(10u32).pow((-shift) as u32);
    let quotient = &value / &divisor;
    let remainder = value - &quotient * &divisor;
    if remainder * 2u32 >= divisor {
        quotient + 1u32
    } else {
        quotient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_is_identity_for_every_unit() {
        for unit in Unit::ALL {
            assert_eq!(convert("42", unit, unit).unwrap(), "42");
        }
    }

    #[test]
    fn convert_round_trips_across_units() {
        let raw = convert("5", Unit::Mega, Unit::Raw).unwrap();
        assert_eq!(convert(&raw, Unit::Raw, Unit::Mega).unwrap(), "5");

        let krai = convert("7", Unit::Giga, Unit::Kilo).unwrap();
        assert_eq!(krai, "7000000");
        assert_eq!(convert(&krai, Unit::Kilo, Unit::Giga).unwrap(), "7");
    }

    #[test]
    fn convert_exact_power_of_ten_boundaries() {
        assert_eq!(
            convert("1000000000000000000000000000000", Unit::Raw, Unit::Mega).unwrap(),
            "1"
        );
        assert_eq!(
            convert("1", Unit::Mega, Unit::Raw).unwrap(),
            "1000000000000000000000000000000"
        );
        assert_eq!(
            convert("1000000000000000000000000000000000000", Unit::Raw, Unit::Tera).unwrap(),
            "1"
        );
        assert_eq!(
            convert("1", Unit::Tera, Unit::Raw).unwrap(),
            "1000000000000000000000000000000000000"
        );
    }

    #[test]
    fn convert_zero_is_zero_in_any_direction() {
        assert_eq!(convert("0", Unit::Raw, Unit::Tera).unwrap(), "0");
        assert_eq!(convert("0", Unit::Tera, Unit::Raw).unwrap(), "0");
    }

    #[test]
    fn xrb_is_an_alias_for_mega() {
        assert_eq!(Unit::Xrb.exponent(), Unit::Mega.exponent());
        assert_eq!(convert("9", Unit::Xrb, Unit::Mega).unwrap(), "9");
        assert_eq!(
            convert("9", Unit::Xrb, Unit::Raw).unwrap(),
            convert("9", Unit::Mega, Unit::Raw).unwrap()
        );
    }

    #[test]
    fn down_scaling_rounds_half_up() {
        // krai -> Mrai is a division by 10^3.
        assert_eq!(convert("1499", Unit::Kilo, Unit::Mega).unwrap(), "1");
        assert_eq!(convert("1500", Unit::Kilo, Unit::Mega).unwrap(), "2");
        assert_eq!(convert("2500", Unit::Kilo, Unit::Mega).unwrap(), "3");
        assert_eq!(convert("499", Unit::Kilo, Unit::Mega).unwrap(), "0");
    }

    #[test]
    fn unknown_unit_names_scale_as_raw() {
        assert_eq!(Unit::exponent_of("nonsense"), 0);
        assert_eq!(convert_by_name("123", "nonsense", "raw").unwrap(), "123");
        assert_eq!(
            convert_by_name("5", "Mrai", "nonsense").unwrap(),
            "5000000000000000000000000000000"
        );
    }

    #[test]
    fn unit_names_are_case_sensitive() {
        assert_eq!(Unit::from_name("Mrai"), Some(Unit::Mega));
        assert_eq!(Unit::from_name("mrai"), Some(Unit::Milli));
        assert_eq!(Unit::from_name("MRAI"), None);
        assert_eq!(Unit::from_name("xrb"), None);
    }

    #[test]
    fn convert_rejects_non_digit_strings() {
        for bad in ["", "12.5", "-1", "+1", "1e3", " 1", "1 "] {
            assert!(matches!(
                convert(bad, Unit::Raw, Unit::Raw),
                Err(AmountError::InvalidDigits(_))
            ));
        }
    }

    #[test]
    fn subtract_basic_and_insufficient() {
        assert_eq!(subtract("100", "40").unwrap(), "60");
        assert_eq!(subtract("100", "100").unwrap(), "0");
        assert!(matches!(
            subtract("40", "100"),
            Err(AmountError::Insufficient { .. })
        ));
    }

    #[test]
    fn subtract_beyond_native_width() {
        // 2^128 + 1 minus 1 is exactly 2^128.
        let base = "340282366920938463463374607431768211457";
        assert_eq!(
            subtract(base, "1").unwrap(),
            "340282366920938463463374607431768211456"
        );
    }

    #[test]
    fn add_is_the_inverse_of_subtract() {
        let diff = subtract("1000000000000000000000000000000", "1").unwrap();
        assert_eq!(add(&diff, "1").unwrap(), "1000000000000000000000000000000");
    }

    #[test]
    fn add_zero_to_zero() {
        assert_eq!(add("0", "0").unwrap(), "0");
    }

    #[test]
    fn to_hex_pads_to_32_uppercase_characters() {
        assert_eq!(to_hex("255").unwrap(), "000000000000000000000000000000FF");
        assert_eq!(to_hex("0").unwrap(), "00000000000000000000000000000000");

        let max_128 = "340282366920938463463374607431768211455";
        let encoded = to_hex(max_128).unwrap();
        assert_eq!(encoded, "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF");
        assert_eq!(encoded.len(), 32);
        assert!(encoded.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b)));
    }

    #[test]
    fn to_hex_rejects_values_past_128_bits() {
        let too_big = "340282366920938463463374607431768211456";
        assert!(matches!(to_hex(too_big), Err(AmountError::Overflow(_))));
    }

    #[test]
    fn leading_zeros_are_canonicalized_away() {
        assert_eq!(add("007", "003").unwrap(), "10");
        assert_eq!(convert("000", Unit::Raw, Unit::Raw).unwrap(), "0");
    }
}
