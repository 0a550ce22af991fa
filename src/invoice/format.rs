//! Number and currency formatting for resolved values.

use serde::{Deserialize, Serialize};

/// Currency display settings. Defaults reproduce French euro formatting,
/// e.g. `1 200,00 €` with a narrow no-break space as group separator and a
/// no-break space before the symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_separator: String,
    pub group_separator: String,
    /// Place the symbol after the amount (`12,00 €`) rather than before (`€12.00`).
    pub symbol_after: bool,
    pub decimals: u8,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "€".to_string(),
            decimal_separator: ",".to_string(),
            group_separator: "\u{202f}".to_string(),
            symbol_after: true,
            decimals: 2,
        }
    }
}

impl CurrencyFormat {
    pub fn format(&self, amount: f64) -> String {
        if !amount.is_finite() {
            return self.attach_symbol(&amount.to_string());
        }

        let decimals = usize::from(self.decimals.min(6));
        let (int_part, frac_part) = round_half_away(amount.abs(), decimals);

        let is_zero = int_part.bytes().chain(frac_part.bytes()).all(|b| b == b'0');
        let mut number = String::new();
        if amount < 0.0 && !is_zero {
            number.push('-');
        }
        number.push_str(&group_digits(&int_part, &self.group_separator));
        if !frac_part.is_empty() {
            number.push_str(&self.decimal_separator);
            number.push_str(&frac_part);
        }

        self.attach_symbol(&number)
    }

    fn attach_symbol(&self, number: &str) -> String {
        if self.symbol.is_empty() {
            number.to_string()
        } else if self.symbol_after {
            format!("{number}\u{a0}{}", self.symbol)
        } else {
            format!("{}{number}", self.symbol)
        }
    }
}

/// Round a non-negative amount to `decimals` places, ties away from zero.
///
/// Works on the shortest decimal text of the value, so `1.005` rounds to
/// `1.01` even though its binary value sits slightly below the tie.
fn round_half_away(value: f64, decimals: usize) -> (String, String) {
    // `Display` for f64 never uses exponent notation.
    let text = value.to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    if frac_part.len() <= decimals {
        return (int_part.to_string(), format!("{frac_part:0<decimals$}"));
    }

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .collect();
    let round_up = frac_part.as_bytes()[decimals] >= b'5';
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - decimals;
    let int_digits = String::from_utf8_lossy(&digits[..split]).into_owned();
    let frac_digits = String::from_utf8_lossy(&digits[split..]).into_owned();
    (int_digits, frac_digits)
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Plain numeric rendering without trailing zeros (`1`, `2.5`).
pub fn format_number(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn french_euro_default() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(1200.0), "1\u{202f}200,00\u{a0}€");
        assert_eq!(fmt.format(6852.5), "6\u{202f}852,50\u{a0}€");
        assert_eq!(fmt.format(120.0), "120,00\u{a0}€");
        assert_eq!(fmt.format(0.0), "0,00\u{a0}€");
    }

    #[test]
    fn half_cents_round_away_from_zero() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(0.125), "0,13\u{a0}€");
        assert_eq!(fmt.format(1.125), "1,13\u{a0}€");
        assert_eq!(fmt.format(-1.125), "-1,13\u{a0}€");
        assert_eq!(fmt.format(1.005), "1,01\u{a0}€");
        assert_eq!(fmt.format(999.995), "1\u{202f}000,00\u{a0}€");
        assert_eq!(fmt.format(0.124), "0,12\u{a0}€");
    }

    #[test]
    fn large_amounts_group_every_three_digits() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(1234567.891), "1\u{202f}234\u{202f}567,89\u{a0}€");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(-42.0), "-42,00\u{a0}€");
        assert_eq!(fmt.format(-0.001), "0,00\u{a0}€");
    }

    #[test]
    fn prefix_symbol_style() {
        let fmt = CurrencyFormat {
            symbol: "$".into(),
            decimal_separator: ".".into(),
            group_separator: ",".into(),
            symbol_after: false,
            decimals: 2,
        };
        assert_eq!(fmt.format(1200.0), "$1,200.00");
    }

    #[test]
    fn zero_decimals_drops_separator() {
        let fmt = CurrencyFormat {
            decimals: 0,
            ..CurrencyFormat::default()
        };
        assert_eq!(fmt.format(1999.6), "2\u{202f}000\u{a0}€");
    }

    #[test]
    fn plain_numbers_have_no_trailing_zeros() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(8.0), "8");
    }
}
