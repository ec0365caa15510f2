#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormat {
    pub symbol: String,
    pub decimals: usize,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            decimals: 2,
        }
    }
}

impl PriceFormat {
    /// Formats an amount with the currency symbol and grouped thousands,
    /// e.g. `$1,234.50`.
    pub fn format(&self, amount: f64) -> String {
        let amount = if amount.is_finite() { amount } else { 0.0 };
        let fixed = format!("{:.*}", self.decimals, amount.abs());

        // Amounts that round to zero carry no sign.
        let rounds_to_zero = fixed.chars().all(|c| c == '0' || c == '.');
        let sign = if amount < 0.0 && !rounds_to_zero { "-" } else { "" };
        let (whole, fraction) = match fixed.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        match fraction {
            Some(fraction) => format!("{sign}{}{grouped}.{fraction}", self.symbol),
            None => format!("{sign}{}{grouped}", self.symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_grouping() {
        let fmt = PriceFormat::default();
        assert_eq!(fmt.format(0.0), "$0.00");
        assert_eq!(fmt.format(12.5), "$12.50");
        assert_eq!(fmt.format(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn negative_amounts_keep_sign_before_symbol() {
        assert_eq!(PriceFormat::default().format(-3.2), "-$3.20");
    }

    #[test]
    fn negative_amounts_rounding_to_zero_drop_the_sign() {
        let fmt = PriceFormat::default();
        assert_eq!(fmt.format(-0.001), "$0.00");
        assert_eq!(fmt.format(-0.0), "$0.00");
        assert_eq!(fmt.format(-0.006), "-$0.01");

        let whole = PriceFormat {
            symbol: "$".into(),
            decimals: 0,
        };
        assert_eq!(whole.format(-0.4), "$0");
    }

    #[test]
    fn zero_decimals_omit_fraction() {
        let fmt = PriceFormat {
            symbol: "Rp ".into(),
            decimals: 0,
        };
        assert_eq!(fmt.format(45000.0), "Rp 45,000");
    }

    #[test]
    fn non_finite_amounts_render_as_zero() {
        assert_eq!(PriceFormat::default().format(f64::NAN), "$0.00");
    }
}
