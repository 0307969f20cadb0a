use thiserror::Error;

/// Money is represented as integer cents to avoid floating-point precision
/// issues. R$ 50,00 = 5000 cents.
pub type Cents = i64;

/// Format cents as a Brazilian-real display string.
/// Example: 5000 -> "R$ 50,00", 120000 -> "R$ 1.200,00", -5000 -> "-R$ 50,00"
pub fn format_reais(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.abs();
    let units = abs_cents / 100;
    let remainder = abs_cents % 100;
    format!("{}R$ {},{:02}", sign, group_thousands(units), remainder)
}

fn group_thousands(units: i64) -> String {
    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Parse a Brazilian-formatted money string into cents.
/// The comma is the decimal separator; dots are thousands separators and are
/// stripped. An optional "R$" prefix is accepted.
/// Example: "600" -> 60000, "600,5" -> 60050, "R$ 1.200,00" -> 120000
pub fn parse_reais(input: &str) -> Result<Cents, ParseMoneyError> {
    let input = input.trim().trim_start_matches("R$").trim();
    let negative = input.starts_with('-');
    let input = input.trim_start_matches('-');

    let parts: Vec<&str> = input.split(',').collect();
    match parts.len() {
        1 => {
            // No comma, treat as whole reais
            let units: i64 = strip_grouping(parts[0])
                .parse()
                .map_err(|_| ParseMoneyError::InvalidFormat)?;
            let cents = units * 100;
            Ok(if negative { -cents } else { cents })
        }
        2 => {
            let units_str = strip_grouping(parts[0]);
            let units: i64 = if units_str.is_empty() {
                0
            } else {
                units_str
                    .parse()
                    .map_err(|_| ParseMoneyError::InvalidFormat)?
            };

            // Decimal part - pad or truncate to 2 digits
            let decimal_str = parts[1];
            let decimal_cents: i64 = match decimal_str.len() {
                0 => 0,
                1 => {
                    // Single digit like "5" means 50 cents
                    decimal_str
                        .parse::<i64>()
                        .map_err(|_| ParseMoneyError::InvalidFormat)?
                        * 10
                }
                2 => decimal_str
                    .parse()
                    .map_err(|_| ParseMoneyError::InvalidFormat)?,
                _ => decimal_str[..2]
                    .parse()
                    .map_err(|_| ParseMoneyError::InvalidFormat)?,
            };

            let cents = units * 100 + decimal_cents;
            Ok(if negative { -cents } else { cents })
        }
        _ => Err(ParseMoneyError::InvalidFormat),
    }
}

fn strip_grouping(units: &str) -> String {
    units.chars().filter(|ch| *ch != '.').collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    #[error("invalid money format")]
    InvalidFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_reais() {
        assert_eq!(format_reais(5000), "R$ 50,00");
        assert_eq!(format_reais(1234), "R$ 12,34");
        assert_eq!(format_reais(120_000), "R$ 1.200,00");
        assert_eq!(format_reais(8_500_000), "R$ 85.000,00");
        assert_eq!(format_reais(100_000_000), "R$ 1.000.000,00");
        assert_eq!(format_reais(1), "R$ 0,01");
        assert_eq!(format_reais(0), "R$ 0,00");
        assert_eq!(format_reais(-5000), "-R$ 50,00");
    }

    #[test]
    fn test_parse_reais() {
        assert_eq!(parse_reais("600"), Ok(60000));
        assert_eq!(parse_reais("600,00"), Ok(60000));
        assert_eq!(parse_reais("600,5"), Ok(60050));
        assert_eq!(parse_reais("1.200,00"), Ok(120_000));
        assert_eq!(parse_reais("R$ 85.000,00"), Ok(8_500_000));
        assert_eq!(parse_reais(",50"), Ok(50));
        assert_eq!(parse_reais("-600"), Ok(-60000));
        assert_eq!(parse_reais("100,999"), Ok(10099)); // Truncates
    }

    #[test]
    fn test_parse_reais_invalid() {
        assert!(parse_reais("abc").is_err());
        assert!(parse_reais("1,2,3").is_err());
        assert!(parse_reais("R$").is_err());
    }
}
