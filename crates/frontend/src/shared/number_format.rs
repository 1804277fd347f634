//! Number formatting for KPI cards and tables (pt-BR conventions)

/// Groups the integer part with '.' and uses ',' as decimal separator
///
/// ```ignore
/// assert_eq!(format_decimal(1234567.891, 2), "1.234.567,89");
/// ```
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, fraction_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let len = integer_part.len();
    let mut result = String::with_capacity(len + len / 3 + decimals + 2);
    if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        result.push('-');
    }
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }

    if let Some(fraction) = fraction_part {
        result.push(',');
        result.push_str(fraction);
    }
    result
}

/// Integer with thousands separator
pub fn format_integer(value: f64) -> String {
    format_decimal(value.round(), 0)
}

/// Money value: "R$ 1.234,56"
pub fn format_money(value: f64, currency: &str) -> String {
    format!("{} {}", currency, format_decimal(value, 2))
}

pub fn format_brl(value: f64) -> String {
    format_money(value, "R$")
}

/// Compact label for chart axes: 950, 12,5 mil, 1,2 mi
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{} mi", format_decimal(value / 1_000_000.0, 1))
    } else if abs >= 1_000.0 {
        format!("{} mil", format_decimal(value / 1_000.0, 1))
    } else {
        format_decimal(value, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(0.0, 2), "0,00");
        assert_eq!(format_decimal(42.5, 2), "42,50");
        assert_eq!(format_decimal(1234.567, 2), "1.234,57");
        assert_eq!(format_decimal(1234567.0, 0), "1.234.567");
        assert_eq!(format_decimal(-1500.0, 1), "-1.500,0");
        assert_eq!(format_decimal(-0.001, 2), "0,00");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_brl(9876543.21), "R$ 9.876.543,21");
        assert_eq!(format_money(25.0, "US$"), "US$ 25,00");
    }

    #[test]
    fn test_format_integer_and_compact() {
        assert_eq!(format_integer(18_432.0), "18.432");
        assert_eq!(format_compact(950.0), "950");
        assert_eq!(format_compact(12_500.0), "12,5 mil");
        assert_eq!(format_compact(1_230_000.0), "1,2 mi");
    }
}
