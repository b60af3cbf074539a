//! Display formatting shared across the dashboard widgets.

/// Thousands-separated integer, e.g. `1234567` renders as `"1,234,567"`.
#[must_use]
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Peso amount, two decimals: `"$812.75 MXN"`.
#[must_use]
pub fn money(value: f64) -> String {
    format!("${value:.2} MXN")
}

/// Peso amount rounded to whole units: `"$8500 MXN"`.
#[must_use]
pub fn money_whole(value: f64) -> String {
    format!("${value:.0} MXN")
}

/// p-value with the conventional `<0.001` floor, otherwise four decimals.
#[must_use]
pub fn p_value(value: f64) -> String {
    if value < 0.001 {
        "<0.001".to_owned()
    } else {
        format!("{value:.4}")
    }
}

/// Optional F statistic; absent rows render a dash.
#[must_use]
pub fn opt_f_value(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{v:.3}"))
}

/// Optional p-value; absent rows render a dash.
#[must_use]
pub fn opt_p_value(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), p_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn money_formats_pesos() {
        assert_eq!(money(812.754), "$812.75 MXN");
        assert_eq!(money_whole(8499.6), "$8500 MXN");
    }

    #[test]
    fn tiny_p_values_render_floor() {
        assert_eq!(p_value(0.0004), "<0.001");
        assert_eq!(p_value(0.0234), "0.0234");
    }

    #[test]
    fn absent_statistics_render_dash() {
        assert_eq!(opt_f_value(None), "-");
        assert_eq!(opt_p_value(None), "-");
        assert_eq!(opt_f_value(Some(5.678)), "5.678");
        assert_eq!(opt_p_value(Some(0.0001)), "<0.001");
    }
}
