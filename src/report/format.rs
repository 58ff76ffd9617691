//! Number formatting shared by the exporters

/// Format with a fixed number of decimals and comma thousands separators
pub fn grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut out = String::with_capacity(formatted.len() + int_part.len() / 3 + 1);
    // "-0.00" reads as noise; only sign values that survive rounding
    if value < 0.0 && formatted.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `$1,234.56`, with the sign ahead of the symbol
pub fn currency(value: f64) -> String {
    let body = grouped(value, 2);
    match body.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None => format!("${body}"),
    }
}

/// Whole hours with separators, e.g. `21,600 hours`
pub fn whole_hours(value: f64) -> String {
    format!("{} hours", grouped(value, 0))
}
