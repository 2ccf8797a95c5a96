//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Round to one decimal place, as shown in list entries.
pub fn one_decimal(v: f64) -> String {
    format!("{:.1}", v)
}

/// Print a raw input number the way it was typed: no trailing `.0`.
pub fn plain_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// Pad to a display width (emoji and wide glyphs count as two columns).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_decimal_rounds() {
        assert_eq!(one_decimal(5.0), "5.0");
        assert_eq!(one_decimal(17.052), "17.1");
    }

    #[test]
    fn plain_number_drops_zero_fraction() {
        assert_eq!(plain_number(178.0), "178");
        assert_eq!(plain_number(-12.5), "-12.5");
    }

    #[test]
    fn padding_uses_display_width() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_left("7", 3), "  7");
        assert_eq!(pad_right("🚴", 3), "🚴 ");
    }
}
