//! Conversion between a layer's `position` text and the editor's X/Y offset
//! sliders. Offsets are relative to the center (`0` means `50%`).

/// Splits `"X% Y%"` into offsets from 50.
///
/// Each part is read up to its first non-digit, so `"70%"` reads as 70.
/// Keywords (`"center"`, `"top left"`) and missing parts read as no offset.
pub fn parse_position(position: &str) -> (i32, i32) {
    if position.is_empty() || position == "center" {
        return (0, 0);
    }
    let mut parts = position.split(' ');
    let mut offset = || parts.next().and_then(leading_int).map_or(0, |v| v.saturating_sub(50));
    let x = offset();
    let y = offset();
    (x, y)
}

/// Inverse of [`parse_position`]: `"{50 + x}% {50 + y}%"`.
pub fn format_position(x: i32, y: i32) -> String {
    format!("{}% {}%", 50i32.saturating_add(x), 50i32.saturating_add(y))
}

/// Optional sign followed by at least one digit, ignoring anything after.
fn leading_int(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let unsigned = s.strip_prefix(['-', '+']).unwrap_or(s);
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let end = s.len() - unsigned.len() + digits;
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_and_empty_are_origin() {
        assert_eq!(parse_position("center"), (0, 0));
        assert_eq!(parse_position(""), (0, 0));
    }

    #[test]
    fn percentages_become_offsets() {
        assert_eq!(parse_position("70% 80%"), (20, 30));
        assert_eq!(parse_position("30% 20%"), (-20, -30));
        assert_eq!(parse_position("50% 50%"), (0, 0));
    }

    #[test]
    fn keywords_read_as_no_offset() {
        assert_eq!(parse_position("top left"), (0, 0));
        assert_eq!(parse_position("10% top"), (-40, 0));
    }

    #[test]
    fn single_part_leaves_y_centered() {
        assert_eq!(parse_position("80%"), (30, 0));
    }

    #[test]
    fn signed_and_unitless_parts() {
        assert_eq!(parse_position("-10% +60"), (-60, 10));
    }

    #[test]
    fn format_round_trips() {
        assert_eq!(format_position(20, -30), "70% 20%");
        assert_eq!(parse_position(&format_position(-15, 45)), (-15, 45));
    }

    #[test]
    fn leading_int_edge_cases() {
        assert_eq!(leading_int("12px"), Some(12));
        assert_eq!(leading_int("-"), None);
        assert_eq!(leading_int("abc"), None);
        assert_eq!(leading_int("99999999999"), None);
    }
}
