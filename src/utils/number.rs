/// Read an integer the way C `atoi` does.
///
/// Leading whitespace and one optional sign are skipped, then digits are read
/// until the first non-digit. No digits at all yields 0. Values beyond `i64`
/// saturate.
pub fn parse_leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }

    if negative { -value } else { value }
}
