//! Prefix number readers with C `atoi`/`atof` semantics.
//!
//! Leading whitespace and an optional sign are skipped, then the longest
//! numeric prefix is read and anything after it is ignored. `None` means no
//! digits were found, which callers usually map to zero.

fn skip_whitespace(text: &str) -> &str {
    text.trim_start_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'))
}

fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    }
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Integer prefix of `text`; saturates instead of overflowing.
pub(crate) fn leading_int(text: &str) -> Option<i64> {
    let (negative, body) = split_sign(skip_whitespace(text));
    let digits = &body.as_bytes()[..digit_run(body.as_bytes())];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.iter().fold(0i64, |acc, &d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Floating-point prefix of `text`: digits, an optional fraction and an
/// optional `e`/`E` exponent.
pub(crate) fn leading_float(text: &str) -> Option<f64> {
    let (negative, body) = split_sign(skip_whitespace(text));
    let bytes = body.as_bytes();

    let int_digits = digit_run(bytes);
    let mut end = int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digit_run(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    let magnitude: f64 = body[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
