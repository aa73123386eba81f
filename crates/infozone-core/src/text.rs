//! Tokenizing and lenient number conversion shared by the schema and row
//! parsers.
//!
//! Numeric conversion never fails: the longest numeric prefix of a token is
//! used and anything unparseable becomes zero.

/// Split a line on ASCII whitespace. A token starting with `"` extends to the
/// next `"` (or the end of the line) and is returned without its quotes.
pub fn split_line(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut rest = line;

    loop {
        rest = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
        if rest.is_empty() {
            break;
        }

        if let Some(quoted) = rest.strip_prefix('"') {
            match quoted.find('"') {
                Some(end) => {
                    tokens.push(&quoted[..end]);
                    rest = &quoted[end + 1..];
                }
                None => {
                    tokens.push(quoted);
                    rest = "";
                }
            }
        } else {
            let end = rest
                .find(|c: char| c.is_ascii_whitespace())
                .unwrap_or(rest.len());
            tokens.push(&rest[..end]);
            rest = &rest[end..];
        }
    }

    tokens
}

/// Split `s` on any of `delims`, skipping empty pieces. Quotes have no
/// special meaning here.
pub fn split_delimited<'a>(s: &'a str, delims: &'a [char]) -> impl Iterator<Item = &'a str> + 'a {
    s.split(move |c: char| delims.contains(&c))
        .filter(|piece| !piece.is_empty())
}

/// Remove a leading UTF-8 byte-order mark.
pub fn strip_bom(line: &str) -> &str {
    line.strip_prefix('\u{feff}').unwrap_or(line)
}

/// Cut `s` to at most `max_chars` characters.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Base-10 integer from the leading digits of `s`, saturating at the `i32`
/// bounds. Returns 0 when there are no leading digits.
pub fn parse_int_lenient(s: &str) -> i32 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    if negative {
        value = -value;
    }
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Decimal float from the longest numeric prefix of `s` (sign, digits,
/// fraction, exponent). Returns 0.0 when no digits lead the token.
pub fn parse_float_lenient(s: &str) -> f32 {
    let s = s.trim_start();
    let end = float_prefix_len(s.as_bytes());
    if end == 0 {
        return 0.0;
    }
    s[..end].parse::<f32>().unwrap_or(0.0)
}

fn float_prefix_len(bytes: &[u8]) -> usize {
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    end
}
