/// Parse a decimal literal, skipping digit separators. Returns `None` if the
/// value does not fit in an `i64`.
pub fn parse_dec(text: &str) -> Option<i64> {
    let mut res: i64 = 0;

    for c in text.chars() {
        let digit = match c {
            '0'..='9' => i64::from(c as u8 - b'0'),
            '_' => continue,
            _ => return None,
        };

        res = res.checked_mul(10)?.checked_add(digit)?;
    }

    Some(res)
}

pub fn parse_float(text: &str) -> Option<f64> {
    let text: String = text.chars().filter(|c| *c != '_').collect();
    text.parse().ok().filter(|v: &f64| v.is_finite())
}

/// Process the escapes in the body of a string literal (without its quotes).
/// On failure, returns the character following the offending backslash.
pub fn unescape(body: &str) -> Result<String, char> {
    let mut res = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            res.push(c);
            continue;
        }

        let escaped = match chars.next() {
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('0') => '\0',
            Some('\\') => '\\',
            Some('"') => '"',
            Some(other) => return Err(other),
            None => return Err('\\'),
        };

        res.push(escaped);
    }

    Ok(res)
}
