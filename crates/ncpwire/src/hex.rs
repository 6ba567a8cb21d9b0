use crate::exit::{CliError, CliResult, USAGE};

/// Decode hex text into bytes. Accepts an optional `0x` prefix and ignores
/// whitespace, `:` and `-` separators.
pub fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = body
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':' && *c != '-')
        .collect();

    if digits.len() % 2 != 0 {
        return Err(CliError::new(
            USAGE,
            format!("odd number of hex digits in {input:?}"),
        ));
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| {
            digits
                .get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| CliError::new(USAGE, format!("invalid hex in {input:?}")))
        })
        .collect()
}

pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_separators() {
        assert_eq!(parse_hex("00 00 01 1b").unwrap(), vec![0, 0, 1, 0x1b]);
        assert_eq!(parse_hex("0x0102").unwrap(), vec![1, 2]);
        assert_eq!(parse_hex("aa:BB-cc").unwrap(), vec![0xaa, 0xbb, 0xcc]);
        assert!(parse_hex("").unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_hex() {
        assert!(parse_hex("abc").is_err());
        assert!(parse_hex("zz").is_err());
        // Two bytes of UTF-8, not two hex digits.
        assert!(parse_hex("é").is_err());
    }

    #[test]
    fn formats_lowercase() {
        assert_eq!(to_hex(&[0x00, 0xab, 0x10]), "00ab10");
    }
}
