use heapless::String as HeaplessString;
use std::str::FromStr;

/// Worst-case UTF-8 width of one character.
///
/// Text columns are `VARCHAR(n)`, which counts characters, so their models
/// hold `HeaplessString<{n * UTF8_MAX_BYTES}>`: any value the column accepts
/// fits, whoever wrote it.
pub const UTF8_MAX_BYTES: usize = 4;

/// Copies `value` into a fixed-capacity string sized for its column.
///
/// `N` is the byte capacity; the column limit enforced here is
/// `N / UTF8_MAX_BYTES` characters, the same count `VARCHAR` applies.
pub fn bounded<const N: usize>(value: &str, field: &str) -> Result<HeaplessString<N>, String> {
    let max_chars = N / UTF8_MAX_BYTES;
    if value.chars().count() > max_chars {
        return Err(format!(
            "Value for '{field}' is too long (max {max_chars} characters)"
        ));
    }
    HeaplessString::from_str(value)
        .map_err(|_| format!("Value for '{field}' is too long (max {max_chars} characters)"))
}

/// Optional variant of [`bounded`].
pub fn bounded_opt<const N: usize>(
    value: Option<&str>,
    field: &str,
) -> Result<Option<HeaplessString<N>>, String> {
    value.map(|v| bounded::<N>(v, field)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_counts_characters() {
        assert!(bounded::<20>("abcde", "nom").is_ok());
        assert!(bounded::<20>("abcdef", "nom").is_err());
        // five two-byte characters still fit a five-character column
        assert!(bounded::<20>("ééééé", "nom").is_ok());
        assert!(bounded::<20>("éééééé", "nom").is_err());
    }

    #[test]
    fn test_bounded_accepts_full_column_of_wide_characters() {
        let name = "😀".repeat(100);
        let value = bounded::<400>(&name, "nom").unwrap();
        assert_eq!(value.chars().count(), 100);
        assert!(bounded::<400>(&format!("{name}a"), "nom").is_err());
    }

    #[test]
    fn test_bounded_opt_passes_none_through() {
        assert_eq!(bounded_opt::<20>(None, "email"), Ok(None));
        let value = bounded_opt::<20>(Some("ab"), "email").unwrap().unwrap();
        assert_eq!(value.as_str(), "ab");
    }
}
