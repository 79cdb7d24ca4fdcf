//! Name derivation for collision resolution.

/// Increment the trailing numeric suffix of `name`, appending `"1"` if there
/// is none: `"A"` → `"A1"`, `"A1"` → `"A2"`, `"IO9"` → `"IO10"`.
///
/// A suffix too large for `u64` is treated like no suffix at all.
pub fn increment_numeric_suffix(name: &str) -> String {
    let digits_start = name
        .rfind(|c: char| !c.is_ascii_digit())
        .map(|i| i + name[i..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(0);
    let (stem, suffix) = name.split_at(digits_start);

    if suffix.is_empty() {
        return format!("{name}1");
    }
    match suffix.parse::<u64>() {
        Ok(n) => format!("{stem}{}", n + 1),
        Err(_) => format!("{name}1"),
    }
}
