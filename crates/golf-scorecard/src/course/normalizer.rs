/// Strips a byte-order mark, zero-width spaces and surrounding whitespace from a
/// record tag or numeric field.
pub(crate) fn normalize_token(value: &str) -> &str {
    value.trim().trim_matches(['\u{feff}', '\u{200b}']).trim()
}
