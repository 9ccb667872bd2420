//! Fused-name synthesis
//!
//! Each source name is split at `floor(len / 2)` characters. The fused name
//! takes the head of name 1, the tail of name 2 and the head of name 3.
//! An empty piece is replaced by a fixed-size slice of the whole name
//! (first 3, last 3, first 2 characters), clamped to the name length.

/// Split a name into `(head, tail)` at `floor(char_count / 2)`.
#[must_use]
pub fn split_name(name: &str) -> (&str, &str) {
    let mid = name.chars().count() / 2;
    name.split_at(byte_offset(name, mid))
}

/// Build the fused name from three source names.
///
/// ```rust
/// use fusedex::engine::generate_fused_name;
///
/// assert_eq!(
///     generate_fused_name("bulbasaur", "charmander", "squirtle"),
///     "Bulbandersqui"
/// );
/// ```
#[must_use]
pub fn generate_fused_name(first: &str, second: &str, third: &str) -> String {
    let (head1, _) = split_name(first);
    let (_, tail2) = split_name(second);
    let (head3, _) = split_name(third);

    let mut combined = String::with_capacity(first.len() + second.len() + third.len());
    combined.push_str(non_empty_or(head1, || first_chars(first, 3)));
    combined.push_str(non_empty_or(tail2, || last_chars(second, 3)));
    combined.push_str(non_empty_or(head3, || first_chars(third, 2)));

    capitalize(&combined)
}

fn non_empty_or<'a>(piece: &'a str, fallback: impl FnOnce() -> &'a str) -> &'a str {
    if piece.is_empty() {
        fallback()
    } else {
        piece
    }
}

/// Byte offset of the `n`th character, clamped to the string end.
fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

fn first_chars(s: &str, n: usize) -> &str {
    &s[..byte_offset(s, n)]
}

fn last_chars(s: &str, n: usize) -> &str {
    let skip = s.chars().count().saturating_sub(n);
    &s[byte_offset(s, skip)..]
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
