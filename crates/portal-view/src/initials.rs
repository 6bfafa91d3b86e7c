//! Initials shown in avatar slots when no profile picture is set.

const PLACEHOLDER: &str = "U";

/// Compute avatar initials.
///
/// First letters of first+last name when both are present; otherwise the
/// first letters of up to two whitespace tokens of the display name;
/// otherwise a fixed placeholder. Always uppercased.
pub fn initials(first_name: &str, last_name: &str, display_name: &str) -> String {
    let first_name = first_name.trim();
    let last_name = last_name.trim();

    if !first_name.is_empty() && !last_name.is_empty() {
        return join_initials(&[first_name, last_name]);
    }

    let tokens: Vec<&str> = display_name.split_whitespace().take(2).collect();
    if tokens.is_empty() {
        return PLACEHOLDER.to_string();
    }

    join_initials(&tokens)
}

fn join_initials(tokens: &[&str]) -> String {
    tokens
        .iter()
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
