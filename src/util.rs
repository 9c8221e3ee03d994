// Uppercases the first letter and leaves the rest untouched: "premium" ->
// "Premium". Title-casing a single leading character may produce more than
// one char (e.g. "ǳ" -> "ǲ" is fine, but "ß" -> "SS"), hence the collect.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

// Empty strings count as unset: the backend stores optional text columns as
// either NULL or "", and both should fall back the same way.
pub fn non_blank(s: Option<&str>) -> Option<&str> { s.filter(|s| !s.is_empty()) }
