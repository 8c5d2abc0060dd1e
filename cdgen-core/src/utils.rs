//! Shared string utilities for code generation.

/// Convert a string to PascalCase (e.g., "user_profile" -> "UserProfile")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "user_id" -> "userId")
///
/// A string without separators keeps everything past its first character
/// unchanged, so an already-camelized name passes through as-is.
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    for (i, part) in s.split(['_', '-']).filter(|p| !p.is_empty()).enumerate() {
        let mut chars = part.chars();
        match chars.next() {
            None => {}
            Some(c) if i == 0 => {
                result.extend(c.to_lowercase());
                result.extend(chars);
            }
            Some(c) => {
                result.extend(c.to_uppercase());
                result.extend(chars);
            }
        }
    }
    result
}

/// Upper-case only the first character, leaving the rest unchanged.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lenient boolean parse: `"true"` in any case is true, anything else is
/// false.
pub fn parse_lenient_bool(s: &str) -> bool {
    s.trim().eq_ignore_ascii_case("true")
}

/// Extract `{name}` placeholder identifiers from a path template, in order.
///
/// A placeholder is one or more letters or underscores between braces;
/// anything else is literal text.
pub fn path_placeholders(path: &str) -> Vec<String> {
    let bytes = path.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'{' {
            let start = i + 1;
            let mut end = start;
            while end < bytes.len() && (bytes[end].is_ascii_alphabetic() || bytes[end] == b'_') {
                end += 1;
            }
            if end > start && end < bytes.len() && bytes[end] == b'}' {
                found.push(path[start..end].to_string());
                i = end + 1;
                continue;
            }
        }
        i += 1;
    }
    found
}
