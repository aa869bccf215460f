// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Wiki page title for a user-typed name: whitespace runs become `_`.
/// `"Mr. Mime"` → `"Mr._Mime"`
pub fn page_title(name: &str) -> String {
    normalize_ws(name).replace(' ', "_")
}

/// Entity name from a page heading: everything before `suffix`, whitespace-normalized.
/// `"Pikachu (Pokémon)"` → `"Pikachu"`
pub fn display_name(heading: &str, suffix: &str) -> String {
    let head = heading.split(suffix).next().unwrap_or(heading);
    normalize_ws(head)
}

/// Character count, which is what an underline has to match (not byte length).
pub fn display_width(s: &str) -> usize {
    s.chars().count()
}
