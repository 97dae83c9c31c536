use regview_core::view_models::SortIcon;

pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

pub fn sort_glyph(icon: SortIcon) -> &'static str {
    match icon {
        SortIcon::SortAlphaDown => "A→Z",
        SortIcon::SortAlphaDownAlt => "Z→A",
    }
}

/// `#pii #kafka`
pub fn badge_line(badges: &[String]) -> String {
    badges
        .iter()
        .map(|badge| format!("#{}", badge))
        .collect::<Vec<_>>()
        .join(" ")
}
