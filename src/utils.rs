//! Route helpers.

/// Episode ids become route segments: lowercase ASCII words joined by single
/// hyphens.
pub fn slugify(id: &str) -> String {
    id.to_lowercase()
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn collapses_separators() {
        assert_eq!(slugify("  Como virar Tech Lead?  "), "como-virar-tech-lead");
        assert_eq!(slugify("a--b__c"), "a-b-c");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
    }
}
