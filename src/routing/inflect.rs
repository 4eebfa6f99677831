//! Name conversions from route parameters to controller/action names

/// Hyphenated words to StudlyCaps, e.g. `post-authors` => `PostAuthors`
///
/// Words are split on spaces and hyphens; only the first letter of each word
/// changes case.
pub fn to_studly_caps(value: &str) -> String {
    value
        .split([' ', '-'])
        .map(upper_first)
        .collect()
}

/// Hyphenated words to camelCase, e.g. `add-new` => `addNew`
pub fn to_camel_case(value: &str) -> String {
    lower_first(&to_studly_caps(value))
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_ascii_uppercase().to_string() + chars.as_str()
    })
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_ascii_lowercase().to_string() + chars.as_str()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_studly_caps() {
        assert_eq!(to_studly_caps("post-authors"), "PostAuthors");
        assert_eq!(to_studly_caps("home"), "Home");
        assert_eq!(to_studly_caps("Home"), "Home");
        assert_eq!(to_studly_caps("post authors"), "PostAuthors");
        assert_eq!(to_studly_caps(""), "");
    }

    #[test]
    fn test_studly_caps_keeps_inner_case() {
        assert_eq!(to_studly_caps("xML-feed"), "XMLFeed");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(to_camel_case("add-new"), "addNew");
        assert_eq!(to_camel_case("index"), "index");
        assert_eq!(to_camel_case("Index"), "index");
        assert_eq!(to_camel_case("index-action"), "indexAction");
    }
}
