//! Identifier conversion between schema type names, file slugs and code identifiers

/// Convert a schema type name to its file-safe slug.
///
/// A hyphen is inserted at every lowercase-or-digit to uppercase boundary, runs of
/// whitespace or underscores collapse to a single hyphen, the result is lowercased
/// and trailing hyphens are stripped. `to_slug(Some("UserProfile"))` is `"user-profile"`.
pub fn to_slug(name: Option<&str>) -> String {
    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => return String::new(),
    };

    let mut hyphenated = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            hyphenated.push('-');
        }
        hyphenated.push(c);
        prev = Some(c);
    }

    let mut collapsed = String::with_capacity(hyphenated.len());
    let mut in_separator_run = false;
    for c in hyphenated.chars() {
        if c.is_whitespace() || c == '_' {
            if !in_separator_run {
                collapsed.push('-');
            }
            in_separator_run = true;
        } else {
            collapsed.push(c);
            in_separator_run = false;
        }
    }

    collapsed.to_lowercase().trim_end_matches('-').to_string()
}

/// Convert a schema type name (or a rendered type expression) to a code identifier.
///
/// Each underscore followed by a word character is dropped and that character
/// upper-cased; any underscore left over is removed. Angle brackets and other
/// punctuation pass through, so `Array<Foo_Bar>` becomes `Array<FooBar>`.
pub fn to_identifier(name: Option<&str>) -> String {
    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => return String::new(),
    };

    let mut camel = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' {
            if let Some(&next) = chars.peek() {
                if is_word_char(next) {
                    chars.next();
                    camel.push(next.to_ascii_uppercase());
                    continue;
                }
            }
        }
        camel.push(c);
    }

    camel.replace('_', "")
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Whether `name` can be used unquoted as a TypeScript property name
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("UserProfile", "user-profile")]
    #[case("HTTPServer2Client", "httpserver2-client")]
    #[case("orderItem", "order-item")]
    #[case("Order_Item", "order-item")]
    #[case("order__item", "order-item")]
    #[case("Order Item", "order-item")]
    #[case("Page«Order»", "page«order»")]
    #[case("Result_", "result")]
    #[case("v2Response", "v2-response")]
    fn test_to_slug(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_slug(Some(input)), expected);
    }

    #[test]
    fn test_to_slug_empty() {
        assert_eq!(to_slug(Some("")), "");
        assert_eq!(to_slug(None), "");
        assert_eq!(to_slug(Some("_")), "");
    }

    #[test]
    fn test_to_slug_idempotent() {
        let names = [
            "UserProfile",
            "HTTPServer2Client",
            "already-slugged",
            "Mixed_Case Name",
            "ResponseEntity«List«Order»»",
            "a1B2C3",
        ];

        for name in names {
            let once = to_slug(Some(name));
            assert_eq!(to_slug(Some(&once)), once, "slug of {name} is not stable");
        }
    }

    #[rstest]
    #[case("user_name", "userName")]
    #[case("UserProfile", "UserProfile")]
    #[case("page_info_dto", "pageInfoDto")]
    #[case("trailing_", "trailing")]
    #[case("a__b", "ab")]
    #[case("Array<Foo_Bar>", "Array<FooBar>")]
    #[case("Array<number>", "Array<number>")]
    fn test_to_identifier(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_identifier(Some(input)), expected);
    }

    #[test]
    fn test_to_identifier_empty() {
        assert_eq!(to_identifier(Some("")), "");
        assert_eq!(to_identifier(None), "");
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier("id"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("$ref"));
        assert!(!is_valid_identifier("content-type"));
        assert!(!is_valid_identifier("1st"));
        assert!(!is_valid_identifier(""));
    }
}
