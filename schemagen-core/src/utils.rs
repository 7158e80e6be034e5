//! Shared string casing primitives for identifier generation.

/// Convert a string to UpperCamelCase.
///
/// Uppercases the first character, turns spaces and `/` into `_`, drops
/// every `-` while uppercasing the character that follows it, and prefixes
/// a leading numeric character with `_`
/// (e.g., "hello-world" -> "HelloWorld", "1st" -> "_1st").
pub fn to_upper_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut result = String::with_capacity(s.len());
    let mut upper_next = false;
    for c in first.to_uppercase().chain(chars) {
        let c = match c {
            ' ' | '/' => '_',
            other => other,
        };
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }

    if result.chars().next().is_some_and(char::is_numeric) {
        result.insert(0, '_');
    }
    result
}

/// Collapse underscore-separated segments into CamelCase
/// (e.g., "hello_world" -> "HelloWorld", "__a__b" -> "AB").
///
/// Empty segments are dropped, so the result never contains `_`.
pub fn snake_to_camel(s: &str) -> String {
    s.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_upper_camel_case() {
        assert_eq!(to_upper_camel_case("hello"), "Hello");
        assert_eq!(to_upper_camel_case("hello-world"), "HelloWorld");
        assert_eq!(to_upper_camel_case("hello world"), "Hello_world");
        assert_eq!(to_upper_camel_case("a/b"), "A_b");
        assert_eq!(to_upper_camel_case("-foo"), "Foo");
        assert_eq!(to_upper_camel_case("foo-"), "Foo");
        assert_eq!(to_upper_camel_case("hElLo"), "HElLo");
        assert_eq!(to_upper_camel_case(""), "");
    }

    #[test]
    fn test_to_upper_camel_case_leading_digit() {
        assert_eq!(to_upper_camel_case("1st"), "_1st");
        assert_eq!(to_upper_camel_case("42"), "_42");
    }

    #[test]
    fn test_to_upper_camel_case_unicode() {
        assert_eq!(to_upper_camel_case("élan-vital"), "ÉlanVital");
        assert_eq!(to_upper_camel_case("日本"), "日本");
    }

    #[test]
    fn test_snake_to_camel() {
        assert_eq!(snake_to_camel("hello"), "Hello");
        assert_eq!(snake_to_camel("hello_world"), "HelloWorld");
        assert_eq!(snake_to_camel("__a__b_"), "AB");
        assert_eq!(snake_to_camel("Already"), "Already");
        assert_eq!(snake_to_camel("___"), "");
        assert_eq!(snake_to_camel(""), "");
    }
}
