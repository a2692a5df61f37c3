use super::trim;

/// Splits a comma-separated value into its elements.
///
/// With `trim_values` set, the whole string and then every element are
/// trimmed. One pair of enclosing brackets is stripped before splitting. An
/// empty string yields a single empty element.
pub fn split_array(raw: &str, trim_values: bool) -> Vec<String> {
    let mut s = if trim_values { trim(raw) } else { raw };

    if s.len() >= 2 && s.starts_with('[') && s.ends_with(']') {
        s = &s[1..s.len() - 1];
    }

    s.split(',')
        .map(|item| if trim_values { trim(item) } else { item })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_list() {
        assert_eq!(split_array("foo,bar,baz", true), ["foo", "bar", "baz"]);
    }

    #[test]
    fn test_brackets_are_stripped_once() {
        assert_eq!(split_array("[foo,bar,baz]", true), ["foo", "bar", "baz"]);
        assert_eq!(split_array("[[a],[b]]", true), ["[a]", "[b]"]);
        assert_eq!(split_array("[]", true), [""]);
    }

    #[test]
    fn test_lone_bracket_is_kept() {
        assert_eq!(split_array("[", true), ["["]);
        assert_eq!(split_array("]", true), ["]"]);
        assert_eq!(split_array("[a", true), ["[a"]);
    }

    #[test]
    fn test_trim() {
        assert_eq!(split_array(" foo , bar , baz ", true), ["foo", "bar", "baz"]);
        assert_eq!(split_array(" [ a , b ] ", true), ["a", "b"]);
    }

    #[test]
    fn test_no_trim_is_verbatim() {
        assert_eq!(
            split_array(" foo , bar , baz ", false),
            [" foo ", " bar ", " baz "]
        );
        // Untrimmed brackets are not at the boundary, so they stay.
        assert_eq!(split_array(" [a,b] ", false), [" [a", "b] "]);
    }

    #[test]
    fn test_empty_segments() {
        assert_eq!(split_array("", true), [""]);
        assert_eq!(split_array("a,,b", true), ["a", "", "b"]);
        assert_eq!(split_array(",", false), ["", ""]);
    }

    #[test]
    fn test_join_then_split_reproduces_input() {
        let items = vec!["alpha", " beta", "", "gamma delta ", "x"];
        let joined = items.join(",");
        assert_eq!(split_array(&joined, false), items);
    }
}
