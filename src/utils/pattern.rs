use regex::{Captures, Regex, RegexBuilder};

use crate::error::ConfigError;

/// Compile the `-r` pattern. An empty pattern disables extraction.
///
/// Matching is line oriented: `^` and `$` match at line breaks and `.` never
/// matches a newline.
///
/// This is `regex` syntax, not POSIX ERE. Alternation takes the leftmost-first
/// branch rather than the longest one (`a|ab` on `ab` matches `a`), and negated
/// classes such as `[^x]` still match `\n`. Sources are read line by line, so
/// only the first difference shows up in practice.
pub fn compile_pattern(pattern: &str) -> Result<Option<Regex>, ConfigError> {
    if pattern.is_empty() {
        return Ok(None);
    }

    RegexBuilder::new(pattern)
        .multi_line(true)
        .build()
        .map(Some)
        .map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Pulls a request out of a source line and rewrites it through a `$0`-`$9` template
#[derive(Debug)]
pub struct Extractor {
    regex: Regex,
    template: String,
}

impl Extractor {
    pub fn new(regex: Regex, template: String) -> Self {
        Self { regex, template }
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// `None` when the line does not match. An empty template yields the whole match.
    pub fn extract(&self, line: &str) -> Option<String> {
        let caps = self.regex.captures(line)?;
        if self.template.is_empty() {
            return Some(caps[0].to_string());
        }
        Some(expand_template(&self.template, &caps))
    }
}

fn expand_template(template: &str, caps: &Captures) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '$'
            && let Some(group) = chars.peek().and_then(|next| next.to_digit(10))
        {
            chars.next();
            out.push_str(caps.get(group as usize).map_or("", |m| m.as_str()));
            continue;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor(pattern: &str, template: &str) -> Extractor {
        let regex = compile_pattern(pattern).unwrap().unwrap();
        Extractor::new(regex, template.to_string())
    }

    #[test]
    fn test_empty_pattern_disables_extraction() {
        assert!(compile_pattern("").unwrap().is_none());
    }

    #[test]
    fn test_invalid_pattern_names_the_pattern() {
        let err = compile_pattern("([a-z]").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { ref pattern, .. } if pattern == "([a-z]"));
        assert!(err.to_string().contains("([a-z]"));
    }

    #[test]
    fn test_extract_with_template() {
        let ex = extractor("[a-z]*([0-9]+)([a-z]*)", "/display?a=$1&b=$2");
        assert_eq!(
            ex.extract("abc123xyz").as_deref(),
            Some("/display?a=123&b=xyz")
        );
        assert_eq!(ex.extract("no digits here"), None);
    }

    #[test]
    fn test_extract_without_template_returns_whole_match() {
        let ex = extractor("/item/[0-9]+", "");
        assert_eq!(
            ex.extract("GET /item/42 HTTP/1.1").as_deref(),
            Some("/item/42")
        );
    }

    #[test]
    fn test_template_group_references() {
        let ex = extractor("(a)(b)?", "$0|$1|$2|$9|$x|$");
        assert_eq!(ex.extract("a").as_deref(), Some("a|a|||$x|$"));
    }

    #[test]
    fn test_single_digit_group_reference() {
        let ex = extractor("(x)", "$10");
        assert_eq!(ex.extract("x").as_deref(), Some("x0"));
    }

    #[test]
    fn test_alternation_is_leftmost_first() {
        let ex = extractor("a|ab", "");
        assert_eq!(ex.extract("ab").as_deref(), Some("a"));
    }

    #[test]
    fn test_line_oriented_matching() {
        let ex = extractor("^b.*$", "");
        assert_eq!(ex.extract("a\nbc\nd").as_deref(), Some("bc"));
        assert_eq!(ex.pattern(), "^b.*$");
    }
}
