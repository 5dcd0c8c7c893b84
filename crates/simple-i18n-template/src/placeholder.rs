//! Placeholder extraction.
//!
//! Grammar: `{` name `}` or `{` name `,` rule `}` where `name` is one or more
//! ASCII word characters (`[A-Za-z0-9_]`) and `rule` is one or more word
//! characters, `:` or `-`. Nothing else is a placeholder: `{ name }`,
//! `{invalid-name}` and `{foo,inv@lid}` stay literal text.
//!
//! Parsing is a single stateless pass producing the template as a sequence of
//! [`Segment`]s plus the list of distinct placeholders, in order of first
//! occurrence. Two placeholders are the same when their full `{...}` text is.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

/// A placeholder found in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// The full placeholder text, braces included (e.g. `{count,number}`).
    pub text: &'a str,
    /// The variable name.
    pub name: &'a str,
    /// The rule name, if one was given.
    pub rule: Option<&'a str>,
}

/// A piece of a parsed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text, copied to the output unchanged.
    Literal(&'a str),
    /// An index into [`ParsedTemplate::placeholders`].
    Placeholder(usize),
}

/// A template split into literal text and placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTemplate<'a> {
    segments: Vec<Segment<'a>>,
    placeholders: Vec<Placeholder<'a>>,
}

impl<'a> ParsedTemplate<'a> {
    /// The template's segments, in order.
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// The distinct placeholders, in order of first occurrence.
    pub fn placeholders(&self) -> &[Placeholder<'a>] {
        &self.placeholders
    }

    /// Returns `true` if the template contains no recognized placeholder.
    pub fn is_literal(&self) -> bool {
        self.placeholders.is_empty()
    }
}

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\{([A-Za-z0-9_]+)(?:,([A-Za-z0-9_:\-]+))?\}").expect("valid regex")
    })
}

/// Splits a template into segments and distinct placeholders.
///
/// # Examples
///
/// ```
/// use simple_i18n_template::placeholder::{parse, Segment};
///
/// let parsed = parse("{a} and {a} and {b,upper}");
/// assert_eq!(parsed.placeholders().len(), 2);
/// assert_eq!(parsed.segments()[0], Segment::Placeholder(0));
/// assert_eq!(parsed.segments()[2], Segment::Placeholder(0));
/// assert_eq!(parsed.placeholders()[1].rule, Some("upper"));
/// ```
pub fn parse(template: &str) -> ParsedTemplate<'_> {
    let mut parsed = ParsedTemplate::default();
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut last_end = 0;

    for caps in placeholder_regex().captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        if whole.start() > last_end {
            parsed
                .segments
                .push(Segment::Literal(&template[last_end..whole.start()]));
        }
        last_end = whole.end();

        let text = whole.as_str();
        let index = *seen.entry(text).or_insert_with(|| {
            parsed.placeholders.push(Placeholder {
                text,
                name: name.as_str(),
                rule: caps.get(2).map(|m| m.as_str()),
            });
            parsed.placeholders.len() - 1
        });
        parsed.segments.push(Segment::Placeholder(index));
    }

    if last_end < template.len() {
        parsed.segments.push(Segment::Literal(&template[last_end..]));
    }

    parsed
}

/// Returns the distinct placeholders of a template, in order of first
/// occurrence.
pub fn find_placeholders(template: &str) -> Vec<Placeholder<'_>> {
    parse(template).placeholders
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(text: &str) -> Vec<(String, String, Option<String>)> {
        find_placeholders(text)
            .into_iter()
            .map(|p| {
                (
                    p.text.to_string(),
                    p.name.to_string(),
                    p.rule.map(str::to_string),
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_template() {
        let parsed = parse("");
        assert!(parsed.is_literal());
        assert!(parsed.segments().is_empty());
    }

    #[test]
    fn test_name_and_rule() {
        assert_eq!(
            single("{foo,bar}"),
            vec![("{foo,bar}".into(), "foo".into(), Some("bar".into()))]
        );
    }

    #[test]
    fn test_name_only() {
        assert_eq!(single("{foo}"), vec![("{foo}".into(), "foo".into(), None)]);
    }

    #[test]
    fn test_multiple_placeholders() {
        let found = find_placeholders("{foo1,bar1} {foo2,bar2}");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "foo1");
        assert_eq!(found[0].rule, Some("bar1"));
        assert_eq!(found[1].name, "foo2");
        assert_eq!(found[1].rule, Some("bar2"));
    }

    #[test]
    fn test_placeholder_inside_longer_text() {
        let found = find_placeholders("hello {foo,bar}, this has <html-tags />");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "{foo,bar}");
    }

    #[test]
    fn test_rule_with_colon() {
        assert_eq!(find_placeholders("{foo,bar:sub}")[0].rule, Some("bar:sub"));
    }

    #[test]
    fn test_rule_with_hyphens() {
        assert_eq!(
            find_placeholders("{foo,bar-sample:sub-name}")[0].rule,
            Some("bar-sample:sub-name")
        );
    }

    #[test]
    fn test_name_with_hyphen_is_not_a_placeholder() {
        assert!(find_placeholders("{invalid-name,rule-name}").is_empty());
        assert!(find_placeholders("{invalid-name}").is_empty());
    }

    #[test]
    fn test_rule_with_special_characters_is_not_a_placeholder() {
        assert!(find_placeholders("{foo,inv@lid-rule$}").is_empty());
    }

    #[test]
    fn test_whitespace_is_not_a_placeholder() {
        assert!(find_placeholders("{ name, string }").is_empty());
        assert!(find_placeholders("{name }").is_empty());
    }

    #[test]
    fn test_trailing_comma_is_not_a_placeholder() {
        assert!(find_placeholders("{name,}").is_empty());
    }

    #[test]
    fn test_non_ascii_name_is_not_a_placeholder() {
        assert!(find_placeholders("{naïve}").is_empty());
    }

    #[test]
    fn test_duplicates_are_recorded_once() {
        let parsed = parse("{a}-{b}-{a}");
        assert_eq!(parsed.placeholders().len(), 2);
        assert_eq!(
            parsed.segments(),
            &[
                Segment::Placeholder(0),
                Segment::Literal("-"),
                Segment::Placeholder(1),
                Segment::Literal("-"),
                Segment::Placeholder(0),
            ]
        );
    }

    #[test]
    fn test_same_name_different_rule_is_distinct() {
        let found = find_placeholders("{a} {a,upper}");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].rule, None);
        assert_eq!(found[1].rule, Some("upper"));
    }

    #[test]
    fn test_nested_braces_match_innermost() {
        let parsed = parse("{{name}}");
        assert_eq!(
            parsed.segments(),
            &[
                Segment::Literal("{"),
                Segment::Placeholder(0),
                Segment::Literal("}"),
            ]
        );
    }

    #[test]
    fn test_literal_segments_cover_text() {
        let parsed = parse("Hi {name}, bye");
        assert_eq!(
            parsed.segments(),
            &[
                Segment::Literal("Hi "),
                Segment::Placeholder(0),
                Segment::Literal(", bye"),
            ]
        );
    }
}
