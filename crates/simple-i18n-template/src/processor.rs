//! Template processing: placeholder substitution through rules.
//!
//! [`TemplateProcessor::process`] never fails. Missing arguments reach the
//! rule as `None`, unknown rule names use the `string` rule, and anything
//! that is not a placeholder is copied verbatim. Each distinct placeholder
//! text is rendered exactly once, even if it occurs several times, and
//! rendered values are not themselves scanned for placeholders.

use simple_i18n_core::lookup::{EmptyLookup, RawLookup};
use simple_i18n_core::value::Args;
use tracing::trace;

use crate::placeholder::{parse, Segment};
use crate::rules::RuleRegistry;

/// Substitutes placeholders in templates using a [`RuleRegistry`].
#[derive(Debug, Clone, Default)]
pub struct TemplateProcessor {
    rules: RuleRegistry,
}

impl TemplateProcessor {
    /// Creates a processor over the given rules.
    pub const fn new(rules: RuleRegistry) -> Self {
        Self { rules }
    }

    /// Returns the processor's rules.
    pub const fn rules(&self) -> &RuleRegistry {
        &self.rules
    }

    /// Processes a template outside of any language.
    ///
    /// Rules that read the active language see an empty one.
    pub fn process(&self, template: &str, args: Option<&Args>) -> String {
        self.process_with_lookup(template, args, &EmptyLookup)
    }

    /// Processes a template, giving rules read access to `lookup`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_i18n_core::value::args;
    /// use simple_i18n_template::TemplateProcessor;
    ///
    /// let processor = TemplateProcessor::default();
    /// let out = processor.process("{first} {last}", Some(&args([("first", "Bob")])));
    /// assert_eq!(out, "Bob ");
    /// ```
    pub fn process_with_lookup(
        &self,
        template: &str,
        args: Option<&Args>,
        lookup: &dyn RawLookup,
    ) -> String {
        let parsed = parse(template);
        if parsed.is_literal() {
            return template.to_string();
        }

        let rendered: Vec<String> = parsed
            .placeholders()
            .iter()
            .map(|placeholder| {
                let value = args.and_then(|a| a.get(placeholder.name));
                let rule = self.rules.resolve(placeholder.rule);
                trace!(
                    name = placeholder.name,
                    rule = placeholder.rule.unwrap_or_default(),
                    known_rule = placeholder.rule.is_some_and(|r| self.rules.contains(r)),
                    has_value = value.is_some(),
                    "substituting placeholder"
                );
                rule.apply(value, placeholder.name, lookup)
            })
            .collect();

        let mut out = String::with_capacity(template.len());
        for segment in parsed.segments() {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(index) => out.push_str(&rendered[*index]),
            }
        }
        out
    }
}
