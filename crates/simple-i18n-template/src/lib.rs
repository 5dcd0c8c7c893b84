//! # simple-i18n-template
//!
//! Substitution engine for simple-i18n templates.
//!
//! A template is plain text with `{name}` or `{name,rule}` placeholders.
//! [`placeholder`] finds them, [`rules`] maps rule names to functions, and
//! [`processor`] ties the two together.
//!
//! ```
//! use simple_i18n_core::value::args;
//! use simple_i18n_template::{RuleRegistry, TemplateProcessor};
//!
//! let mut rules = RuleRegistry::new();
//! rules.register_fn("upper", |value, _name| {
//!     value.map(|v| v.to_string().to_uppercase()).unwrap_or_default()
//! });
//!
//! let processor = TemplateProcessor::new(rules);
//! let out = processor.process("Hi {name,upper}!", Some(&args([("name", "bob")])));
//! assert_eq!(out, "Hi BOB!");
//! ```

pub mod placeholder;
pub mod processor;
pub mod rules;

pub use placeholder::{find_placeholders, parse, ParsedTemplate, Placeholder, Segment};
pub use processor::TemplateProcessor;
pub use rules::{string_rule, Rule, RuleRegistry, STRING_RULE};
