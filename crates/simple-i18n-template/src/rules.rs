//! Rule registry and the built-in `string` rule.
//!
//! A rule turns the argument bound to a placeholder into text. It is called
//! as `rule(value, variable_name)`, where `value` is `None` when the caller
//! did not supply the argument at all. Rules registered with
//! [`RuleRegistry::register_with_lookup`] additionally get read access to the
//! active language, e.g. to fetch a locale-specific date pattern.
//!
//! The registry always holds a `string` rule. It is what unknown rule names
//! and rule-less placeholders fall back to, and callers may replace it.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use simple_i18n_core::lookup::RawLookup;
use simple_i18n_core::value::Value;

/// The name of the built-in fallback rule.
pub const STRING_RULE: &str = "string";

type RuleFn = dyn Fn(Option<&Value>, &str, &dyn RawLookup) -> String + Send + Sync;

/// A named transformation from an argument value to text.
///
/// Cloning a `Rule` is cheap; the function itself is shared.
#[derive(Clone)]
pub struct Rule {
    func: Arc<RuleFn>,
}

impl Rule {
    /// Wraps a `(value, name) -> String` function.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(Option<&Value>, &str) -> String + Send + Sync + 'static,
    {
        let func: Arc<RuleFn> = Arc::new(
            move |value: Option<&Value>, name: &str, _lookup: &dyn RawLookup| func(value, name),
        );
        Self { func }
    }

    /// Wraps a `(value, name, lookup) -> String` function.
    ///
    /// `lookup` reads raw templates from the language the rule is being
    /// applied in.
    pub fn with_lookup<F>(func: F) -> Self
    where
        F: Fn(Option<&Value>, &str, &dyn RawLookup) -> String + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// Applies the rule.
    pub fn apply(&self, value: Option<&Value>, name: &str, lookup: &dyn RawLookup) -> String {
        (self.func)(value, name, lookup)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").finish_non_exhaustive()
    }
}

/// The built-in `string` rule.
///
/// Absent and null values become the empty string; everything else uses its
/// natural textual form.
///
/// # Examples
///
/// ```
/// use simple_i18n_core::Value;
/// use simple_i18n_template::string_rule;
///
/// assert_eq!(string_rule(None, "x"), "");
/// assert_eq!(string_rule(Some(&Value::Null), "x"), "");
/// assert_eq!(string_rule(Some(&Value::from(0)), "x"), "0");
/// assert_eq!(string_rule(Some(&Value::from("<html-tag>")), "x"), "<html-tag>");
/// ```
pub fn string_rule(value: Option<&Value>, _name: &str) -> String {
    value.map(Value::to_display_string).unwrap_or_default()
}

/// A registry of available rules, keyed by rule name.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: HashMap<String, Rule>,
    /// The current `string` entry, kept apart so fallback never misses.
    fallback: Rule,
}

impl RuleRegistry {
    /// Creates a registry holding only the built-in rules.
    pub fn new() -> Self {
        let fallback = Rule::new(string_rule);
        let mut rules = HashMap::new();
        rules.insert(STRING_RULE.to_string(), fallback.clone());
        Self { rules, fallback }
    }

    /// Creates a registry from the built-in rules merged with `overrides`.
    ///
    /// An override with the same name as a built-in replaces it, including
    /// `string`.
    pub fn with_overrides<I, K>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, Rule)>,
        K: Into<String>,
    {
        let mut registry = Self::new();
        for (name, rule) in overrides {
            registry.register(name, rule);
        }
        registry
    }

    /// Registers a rule, replacing any existing rule of the same name.
    pub fn register(&mut self, name: impl Into<String>, rule: Rule) {
        let name = name.into();
        if name == STRING_RULE {
            self.fallback = rule.clone();
        }
        self.rules.insert(name, rule);
    }

    /// Registers a `(value, name) -> String` function as a rule.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, func: F)
    where
        F: Fn(Option<&Value>, &str) -> String + Send + Sync + 'static,
    {
        self.register(name, Rule::new(func));
    }

    /// Registers a `(value, name, lookup) -> String` function as a rule.
    pub fn register_with_lookup<F>(&mut self, name: impl Into<String>, func: F)
    where
        F: Fn(Option<&Value>, &str, &dyn RawLookup) -> String + Send + Sync + 'static,
    {
        self.register(name, Rule::with_lookup(func));
    }

    /// Returns the rule registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    /// Returns the rule for `name`, or the `string` rule when `name` is
    /// `None` or not registered.
    pub fn resolve(&self, name: Option<&str>) -> &Rule {
        name.and_then(|n| self.rules.get(n))
            .unwrap_or(&self.fallback)
    }

    /// Returns `true` if a rule is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Returns all registered rule names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rules are registered. Never the case in practice,
    /// since `string` is always present.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
