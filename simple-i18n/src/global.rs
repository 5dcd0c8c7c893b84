//! A process-wide [`I18n`] instance.
//!
//! Applications that want one shared translator call [`initialize`] once at
//! startup and [`translate`] from anywhere. The instance sits behind a
//! read-write lock: translations take a read lock, [`initialize`] and
//! [`set_locale`] take a write lock. A poisoned lock is recovered, since the
//! state it guards is always left consistent.

use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use simple_i18n_core::error::I18nResult;
use simple_i18n_core::value::Args;

use crate::session::{I18n, I18nConfig};

static GLOBAL: OnceLock<RwLock<I18n>> = OnceLock::new();

fn instance() -> &'static RwLock<I18n> {
    GLOBAL.get_or_init(|| RwLock::new(I18n::new()))
}

fn read() -> RwLockReadGuard<'static, I18n> {
    instance().read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, I18n> {
    instance().write().unwrap_or_else(PoisonError::into_inner)
}

/// Initializes (or re-initializes) the global instance.
pub fn initialize(config: I18nConfig) {
    write().initialize(config);
}

/// Returns `true` once the global instance has been initialized.
pub fn is_initialized() -> bool {
    read().is_initialized()
}

/// Switches the global active locale.
pub fn set_locale(locale: &str) -> I18nResult<()> {
    write().set_locale(locale)
}

/// The global active locale, normalized.
pub fn locale() -> I18nResult<String> {
    read().locale().map(str::to_string)
}

/// Translates `key` with the global instance.
pub fn translate(key: &str, args: Option<&Args>) -> I18nResult<String> {
    read().translate(key, args)
}

/// Processes `template` with the global instance.
pub fn process(template: &str, args: Option<&Args>) -> I18nResult<String> {
    read().process(template, args)
}

/// Returns the unprocessed template for `key`.
pub fn raw_lookup(key: &str) -> I18nResult<Option<String>> {
    Ok(read().raw_lookup(key)?.map(str::to_string))
}

/// Returns `true` if `key` exists in the global active language.
pub fn has_key(key: &str) -> I18nResult<bool> {
    read().has_key(key)
}

/// Returns the global instance to its uninitialized state.
pub fn reset() {
    *write() = I18n::new();
}
