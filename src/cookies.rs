//! Cookie access for the page environment.
//!
//! The browser exposes cookies as a single `Cookie` header string. The
//! [`CookieStore`] trait reframes that ambient global as an injectable
//! dependency with a defined absent case, so tests can supply fixtures
//! instead of real environment state.

use mockall::automock;
use percent_encoding::percent_decode_str;

/// Read-only view of the environment's cookie header.
#[automock]
pub trait CookieStore: Send + Sync {
    /// The raw `Cookie` header as the environment exposes it, if any
    /// cookies exist.
    fn cookie_header(&self) -> Option<String>;
}

/// Look up the named cookie in the given store.
///
/// Returns `None` when the store has no cookies or no entry matches. Safe to
/// call before any cookie has been set.
#[must_use]
pub fn get(store: &dyn CookieStore, name: &str) -> Option<String> {
    let header = store.cookie_header()?;

    find_in_header(&header, name)
}

/// Find the named cookie in a raw `Cookie` header string.
///
/// Entries are split on `;` and trimmed. The first entry whose name matches
/// exactly wins, matching standard cookie precedence when duplicates exist.
/// The value is returned percent-decoded; invalid sequences decode lossily
/// rather than failing.
#[must_use]
pub fn find_in_header(header: &str, name: &str) -> Option<String> {
    for entry in header.split(';') {
        let entry = entry.trim();

        let Some((entry_name, value)) = entry.split_once('=') else {
            continue;
        };

        if entry_name == name {
            return Some(percent_decode_str(value).decode_utf8_lossy().into_owned());
        }
    }

    None
}
