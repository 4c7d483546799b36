//! Page surfaces the engine drives.
//!
//! The surrounding page owns the actual DOM; the engine only sees these
//! traits. Production wires adapters over the real elements, tests inject
//! fakes or mocks.

use mockall::automock;
use reqwest::Url;

/// The add-product form element.
#[automock]
pub trait FormElement: Send + Sync {
    /// The form's declared target URL.
    fn action(&self) -> Url;

    /// Snapshot of the current field values, in form order.
    fn fields(&self) -> Vec<(String, String)>;

    /// Reset all inputs to their empty/default state.
    fn reset(&self);
}

/// The inline error-display region next to the form.
#[automock]
pub trait ErrorRegion: Send + Sync {
    /// Empty the region and hide it.
    fn clear(&self);

    /// Make the region visible with the given content.
    fn show(&self, html: &str);
}

/// The product table's body element.
#[automock]
pub trait TableBody: Send + Sync {
    /// Append a row as the last row of the table body.
    fn append_row(&self, html: &str);
}

/// Success notifications surfaced to the user.
#[automock]
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
}
