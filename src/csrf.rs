//! CSRF token policy for outgoing requests.
//!
//! The server expects the session's CSRF token echoed back on every mutating
//! request. The policy is built once at page startup and consulted for every
//! request the [`gateway`](crate::gateway) sends, so future mutating calls
//! inherit it without opting in.

use reqwest::{Method, Url};

use crate::cookies::{self, CookieStore};

/// Name of the cookie the server stores the CSRF token in.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Header the token is echoed back on.
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// Methods defined to have no side effects, exempt from token attachment.
const SAFE_METHODS: [Method; 4] = [Method::GET, Method::HEAD, Method::OPTIONS, Method::TRACE];

/// Decides whether and how to attach the CSRF token to a request.
///
/// The token is attached only to mutating requests targeting the page's own
/// origin. Attaching it to a cross-origin request would leak the secret.
#[derive(Debug, Clone)]
pub struct CsrfPolicy {
    origin: Url,
    token: Option<String>,
}

impl CsrfPolicy {
    /// Create a policy for the given page origin and token.
    #[must_use]
    pub fn new(origin: Url, token: Option<String>) -> Self {
        Self { origin, token }
    }

    /// Create a policy by reading the token cookie from the store.
    ///
    /// The token is read once; a cookie set later is not picked up until the
    /// page is reloaded, matching how the original page behaves.
    #[must_use]
    pub fn from_cookies(origin: Url, store: &dyn CookieStore) -> Self {
        let token = cookies::get(store, CSRF_COOKIE_NAME);

        Self::new(origin, token)
    }

    /// The page origin this policy is scoped to.
    #[must_use]
    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// The token this policy attaches, if one exists.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The header to attach for a request, or `None` when the method is
    /// safe, the target is cross-origin, or no token exists.
    #[must_use]
    pub fn header_for(&self, method: &Method, target: &Url) -> Option<(&'static str, &str)> {
        if SAFE_METHODS.contains(method) {
            return None;
        }

        if !self.is_same_origin(target) {
            return None;
        }

        self.token().map(|token| (CSRF_HEADER_NAME, token))
    }

    fn is_same_origin(&self, target: &Url) -> bool {
        self.origin.origin() == target.origin()
    }
}
