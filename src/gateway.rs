//! HTTP gateway for the page.
//!
//! Every request the page sends leaves through here, so the CSRF policy is
//! applied in one place rather than at each call site. The gateway's cookie
//! jar is seeded from the environment's cookie header, so same-origin
//! requests carry the session cookies the server validates the CSRF header
//! against.

use std::sync::Arc;

use reqwest::cookie::Jar;
use reqwest::{Client, Method, RequestBuilder, Response, Url};

use crate::csrf::CsrfPolicy;

/// HTTP client with the page's CSRF policy applied to every request.
#[derive(Debug, Clone)]
pub struct Gateway {
    http: Client,
    cookies: Arc<Jar>,
    policy: CsrfPolicy,
}

impl Gateway {
    /// Create a gateway carrying the given policy, its cookie jar seeded
    /// from the raw `Cookie` header the environment exposes.
    ///
    /// Seeded cookies are scoped to the page origin, so they never ride on
    /// a cross-origin request.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(policy: CsrfPolicy, cookie_header: Option<&str>) -> Result<Self, reqwest::Error> {
        let cookies = Arc::new(Jar::default());

        if let Some(header) = cookie_header {
            for entry in header.split(';') {
                let entry = entry.trim();

                if !entry.is_empty() {
                    cookies.add_cookie_str(entry, policy.origin());
                }
            }
        }

        let http = Client::builder().cookie_provider(cookies.clone()).build()?;

        Ok(Self {
            http,
            cookies,
            policy,
        })
    }

    /// The policy this gateway applies.
    #[must_use]
    pub fn policy(&self) -> &CsrfPolicy {
        &self.policy
    }

    /// Send a URL-encoded form body to `target` with method POST, with the
    /// CSRF header attached per the policy.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be completed at the
    /// transport level. Non-2xx statuses are not errors here; callers branch
    /// on the response status.
    pub async fn post_form(
        &self,
        target: &Url,
        fields: &[(String, String)],
    ) -> Result<Response, reqwest::Error> {
        self.request(Method::POST, target).form(fields).send().await
    }

    fn request(&self, method: Method, target: &Url) -> RequestBuilder {
        let mut builder = self.http.request(method.clone(), target.clone());

        if let Some((name, value)) = self.policy.header_for(&method, target) {
            builder = builder.header(name, value);
        }

        builder
    }
}
