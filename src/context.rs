//! Page Context

use std::sync::Arc;

use reqwest::Url;
use thiserror::Error;

use crate::cookies::CookieStore;
use crate::csrf::CsrfPolicy;
use crate::gateway::Gateway;
use crate::page::{ErrorRegion, FormElement, Notifier, TableBody};
use crate::products::SubmissionController;
use crate::products::api::HttpProductApi;

#[derive(Debug, Error)]
pub enum PageInitError {
    #[error("failed to build the page's http client")]
    Http(#[source] reqwest::Error),
}

/// The page's surfaces, as wired by the surrounding environment.
pub struct PageSurfaces {
    pub form: Arc<dyn FormElement>,
    pub errors: Arc<dyn ErrorRegion>,
    pub table: Arc<dyn TableBody>,
    pub notifier: Arc<dyn Notifier>,
}

/// Everything the page needs, assembled once at startup.
#[derive(Clone)]
pub struct PageContext {
    pub submissions: Arc<SubmissionController>,
}

impl PageContext {
    /// Build the engine for a page at `origin`.
    ///
    /// The cookie header is read from the store once, here: the CSRF token
    /// feeds the policy that rides on every request, and the session
    /// cookies seed the gateway's jar so same-origin requests carry them.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn attach(
        origin: Url,
        cookies: &dyn CookieStore,
        surfaces: PageSurfaces,
    ) -> Result<Self, PageInitError> {
        let cookie_header = cookies.cookie_header();
        let policy = CsrfPolicy::from_cookies(origin, cookies);

        let gateway =
            Gateway::new(policy, cookie_header.as_deref()).map_err(PageInitError::Http)?;
        let api = Arc::new(HttpProductApi::new(gateway));

        let submissions = Arc::new(SubmissionController::new(
            api,
            surfaces.form,
            surfaces.errors,
            surfaces.table,
            surfaces.notifier,
        ));

        Ok(Self { submissions })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::cookies::MockCookieStore;
    use crate::page::{MockErrorRegion, MockFormElement, MockNotifier, MockTableBody};

    #[test]
    fn attach_builds_a_controller_without_any_cookie() -> TestResult {
        let mut store = MockCookieStore::new();
        store.expect_cookie_header().return_const(None::<String>);

        let origin = Url::parse("https://shop.example.com").expect("origin should parse");

        let context = PageContext::attach(
            origin,
            &store,
            PageSurfaces {
                form: Arc::new(MockFormElement::new()),
                errors: Arc::new(MockErrorRegion::new()),
                table: Arc::new(MockTableBody::new()),
                notifier: Arc::new(MockNotifier::new()),
            },
        )?;

        // Nothing to submit here; attaching must simply not fail.
        let _ = Arc::strong_count(&context.submissions);

        Ok(())
    }
}
