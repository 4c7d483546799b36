//! Submission controller.
//!
//! Drives one create-product cycle: clear stale errors, snapshot the form,
//! send the request, then either append the rendered row or surface the
//! failure. The controller keeps no state between submissions; concurrent
//! in-flight submissions are allowed and complete independently, so the
//! table may receive rows in completion order rather than submission order.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::page::{ErrorRegion, FormElement, Notifier, TableBody};
use crate::products::api::ProductApi;
use crate::products::errors::SubmissionError;
use crate::products::records::{ProductRecord, ValidationErrors};
use crate::products::render;

/// Message surfaced after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Product added successfully!";

/// Terminal result of one submission cycle, for observers and tests. The
/// user-visible effects have already been applied when this is returned.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// The server created the product and the row was appended.
    Created(ProductRecord),
    /// The server rejected the data; field messages are on display.
    Rejected(ValidationErrors),
    /// Transport failure or unrecognizable response; the generic message is
    /// on display.
    Failed,
}

/// Handles add-product form submissions for the page.
pub struct SubmissionController {
    api: Arc<dyn ProductApi>,
    form: Arc<dyn FormElement>,
    errors: Arc<dyn ErrorRegion>,
    table: Arc<dyn TableBody>,
    notifier: Arc<dyn Notifier>,
}

impl SubmissionController {
    #[must_use]
    pub fn new(
        api: Arc<dyn ProductApi>,
        form: Arc<dyn FormElement>,
        errors: Arc<dyn ErrorRegion>,
        table: Arc<dyn TableBody>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            form,
            errors,
            table,
            notifier,
        }
    }

    /// Run one submission cycle.
    ///
    /// Every failure is absorbed here and written to the error region;
    /// nothing propagates to the caller beyond the returned outcome.
    pub async fn submit(&self) -> SubmissionOutcome {
        self.errors.clear();

        let action = self.form.action();
        let fields = self.form.fields();

        debug!(action = %action, field_count = fields.len(), "submitting product form");

        match self.api.create_product(action, fields).await {
            Ok(record) => {
                self.form.reset();
                self.table.append_row(&render::product_row(&record));
                self.notifier.success(SUCCESS_MESSAGE);

                debug!(product_id = record.id, "product created");

                SubmissionOutcome::Created(record)
            }
            Err(SubmissionError::Validation(errors)) => {
                self.errors.show(&render::validation_errors(&errors));

                debug!("submission rejected by server validation");

                SubmissionOutcome::Rejected(errors)
            }
            Err(error) => {
                self.errors.show(render::GENERIC_ERROR_MESSAGE);

                warn!(%error, "submission failed without field detail");

                SubmissionOutcome::Failed
            }
        }
    }
}
