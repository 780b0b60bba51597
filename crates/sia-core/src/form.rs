//! The sales-information form: one submission's worth of field values.

use thiserror::Error;

/// Raised when a submission is missing one of the two required fields.
///
/// The Display text is shown to the user verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Please fill in at least the Product Name and Company URL fields.")]
pub struct MissingRequiredFields;

/// Snapshot of the form at submit time. Every submission builds a fresh one;
/// nothing outlives the render it belongs to.
///
/// Text fields default to empty strings so that fields absent from the
/// request payload behave like untouched inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesForm {
    pub product_name: String,
    pub company_url: String,
    pub product_category: String,
    /// Free text; competitor URLs separated by commas.
    pub competitors: String,
    pub value_proposition: String,
    pub target_customer: String,
    /// Filename of the optional product overview upload. The file's contents
    /// are never read.
    pub product_overview: Option<String>,
    pub export_summary: bool,
    pub advanced_features: bool,
}

impl SalesForm {
    /// Checks the two required fields. Everything else is accepted as-is,
    /// including whitespace-only values.
    ///
    /// # Errors
    ///
    /// Returns [`MissingRequiredFields`] if the product name or company URL
    /// is empty.
    pub fn validate(&self) -> Result<(), MissingRequiredFields> {
        if self.product_name.is_empty() || self.company_url.is_empty() {
            return Err(MissingRequiredFields);
        }
        Ok(())
    }
}
