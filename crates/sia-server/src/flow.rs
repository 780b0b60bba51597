//! Submission pipeline: validate, fetch context, generate the insight.

use sia_core::{render_insights_prompt, SalesForm};
use sia_llm::LlmClient;
use sia_search::SearchClient;
use tracing::warn;

/// What a submission produced. Rendering keys off the variant: a rejected
/// submission keeps the entered values on screen, the other two clear the
/// form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Required fields were missing. Nothing left the server.
    Rejected { message: String },
    /// Validation passed but the search or the completion failed.
    Failed { message: String },
    /// The generated insight plus any reference links from the search.
    Completed {
        insight: String,
        references: Vec<String>,
    },
}

/// Runs one submission end to end.
///
/// The company URL seeds the web search, whose results contribute only the
/// reference links; the prompt is composed from the form fields alone. A
/// search failure stops the flow before any completion request is made.
pub async fn run_submission(
    form: &SalesForm,
    search: &SearchClient,
    llm: &LlmClient,
    max_results: u8,
) -> SubmissionOutcome {
    if let Err(e) = form.validate() {
        return SubmissionOutcome::Rejected {
            message: e.to_string(),
        };
    }

    let context = match search.search(&form.company_url, max_results).await {
        Ok(context) => context,
        Err(e) => {
            warn!(error = %e, "search failed");
            return SubmissionOutcome::Failed {
                message: format!("Error generating insights: {e}"),
            };
        }
    };

    let prompt = render_insights_prompt(form);
    match llm.complete(&prompt).await {
        Ok(insight) => SubmissionOutcome::Completed {
            insight,
            references: context.references,
        },
        Err(e) => {
            warn!(error = %e, "insight generation failed");
            SubmissionOutcome::Failed {
                message: format!("Error generating insights: {e}"),
            }
        }
    }
}
