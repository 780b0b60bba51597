//! Insight form: render, submit, download.

use askama::Template;
use axum::extract::multipart::{Field, Multipart, MultipartError};
use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use sia_core::SalesForm;
use tracing::warn;

use super::{render_page, AppState};
use crate::flow::{run_submission, SubmissionOutcome};

#[derive(Template)]
#[template(path = "insights.html")]
struct InsightsTemplate {
    active_page: &'static str,
    form: SalesForm,
    error: Option<String>,
    insight: Option<String>,
    references: Vec<String>,
    show_download: bool,
    show_advanced: bool,
}

impl InsightsTemplate {
    fn blank() -> Self {
        Self {
            active_page: "insights",
            form: SalesForm::default(),
            error: None,
            insight: None,
            references: Vec::new(),
            show_download: false,
            show_advanced: false,
        }
    }
}

pub(crate) async fn show_form() -> Response {
    render_page(&InsightsTemplate::blank())
}

pub(crate) async fn submit(State(state): State<AppState>, multipart: Multipart) -> Response {
    let form = match read_sales_form(multipart).await {
        Ok(form) => form,
        Err(e) => {
            warn!(error = %e, "unreadable form submission");
            return (StatusCode::BAD_REQUEST, "invalid form submission").into_response();
        }
    };

    let outcome = run_submission(
        &form,
        &state.search,
        &state.llm,
        state.config.search_max_results,
    )
    .await;

    let show_advanced = form.advanced_features;
    let show_download = form.export_summary;
    let template = match outcome {
        SubmissionOutcome::Rejected { message } => InsightsTemplate {
            form,
            error: Some(message),
            show_advanced,
            ..InsightsTemplate::blank()
        },
        SubmissionOutcome::Failed { message } => InsightsTemplate {
            error: Some(message),
            show_advanced,
            ..InsightsTemplate::blank()
        },
        SubmissionOutcome::Completed {
            insight,
            references,
        } => InsightsTemplate {
            insight: (!insight.is_empty()).then_some(insight),
            references,
            show_download,
            show_advanced,
            ..InsightsTemplate::blank()
        },
    };
    render_page(&template)
}

/// Reads the multipart submission into a [`SalesForm`].
///
/// Text fields map by name and checkboxes count as set when present at
/// all. The uploaded document contributes only its file name; the bytes
/// are drained and dropped unread.
async fn read_sales_form(mut multipart: Multipart) -> Result<SalesForm, MultipartError> {
    let mut form = SalesForm::default();

    while let Some(mut field) = multipart.next_field().await? {
        let Some(name) = field.name().map(ToOwned::to_owned) else {
            drain(&mut field).await?;
            continue;
        };

        match name.as_str() {
            "product_name" => form.product_name = field.text().await?,
            "company_url" => form.company_url = field.text().await?,
            "product_category" => form.product_category = field.text().await?,
            "competitors" => form.competitors = field.text().await?,
            "value_proposition" => form.value_proposition = field.text().await?,
            "target_customer" => form.target_customer = field.text().await?,
            "export_summary" => {
                field.text().await?;
                form.export_summary = true;
            }
            "advanced_features" => {
                field.text().await?;
                form.advanced_features = true;
            }
            "product_overview" => {
                form.product_overview = field
                    .file_name()
                    .map(ToOwned::to_owned)
                    .filter(|file_name| !file_name.is_empty());
                drain(&mut field).await?;
            }
            _ => drain(&mut field).await?,
        }
    }

    Ok(form)
}

async fn drain(field: &mut Field<'_>) -> Result<(), MultipartError> {
    while field.chunk().await?.is_some() {}
    Ok(())
}

#[derive(Debug, Deserialize)]
pub(crate) struct DownloadForm {
    content: String,
}

/// Serves the summary back exactly as rendered, as a plain-text download.
pub(crate) async fn download(Form(form): Form<DownloadForm>) -> Response {
    (
        [
            (CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                CONTENT_DISPOSITION,
                "attachment; filename=\"sales_insights_summary.txt\"",
            ),
        ],
        form.content,
    )
        .into_response()
}
