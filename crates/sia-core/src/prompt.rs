//! The fixed instruction template sent to the insight generator.

use crate::form::SalesForm;

/// Render the insight prompt for one submission.
///
/// Pure string substitution: the seven collected fields plus the derived
/// uploaded-document summary are dropped into the template slots. Search
/// output never feeds the prompt; it only surfaces as reference links.
#[must_use]
pub fn render_insights_prompt(form: &SalesForm) -> String {
    let uploaded_document_summary = document_summary(form.product_overview.as_deref());

    format!(
        r"You are a Sales Assistant AI prototype designed to assist sales representatives. Your role is to analyze provided inputs, gather insights from public sources, and generate a professional, concise, and actionable one-page summary for the sales representative.

Inputs to process:
1. Product Name: {product_name}
2. Company URL: {company_url}
3. Product Category: {product_category}
4. Competitors: {competitors}
5. Value Proposition: {value_proposition}
6. Target Customer: {target_customer}
7. Additional Context: {uploaded_document_summary}

Task Instructions:
1. Company Strategy:
 - Analyze public statements, press releases, or articles associated with the target company.
 - Identify key activities or projects that align with the product being sold.
 - Summarize job postings to infer the company’s focus areas and technology trends.

2. Competitor Mentions:
 - Identify any collaborations, partnerships, or rivalries involving the provided competitors.
 - Highlight how these competitors are engaging with the target company, if applicable.

3. Leadership Information:
 - List key executives, including titles and recent public statements or contributions.
 - Focus on individuals relevant to the product's domain or decision-making process.

4. Product/Strategy Summary:
 - Include insights from public reports or relevant online documents.
 - Relate these findings to the product or value proposition provided.

5. References:
 - Include links to all sources (e.g., articles, press releases) cited in the analysis.

Constraints:
- Respond only to the specific use case: assisting sales representatives in understanding prospective accounts.
- Ensure all insights are accurate, concise, and actionable.",
        product_name = form.product_name,
        company_url = form.company_url,
        product_category = form.product_category,
        competitors = form.competitors,
        value_proposition = form.value_proposition,
        target_customer = form.target_customer,
        uploaded_document_summary = uploaded_document_summary,
    )
}

/// One-line stand-in for the uploaded document. File contents are never
/// read; only the name makes it into the prompt.
fn document_summary(file_name: Option<&str>) -> String {
    match file_name {
        Some(name) => format!("Uploaded document: {name}"),
        None => "No additional context provided.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> SalesForm {
        SalesForm {
            product_name: "Acme Widget".to_string(),
            company_url: "acme.com".to_string(),
            product_category: "Industrial tooling".to_string(),
            competitors: "rival.com, other.io".to_string(),
            value_proposition: "Cuts assembly time in half".to_string(),
            target_customer: "Plant operations managers".to_string(),
            product_overview: None,
            export_summary: false,
            advanced_features: false,
        }
    }

    #[test]
    fn prompt_substitutes_all_fields() {
        let prompt = render_insights_prompt(&full_form());
        assert!(prompt.contains("1. Product Name: Acme Widget"));
        assert!(prompt.contains("2. Company URL: acme.com"));
        assert!(prompt.contains("3. Product Category: Industrial tooling"));
        assert!(prompt.contains("4. Competitors: rival.com, other.io"));
        assert!(prompt.contains("5. Value Proposition: Cuts assembly time in half"));
        assert!(prompt.contains("6. Target Customer: Plant operations managers"));
    }

    #[test]
    fn prompt_notes_missing_document() {
        let prompt = render_insights_prompt(&full_form());
        assert!(prompt.contains("7. Additional Context: No additional context provided."));
        assert!(!prompt.contains("Uploaded document:"));
    }

    #[test]
    fn prompt_mentions_uploaded_document_by_name() {
        let form = SalesForm {
            product_overview: Some("overview-deck.pdf".to_string()),
            ..full_form()
        };
        let prompt = render_insights_prompt(&form);
        assert!(prompt.contains("7. Additional Context: Uploaded document: overview-deck.pdf"));
        assert!(!prompt.contains("No additional context provided."));
    }

    #[test]
    fn prompt_keeps_instruction_sections() {
        let prompt = render_insights_prompt(&full_form());
        assert!(prompt.starts_with("You are a Sales Assistant AI prototype"));
        assert!(prompt.contains("1. Company Strategy:"));
        assert!(prompt.contains("2. Competitor Mentions:"));
        assert!(prompt.contains("3. Leadership Information:"));
        assert!(prompt.contains("4. Product/Strategy Summary:"));
        assert!(prompt.contains("5. References:"));
        assert!(prompt.contains("Constraints:"));
    }

    #[test]
    fn prompt_leaves_empty_fields_blank() {
        let form = SalesForm {
            product_name: "Acme Widget".to_string(),
            company_url: "acme.com".to_string(),
            ..SalesForm::default()
        };
        let prompt = render_insights_prompt(&form);
        assert!(prompt.contains("3. Product Category: \n"));
        assert!(prompt.contains("4. Competitors: \n"));
    }
}
