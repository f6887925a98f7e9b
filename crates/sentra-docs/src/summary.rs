//! Plain-language summary generation.
//!
//! Deterministic template composition over already-extracted facts, not a
//! model. Clauses are conditionally included: a missing fact type omits
//! its clause entirely.

use handlebars::Handlebars;
use lazy_static::lazy_static;
use sentra_core::ExtractedData;
use serde_json::{json, Value};

/// Fixed lead sentence; also the fallback if rendering ever fails.
const SUMMARY_LEAD: &str = "This document appears to be a legal agreement. ";

const SUMMARY_TEMPLATE: &str = "This document appears to be a legal agreement. \
{{#if parties}}It involves parties including {{parties}}. {{/if}}\
{{#if first_date}}Key dates mentioned include {{first_date}}. {{/if}}\
{{#if terms}}The document contains terms related to {{terms}}. {{/if}}\
{{#if key_sentence}}Key content: {{key_sentence}}.{{/if}}";

/// A sentence must be longer than this to qualify as "key content".
const MIN_SENTENCE_CHARS: usize = 20;

lazy_static! {
    static ref RENDERER: Handlebars<'static> = {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        // Summaries are plain text, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars
            .register_template_string("summary", SUMMARY_TEMPLATE)
            .unwrap();
        handlebars
    };
}

/// Compose a summary from the source text and its extracted facts.
pub fn summarize(text: &str, extracted: &ExtractedData) -> String {
    let parties = join_leading(&extracted.names, 2, " and ");
    let first_date = extracted.dates.first().cloned();
    let terms = join_leading(&extracted.terms, 3, ", ");
    let key_sentence = first_substantial_sentence(text);

    let data = json!({
        "parties": opt(parties),
        "first_date": opt(first_date),
        "terms": opt(terms),
        "key_sentence": opt(key_sentence),
    });

    RENDERER
        .render("summary", &data)
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "summary template failed to render");
            SUMMARY_LEAD.to_string()
        })
}

/// First sentence longer than the minimum, split on `.`/`!`/`?`.
fn first_substantial_sentence(text: &str) -> Option<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .find(|sentence| sentence.len() > MIN_SENTENCE_CHARS)
        .map(str::to_string)
}

fn join_leading(items: &[String], take: usize, separator: &str) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    Some(
        items
            .iter()
            .take(take)
            .cloned()
            .collect::<Vec<_>>()
            .join(separator),
    )
}

fn opt(value: Option<String>) -> Value {
    value.map(Value::String).unwrap_or(Value::Null)
}
