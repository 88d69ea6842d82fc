//! XML -> record extraction driven by a [`TranslationTable`].

use crate::core::{Record, TranslationTable};
use crate::utils::error::{RailError, Result};
use roxmltree::{Document, Node, ParsingOptions};
use std::collections::HashMap;

/// Parse `xml` and build one [`Record`] per element named `element`.
///
/// Matching elements are collected from the whole document in document
/// order, whatever their depth. Each record carries every field of `table`.
pub fn extract_records(xml: &[u8], element: &str, table: &TranslationTable) -> Result<Vec<Record>> {
    let text = std::str::from_utf8(xml).map_err(|e| RailError::ParseError {
        message: format!("response is not valid UTF-8: {}", e),
    })?;
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, options)?;

    let records: Vec<Record> = doc
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == element)
        .map(|node| build_record(node, table))
        .collect();

    tracing::debug!("Extracted {} <{}> records", records.len(), element);
    Ok(records)
}

fn build_record(node: Node<'_, '_>, table: &TranslationTable) -> Record {
    let data = table
        .fields()
        .iter()
        .map(|(field, tag)| (field.to_string(), child_text(node, tag)))
        .collect::<HashMap<_, _>>();
    Record { data }
}

/// Text of the first child element named `tag`.
///
/// A missing child and a child without text both give `None`.
pub fn child_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == tag)
        .and_then(|child| child.text())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
