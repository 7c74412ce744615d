//! PDF Extraction Adapter - Implementation of HandbookAnalyzer on lopdf.
//!
//! Loads the document, walks the embedded outline tree if one exists, and
//! extracts every page's text. Assembly of the result (page markers, outline
//! rendering, heuristic fallback) is delegated to the domain layer.
//!
//! lopdf is synchronous, so the actual parsing runs under `spawn_blocking`.

use async_trait::async_trait;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::domain::handbook::{HandbookExtract, OutlineEntry};
use crate::ports::{ExtractError, HandbookAnalyzer};

/// Nesting depth at which the outline walk gives up.
///
/// Real documents stay in single digits; this only guards against degenerate
/// outline trees.
const MAX_OUTLINE_DEPTH: u32 = 32;

/// lopdf-based handbook analyzer.
#[derive(Debug, Clone, Default)]
pub struct PdfHandbookAnalyzer;

impl PdfHandbookAnalyzer {
    /// Creates a new analyzer.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HandbookAnalyzer for PdfHandbookAnalyzer {
    async fn analyze(&self, path: &Path) -> Result<HandbookExtract, ExtractError> {
        let path = path.to_owned();
        tokio::task::spawn_blocking(move || analyze_blocking(&path))
            .await
            .map_err(|e| ExtractError::parse(format!("extraction task failed: {}", e)))?
    }
}

/// Runs the complete extraction for one document.
fn analyze_blocking(path: &Path) -> Result<HandbookExtract, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::not_found(path));
    }

    let document =
        Document::load(path).map_err(|e| ExtractError::parse(format!("load failed: {}", e)))?;

    let outline = read_embedded_outline(&document);
    let pages = extract_page_texts(&document)?;

    Ok(HandbookExtract::from_pages(pages, &outline))
}

/// Extracts each page's text, in page order.
fn extract_page_texts(document: &Document) -> Result<Vec<String>, ExtractError> {
    let mut pages = Vec::new();
    for page_number in document.get_pages().keys() {
        let text = document
            .extract_text(&[*page_number])
            .map_err(|e| ExtractError::parse(format!("page {}: {}", page_number, e)))?;
        pages.push(text);
    }
    Ok(pages)
}

/// Reads the document's embedded outline tree.
///
/// Returns an empty list when the document has no outline or the tree is
/// malformed; the caller falls back to heuristic scanning in that case.
fn read_embedded_outline(document: &Document) -> Vec<OutlineEntry> {
    let page_numbers: HashMap<ObjectId, u32> = document
        .get_pages()
        .iter()
        .map(|(number, id)| (*id, *number))
        .collect();

    let Ok(catalog) = document.catalog() else {
        return Vec::new();
    };
    let Ok(outlines_id) = catalog
        .get(b"Outlines")
        .and_then(|object| object.as_reference())
    else {
        return Vec::new();
    };
    let Ok(root) = document.get_dictionary(outlines_id) else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    let mut visited = HashSet::new();
    if let Ok(first) = root.get(b"First").and_then(|object| object.as_reference()) {
        walk_outline_level(
            document,
            first,
            1,
            &page_numbers,
            &mut entries,
            &mut visited,
        );
    }
    entries
}

/// Walks one sibling chain of outline items, recursing into children.
fn walk_outline_level(
    document: &Document,
    first_item: ObjectId,
    level: u32,
    page_numbers: &HashMap<ObjectId, u32>,
    entries: &mut Vec<OutlineEntry>,
    visited: &mut HashSet<ObjectId>,
) {
    if level > MAX_OUTLINE_DEPTH {
        return;
    }

    let mut current = Some(first_item);
    while let Some(item_id) = current {
        if !visited.insert(item_id) {
            break;
        }
        let Ok(item) = document.get_dictionary(item_id) else {
            break;
        };

        let title = item
            .get(b"Title")
            .ok()
            .and_then(|object| match object {
                Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
                _ => None,
            })
            .unwrap_or_default();
        let page = resolve_target_page(document, item, page_numbers).unwrap_or(0);
        entries.push(OutlineEntry::new(level, title, page));

        if let Ok(first_child) = item.get(b"First").and_then(|object| object.as_reference()) {
            walk_outline_level(
                document,
                first_child,
                level + 1,
                page_numbers,
                entries,
                visited,
            );
        }

        current = item
            .get(b"Next")
            .ok()
            .and_then(|object| object.as_reference().ok());
    }
}

/// Resolves an outline item's destination to a 1-based page number.
///
/// Handles direct `Dest` arrays and GoTo actions (`A` -> `D`). Named
/// destinations are not resolved.
fn resolve_target_page(
    document: &Document,
    item: &Dictionary,
    page_numbers: &HashMap<ObjectId, u32>,
) -> Option<u32> {
    let destination = item.get(b"Dest").ok().cloned().or_else(|| {
        let action = item.get(b"A").ok()?;
        let action_dict = match action {
            Object::Dictionary(dict) => dict.clone(),
            Object::Reference(id) => document.get_dictionary(*id).ok()?.clone(),
            _ => return None,
        };
        action_dict.get(b"D").ok().cloned()
    })?;

    let destination = match destination {
        Object::Reference(id) => document.get_object(id).ok()?.clone(),
        other => other,
    };

    match destination {
        Object::Array(elements) => elements
            .first()
            .and_then(|object| object.as_reference().ok())
            .and_then(|page_id| page_numbers.get(&page_id).copied()),
        _ => None,
    }
}

/// Decodes a PDF text string: UTF-16BE with BOM, or byte-per-char otherwise.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if bytes.starts_with(&[0xFE, 0xFF]) {
        let code_units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&code_units)
    } else {
        bytes.iter().map(|&byte| byte as char).collect()
    }
}
