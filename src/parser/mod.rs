//! Doxygen-style XML parsing — one compound record per input file.

pub mod compound;
pub mod desc;

use anyhow::{anyhow, Result};
use sxd_document::dom::{ChildOfElement, ChildOfRoot, Element};
use sxd_document::parser;

use crate::model::Compound;

/// Parse one metadata file into a compound record.
///
/// Returns `Ok(None)` when the file carries no `compounddef` element (e.g. an
/// index file) — that is an empty unit, not an error. Malformed XML and
/// structural problems (unknown kinds, missing ids) abort the run.
pub fn parse_unit(content: &str) -> Result<Option<Compound>> {
    let package = parser::parse(content).map_err(|e| anyhow!("malformed XML: {e:?}"))?;
    let document = package.as_document();

    let root = document.root().children().into_iter().find_map(|c| match c {
        ChildOfRoot::Element(e) => Some(e),
        _ => None,
    });
    let Some(root) = root else {
        return Ok(None);
    };

    match child_element(root, "compounddef") {
        Some(def) => compound::build(def).map(Some),
        None => Ok(None),
    }
}

/// First child element with the given name.
pub(crate) fn child_element<'d>(parent: Element<'d>, name: &str) -> Option<Element<'d>> {
    parent.children().into_iter().find_map(|c| match c {
        ChildOfElement::Element(e) if e.name().local_part() == name => Some(e),
        _ => None,
    })
}

/// Child elements in document order, skipping text and comments.
pub(crate) fn child_elements(parent: Element<'_>) -> Vec<Element<'_>> {
    parent
        .children()
        .into_iter()
        .filter_map(|c| match c {
            ChildOfElement::Element(e) => Some(e),
            _ => None,
        })
        .collect()
}
