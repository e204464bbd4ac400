//! Rich-text description reducer.
//!
//! Description blocks are paragraphs mixing plain runs with itemized lists.
//! List items come out as `* <item>` lines and each paragraph ends with a
//! newline. The upstream format guarantees well-formed blocks, so anything
//! other than a paragraph element at block level is fatal.

use anyhow::{bail, Result};
use sxd_document::dom::{ChildOfElement, Element};

/// Reduce a description block to plain text.
pub fn reduce(block: Element) -> Result<String> {
    let mut text = String::new();
    for child in block.children() {
        let para = match child {
            ChildOfElement::Element(e) => e,
            // Inter-paragraph whitespace.
            _ => continue,
        };
        if para.name().local_part() != "para" {
            bail!("unexpected tag in description: {}", para.name().local_part());
        }
        for run in para.children() {
            match run {
                ChildOfElement::Text(t) => text.push_str(t.text()),
                ChildOfElement::Element(e) if e.name().local_part() == "itemizedlist" => {
                    text.push('\n');
                    for item in super::child_elements(e) {
                        text.push_str("* ");
                        text.push_str(&inner_text(item));
                        text.push('\n');
                    }
                }
                ChildOfElement::Element(e) => text.push_str(&inner_text(e)),
                _ => {}
            }
        }
        text.push('\n');
    }
    Ok(text)
}

/// Concatenated text content of an element and all its descendants.
pub(crate) fn inner_text(element: Element) -> String {
    let mut out = String::new();
    collect_text(element, &mut out);
    out
}

fn collect_text(element: Element, out: &mut String) {
    for child in element.children() {
        match child {
            ChildOfElement::Text(t) => out.push_str(t.text()),
            ChildOfElement::Element(e) => collect_text(e, out),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sxd_document::dom::ChildOfRoot;
    use sxd_document::parser;

    fn reduce_str(xml: &str) -> Result<String> {
        let package = parser::parse(xml).unwrap();
        let document = package.as_document();
        let root = document
            .root()
            .children()
            .into_iter()
            .find_map(|c| match c {
                ChildOfRoot::Element(e) => Some(e),
                _ => None,
            })
            .unwrap();
        reduce(root)
    }

    #[test]
    fn empty_block_is_empty() {
        assert_eq!(reduce_str("<briefdescription></briefdescription>").unwrap(), "");
    }

    #[test]
    fn paragraphs_get_trailing_newlines() {
        let text =
            reduce_str("<d><para>First.</para><para>Second.</para></d>").unwrap();
        assert_eq!(text, "First.\nSecond.\n");
    }

    #[test]
    fn itemized_list_items_become_bullets() {
        let text = reduce_str(
            "<d><para>Options:<itemizedlist>\
             <listitem><para>one</para></listitem>\
             <listitem><para>two</para></listitem>\
             </itemizedlist></para></d>",
        )
        .unwrap();
        assert_eq!(text, "Options:\n* one\n* two\n\n");
    }

    #[test]
    fn inline_markup_reduces_to_its_text() {
        let text =
            reduce_str(r#"<d><para>See <ref refid="x">Button</ref> here.</para></d>"#).unwrap();
        assert_eq!(text, "See Button here.\n");
    }

    #[test]
    fn unexpected_paragraph_tag_is_fatal() {
        assert!(reduce_str("<d><table><row/></table></d>").is_err());
    }
}
