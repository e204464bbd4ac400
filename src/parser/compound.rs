//! Record builder: one `compounddef` element → one `Compound`.
//!
//! Builds the record exactly as written — reference names stay verbatim and
//! unresolved. Resolution runs later, once every unit has been built, because
//! a referenced compound may live in a file processed after this one.

use anyhow::{anyhow, Context, Result};
use sxd_document::dom::Element;

use super::desc::{self, inner_text};
use super::{child_element, child_elements};
use crate::ancestry::AncestryNode;
use crate::model::{Compound, Kind};

/// Build a compound record from a `compounddef` element.
pub fn build(def: Element) -> Result<Compound> {
    let id = def
        .attribute_value("id")
        .ok_or_else(|| anyhow!("compounddef has no id attribute"))?
        .to_string();
    let kind: Kind = def
        .attribute_value("kind")
        .unwrap_or_default()
        .parse()
        .with_context(|| format!("compound {id}"))?;

    let mut c = Compound {
        id,
        kind,
        ..Default::default()
    };

    for child in child_elements(def) {
        match child.name().local_part() {
            // Normalize the source scope separator to the dotted form.
            "compoundname" => c.full_name = inner_text(child).replace("::", "."),
            "basecompoundref" => c.base_refs.push(inner_text(child)),
            "derivedcompoundref" => c.derived_refs.push(inner_text(child)),
            "briefdescription" => c.short_desc = desc::reduce(child)?,
            "detaileddescription" => c.long_desc = desc::reduce(child)?,
            "inheritancegraph" => build_ancestry(child, &mut c)?,
            "sectiondef" => build_members(child, &mut c)?,
            _ => {}
        }
    }

    Ok(c)
}

/// Fold an `inheritancegraph` element into the unit's ancestry graph.
///
/// Node ids are scoped to this unit. A `childnode` with a refid that parses
/// as an integer names the immediate ancestor; anything else means root.
fn build_ancestry(graph: Element, c: &mut Compound) -> Result<()> {
    for node in child_elements(graph) {
        let id: u32 = node
            .attribute_value("id")
            .unwrap_or_default()
            .parse()
            .with_context(|| format!("inheritance node in compound {}", c.id))?;
        let label = child_element(node, "label")
            .map(inner_text)
            .unwrap_or_default();
        let name = label.rsplit('.').next().unwrap_or_default().to_string();
        let ancestor = child_element(node, "childnode")
            .and_then(|cn| cn.attribute_value("refid"))
            .and_then(|refid| refid.parse().ok());

        c.ancestry.insert(AncestryNode { id, name, ancestor });
    }
    Ok(())
}

/// Build member compounds from a `sectiondef` element.
///
/// Members with a visibility other than public are dropped; a member with no
/// visibility attribute counts as public and is kept.
fn build_members(section: Element, parent: &mut Compound) -> Result<()> {
    for member in child_elements(section) {
        let kind: Kind = member
            .attribute_value("kind")
            .unwrap_or_default()
            .parse()
            .with_context(|| format!("member of compound {}", parent.id))?;
        if member.attribute_value("prot").is_some_and(|p| p != "public") {
            continue;
        }

        let mut m = Compound {
            kind,
            ..Default::default()
        };
        for field in child_elements(member) {
            match field.name().local_part() {
                "type" => m.type_name = last_token(&inner_text(field)),
                "definition" => m.definition = inner_text(field),
                "name" => m.full_name = inner_text(field),
                "argsstring" => m.args_string = inner_text(field),
                "location" => {
                    m.location = field.attribute_value("file").unwrap_or_default().to_string();
                    m.body_start = parse_line(field.attribute_value("bodystart"));
                    m.body_end = parse_line(field.attribute_value("bodyend"));
                }
                "briefdescription" => m.short_desc = desc::reduce(field)?,
                "detaileddescription" => m.long_desc = desc::reduce(field)?,
                _ => {}
            }
        }
        parent.members.push(m);
    }
    Ok(())
}

/// Optional line-number attribute: absent or non-numeric defaults to 0,
/// meaning "no line range". Not a diagnostic.
fn parse_line(value: Option<&str>) -> u32 {
    value.and_then(|v| v.parse().ok()).unwrap_or(0)
}

/// Last whitespace-separated token; strips leading modifiers and qualifiers
/// from a declared type like `static override string`.
fn last_token(s: &str) -> String {
    s.split_whitespace().last().unwrap_or_default().to_string()
}
