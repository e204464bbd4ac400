//! Markdown output — one page per documented class plus a namespace index.

use anyhow::Result;

use crate::model::{Compound, Kind};
use crate::resolve::CompoundSet;

/// Render the documentation page for one class.
pub fn class_page(set: &CompoundSet, c: &Compound) -> Result<String> {
    let mut lines: Vec<String> = Vec::new();

    lines.push(c.short_desc.clone());
    lines.push(String::new());
    lines.push(c.long_desc.clone());
    lines.push(String::new());
    lines.push(format!("**namespace**:  `{}`", c.namespace()));
    lines.push(String::new());

    lines.push("#### Inheritance Hierarchy\n".to_string());
    lines.extend(render_hierarchy(set, c)?);
    lines.push(String::new());

    lines.push("#### Syntax\n".to_string());
    lines.push("```csharp".to_string());
    lines.push(render_declaration(set, c));
    lines.push("```".to_string());
    lines.push(String::new());

    render_member_tables(&mut lines, c);

    Ok(lines.join("\n"))
}

/// Nested list: ancestry chain from the most distant ancestor down to the
/// class itself, then its resolved derived types one level deeper.
///
/// The chain comes from the advisory ancestry graph; it augments but never
/// overrides the resolved base class shown in the syntax block.
fn render_hierarchy(set: &CompoundSet, c: &Compound) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut indent = String::new();

    for ancestor in c.ancestry.ancestors_of(c.simple_name())? {
        lines.push(format!("{indent}- {}", wiki_link(&ancestor.name)));
        indent.push_str("  ");
    }
    lines.push(format!("{indent}- `{}`", c.simple_name()));
    indent.push_str("  ");

    for derived in set.resolve_derived(c) {
        lines.push(format!("{indent}- {}", wiki_link(derived.simple_name())));
    }
    Ok(lines)
}

/// `public class X : Base, IFace, ...` — the resolved base class first when
/// there is one, otherwise the first interface takes its slot.
fn render_declaration(set: &CompoundSet, c: &Compound) -> String {
    let mut decl = format!("public class {}", c.simple_name());

    let interfaces = set.resolve_interfaces(c);
    let mut supers: Vec<&str> = Vec::new();
    if let Some(base) = set.resolve_base_class(c) {
        supers.push(base.simple_name());
    }
    supers.extend(interfaces.iter().map(|i| i.simple_name()));

    if !supers.is_empty() {
        decl.push_str(" : ");
        decl.push_str(&supers.join(", "));
    }
    decl
}

/// Member tables partitioned by kind: constructors, properties, methods,
/// events. Constructors keep source order; the rest sort by name.
fn render_member_tables(lines: &mut Vec<String>, c: &Compound) {
    lines.push("#### Constructors\n".to_string());
    lines.push("| :white_large_square: | prototype | description |".to_string());
    lines.push("| --- | --- | --- |".to_string());
    for m in c.members.iter().filter(|m| m.is_constructor_of(c)) {
        lines.push(format!(
            "| [[/images/method.jpg]] | `{} {} {}` | _{}_ |",
            m.type_name,
            m.full_name.trim(),
            m.args_string,
            m.short_desc.trim()
        ));
    }
    lines.push(String::new());

    lines.push("#### Properties\n".to_string());
    lines.push("| :white_large_square: | name | description |".to_string());
    lines.push("| --- | --- | --- |".to_string());
    for m in sorted_members(c, Kind::Property) {
        lines.push(format!(
            "| [[/images/property.jpg]] | `{}` | _{}_ |",
            m.full_name.trim(),
            m.short_desc.trim()
        ));
    }
    lines.push(String::new());

    lines.push("#### Methods\n".to_string());
    lines.push("| :white_large_square: | prototype | description |".to_string());
    lines.push("| --- | --- | --- |".to_string());
    for m in sorted_members(c, Kind::Function) {
        if m.is_constructor_of(c) {
            continue;
        }
        lines.push(format!(
            "| [[/images/method.jpg]] | `{} {}{}` | _{}_ |",
            m.type_name,
            m.full_name.trim(),
            m.args_string,
            m.short_desc.trim()
        ));
    }
    lines.push(String::new());

    lines.push("#### Events\n".to_string());
    lines.push("| :white_large_square: | name | description |".to_string());
    lines.push("| --- | --- | --- |".to_string());
    for m in sorted_members(c, Kind::Event) {
        lines.push(format!(
            "| [[/images/event.jpg]] | `{}` | _{}_ |",
            m.full_name.trim(),
            m.short_desc.trim()
        ));
    }
    lines.push(String::new());
}

fn sorted_members(c: &Compound, kind: Kind) -> Vec<&Compound> {
    let mut members: Vec<&Compound> = c.members.iter().filter(|m| m.kind == kind).collect();
    members.sort_by(|a, b| a.full_name.cmp(&b.full_name));
    members
}

/// Cross-unit index: all classes grouped by namespace.
pub fn namespace_index(set: &CompoundSet) -> String {
    let mut lines: Vec<String> = Vec::new();
    for (namespace, classes) in set.classes_by_namespace() {
        lines.push(format!("## `{namespace}` namespace\n"));
        lines.push("| class | description |".to_string());
        lines.push("| --- | --- |".to_string());
        for c in classes {
            lines.push(format!(
                "| {} | _{}_ |",
                wiki_link(c.simple_name()),
                c.short_desc.trim()
            ));
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Wiki-style page link: the page for a type is named after its simple name.
fn wiki_link(name: &str) -> String {
    format!("[`{name}`]({name})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ancestry::AncestryNode;

    fn compound(id: &str, name: &str, kind: Kind) -> Compound {
        Compound {
            id: id.to_string(),
            full_name: name.to_string(),
            kind,
            ..Default::default()
        }
    }

    fn member(name: &str, kind: Kind, type_name: &str, args: &str) -> Compound {
        Compound {
            kind,
            full_name: name.to_string(),
            type_name: type_name.to_string(),
            args_string: args.to_string(),
            ..Default::default()
        }
    }

    fn button_set() -> CompoundSet {
        let mut set = CompoundSet::default();
        set.insert(compound("c1", "Acme.Control", Kind::Class));
        set.insert(compound("i1", "Acme.IClickable", Kind::Interface));
        set.insert(compound("c3", "Acme.Toggle", Kind::Class));

        let mut button = compound("c2", "Acme.Button", Kind::Class);
        button.short_desc = "A button.\n".to_string();
        button.base_refs = vec!["Acme.Control".to_string(), "Acme.IClickable".to_string()];
        button.derived_refs = vec!["Acme.Toggle".to_string()];
        button.ancestry.insert(AncestryNode {
            id: 1,
            name: "Object".to_string(),
            ancestor: None,
        });
        button.ancestry.insert(AncestryNode {
            id: 2,
            name: "Button".to_string(),
            ancestor: Some(1),
        });
        button.members.push(member("Button", Kind::Function, "", "()"));
        button.members.push(member("Click", Kind::Function, "void", "()"));
        button.members.push(member("Caption", Kind::Property, "string", ""));
        set.insert(button);
        set
    }

    #[test]
    fn declaration_lists_base_then_interfaces() {
        let set = button_set();
        let button = set.find_by_name("Acme.Button").unwrap();
        assert_eq!(
            render_declaration(&set, button),
            "public class Button : Control, IClickable"
        );
    }

    #[test]
    fn declaration_falls_back_to_interface() {
        let mut set = CompoundSet::default();
        set.insert(compound("i1", "Acme.IClickable", Kind::Interface));
        let mut c = compound("c1", "Acme.Button", Kind::Class);
        c.base_refs = vec!["Acme.IClickable".to_string()];
        set.insert(c);

        let button = set.find_by_name("Acme.Button").unwrap();
        assert_eq!(
            render_declaration(&set, button),
            "public class Button : IClickable"
        );
    }

    #[test]
    fn hierarchy_nests_ancestors_class_and_derived() {
        let set = button_set();
        let button = set.find_by_name("Acme.Button").unwrap();
        let lines = render_hierarchy(&set, button).unwrap();
        assert_eq!(
            lines,
            [
                "- [`Object`](Object)",
                "  - `Button`",
                "    - [`Toggle`](Toggle)",
            ]
        );
    }

    #[test]
    fn page_partitions_members() {
        let set = button_set();
        let button = set.find_by_name("Acme.Button").unwrap();
        let page = class_page(&set, button).unwrap();

        assert!(page.contains("#### Constructors"));
        assert!(page.contains("` Button ()`"));
        assert!(page.contains("`void Click()`"));
        assert!(page.contains("| [[/images/property.jpg]] | `Caption` | __ |"));
        // The constructor must not repeat in the methods table.
        assert_eq!(page.matches("Button ()").count(), 1);
    }

    #[test]
    fn index_groups_by_namespace() {
        let set = button_set();
        let index = namespace_index(&set);
        assert!(index.starts_with("## `Acme` namespace"));
        assert!(index.contains("| [`Button`](Button) | _A button._ |"));
        assert!(index.contains("| [`Toggle`](Toggle) |"));
    }
}
