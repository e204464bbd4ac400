//! Data model for parsed documentation metadata — format-agnostic.

use std::str::FromStr;
use thiserror::Error;

use crate::ancestry::AncestryGraph;

/// Domain errors that abort a run. Unresolved name references are *not* in
/// this list — those are recoverable diagnostics, see `resolve`.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unrecognized compound kind: {0}")]
    UnrecognizedKind(String),
    #[error("inheritance graph cycle at node {0}")]
    AncestryCycle(u32),
}

/// What a compound documents. Top-level units use the type-like kinds;
/// members use Property, Function, Event, and Variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Class,
    Interface,
    Namespace,
    Struct,
    Enum,
    File,
    Dir,
    Property,
    Function,
    Event,
    Variable,
    Page,
}

impl FromStr for Kind {
    type Err = ModelError;

    /// Case-insensitive match against the known kind names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "class" => Ok(Kind::Class),
            "interface" => Ok(Kind::Interface),
            "namespace" => Ok(Kind::Namespace),
            "struct" => Ok(Kind::Struct),
            "enum" => Ok(Kind::Enum),
            "file" => Ok(Kind::File),
            "dir" => Ok(Kind::Dir),
            "property" => Ok(Kind::Property),
            "function" => Ok(Kind::Function),
            "event" => Ok(Kind::Event),
            "variable" => Ok(Kind::Variable),
            "page" => Ok(Kind::Page),
            _ => Err(ModelError::UnrecognizedKind(s.to_string())),
        }
    }
}

/// One documented construct: a type-like unit or a member of one.
///
/// Base and derived references are kept verbatim as written in the source
/// (order preserved, duplicates preserved); turning them into links is the
/// resolver's job and only runs once the whole set is built.
#[derive(Debug, Default)]
pub struct Compound {
    /// Source-assigned identifier, unique across the whole set.
    pub id: String,
    pub kind: Kind,
    /// Fully-qualified dotted name. For members this is the plain member name.
    pub full_name: String,
    pub short_desc: String,
    pub long_desc: String,
    pub base_refs: Vec<String>,
    pub derived_refs: Vec<String>,
    /// Members owned exclusively by this compound; never exist independently.
    pub members: Vec<Compound>,
    /// Auxiliary ancestry description embedded in this unit. Empty for members.
    pub ancestry: AncestryGraph,

    // Member-only fields. Definition and location are carried for tooling
    // even though the markdown tables do not show them.
    /// Declared type with leading modifiers stripped (last whitespace token).
    pub type_name: String,
    #[allow(dead_code)]
    pub definition: String,
    pub args_string: String,
    /// Source file path as written in the metadata.
    #[allow(dead_code)]
    pub location: String,
    /// Start/end lines of the body; 0 means no line range.
    #[allow(dead_code)]
    pub body_start: u32,
    #[allow(dead_code)]
    pub body_end: u32,
}

impl Compound {
    /// Last dot-separated segment of the fully-qualified name.
    pub fn simple_name(&self) -> &str {
        self.full_name.rsplit('.').next().unwrap_or(&self.full_name)
    }

    /// Everything before the last dot; empty when the name has no dot.
    pub fn namespace(&self) -> &str {
        match self.full_name.rsplit_once('.') {
            Some((ns, _)) => ns,
            None => "",
        }
    }

    /// A member is a constructor when it is a function named after its
    /// owning type.
    pub fn is_constructor_of(&self, owner: &Compound) -> bool {
        self.kind == Kind::Function && self.full_name == owner.simple_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_case_insensitive() {
        assert_eq!("class".parse::<Kind>().unwrap(), Kind::Class);
        assert_eq!("Interface".parse::<Kind>().unwrap(), Kind::Interface);
        assert_eq!("ENUM".parse::<Kind>().unwrap(), Kind::Enum);
    }

    #[test]
    fn kind_unknown_is_error() {
        let err = "delegate".parse::<Kind>().unwrap_err();
        assert!(err.to_string().contains("delegate"));
    }

    #[test]
    fn simple_name_is_last_segment() {
        let c = Compound {
            full_name: "Acme.Widgets.Button".to_string(),
            ..Default::default()
        };
        assert_eq!(c.simple_name(), "Button");
        assert_eq!(c.namespace(), "Acme.Widgets");
    }

    #[test]
    fn namespace_empty_without_dot() {
        let c = Compound {
            full_name: "Button".to_string(),
            ..Default::default()
        };
        assert_eq!(c.simple_name(), "Button");
        assert_eq!(c.namespace(), "");
    }

    #[test]
    fn namespace_plus_simple_name_round_trips() {
        let c = Compound {
            full_name: "A.B.C".to_string(),
            ..Default::default()
        };
        assert_eq!(format!("{}.{}", c.namespace(), c.simple_name()), c.full_name);
    }

    #[test]
    fn constructor_is_function_named_after_owner() {
        let owner = Compound {
            full_name: "Acme.Button".to_string(),
            ..Default::default()
        };
        let ctor = Compound {
            kind: Kind::Function,
            full_name: "Button".to_string(),
            ..Default::default()
        };
        let method = Compound {
            kind: Kind::Function,
            full_name: "Click".to_string(),
            ..Default::default()
        };
        let prop = Compound {
            kind: Kind::Property,
            full_name: "Button".to_string(),
            ..Default::default()
        };
        assert!(ctor.is_constructor_of(&owner));
        assert!(!method.is_constructor_of(&owner));
        assert!(!prop.is_constructor_of(&owner));
    }
}
