//! Diagram commands
//!
//! Every UI action that mutates the diagram is a [`Command`] value, so the
//! model can be driven and tested without any widget toolkit.

use crate::core::{DiagramError, ElementId, RelationKind};

use super::database::ClassDiagram;

/// A single mutation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a class from already-split descriptors
    AddClass {
        name: String,
        attributes: Vec<String>,
        methods: Vec<String>,
    },
    /// Create a relation; `None` endpoints select the first-two fallback
    AddRelation {
        kind: RelationKind,
        endpoints: Option<(ElementId, ElementId)>,
    },
    /// Delete a class or relation; unknown ids are ignored
    Delete { id: ElementId },
}

impl Command {
    pub fn add_class(
        name: impl Into<String>,
        attributes: Vec<String>,
        methods: Vec<String>,
    ) -> Self {
        Command::AddClass {
            name: name.into(),
            attributes,
            methods,
        }
    }

    pub fn relate(kind: RelationKind, source: ElementId, target: ElementId) -> Self {
        Command::AddRelation {
            kind,
            endpoints: Some((source, target)),
        }
    }

    pub fn relate_fallback(kind: RelationKind) -> Self {
        Command::AddRelation {
            kind,
            endpoints: None,
        }
    }

    pub fn delete(id: ElementId) -> Self {
        Command::Delete { id }
    }
}

/// What a successfully applied command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    ClassAdded(ElementId),
    RelationAdded(ElementId),
    Deleted { id: ElementId, removed: bool },
}

impl ClassDiagram {
    /// Apply one command. A failed command leaves the diagram untouched.
    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome, DiagramError> {
        match command {
            Command::AddClass {
                name,
                attributes,
                methods,
            } => Ok(CommandOutcome::ClassAdded(
                self.add_class(name, attributes, methods).id(),
            )),
            Command::AddRelation {
                kind,
                endpoints: Some((source, target)),
            } => self
                .add_relation_between(kind, source, target)
                .map(|rel| CommandOutcome::RelationAdded(rel.id())),
            Command::AddRelation {
                kind,
                endpoints: None,
            } => self
                .add_relation(kind)
                .map(|rel| CommandOutcome::RelationAdded(rel.id())),
            Command::Delete { id } => Ok(CommandOutcome::Deleted {
                id,
                removed: self.delete_element(id),
            }),
        }
    }
}
