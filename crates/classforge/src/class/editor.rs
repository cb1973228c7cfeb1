//! Interactive editing session
//!
//! The [`Editor`] is the single owner of the diagram and of the UI state
//! around it: the currently selected element and the classes picked as
//! relation endpoints. Event handlers receive it by `&mut` reference.

use tracing::{debug, trace};

use crate::core::{DiagramError, ElementId, Generator, RelationKind};

use super::command::{Command, CommandOutcome};
use super::database::ClassDiagram;
use super::form::ClassForm;
use super::generator::JavaGenerator;

/// Number of picked classes needed to draw a relation
const ENDPOINT_SLOTS: usize = 2;

/// Diagram plus selection state
#[derive(Debug, Clone, Default)]
pub struct Editor {
    diagram: ClassDiagram,
    generator: JavaGenerator,
    selected: Option<ElementId>,
    // Oldest first; becomes (source, target)
    picked: Vec<ElementId>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_generator(generator: JavaGenerator) -> Self {
        Self {
            generator,
            ..Self::default()
        }
    }

    pub fn diagram(&self) -> &ClassDiagram {
        &self.diagram
    }

    /// Currently selected class or relation
    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    /// Select an element, as when the user clicks it
    ///
    /// Selecting a class also picks it as a relation endpoint; the two most
    /// recently picked classes become (source, target). Unknown ids are
    /// ignored.
    pub fn select(&mut self, id: ElementId) -> bool {
        if !self.diagram.contains(id) {
            trace!(%id, "Select ignored, no such element");
            return false;
        }
        self.selected = Some(id);

        if self.diagram.get_node(id).is_some() {
            self.picked.retain(|&picked| picked != id);
            self.picked.push(id);
            if self.picked.len() > ENDPOINT_SLOTS {
                self.picked.remove(0);
            }
        }
        debug!(%id, picked = self.picked.len(), "Selected element");
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.picked.clear();
    }

    /// The picked (source, target) pair, if both classes still exist
    pub fn picked_endpoints(&self) -> Option<(ElementId, ElementId)> {
        match self.picked.as_slice() {
            [source, target]
                if self.diagram.get_node(*source).is_some()
                    && self.diagram.get_node(*target).is_some() =>
            {
                Some((*source, *target))
            }
            _ => None,
        }
    }

    /// Apply a command and keep the selection consistent with it
    pub fn dispatch(&mut self, command: Command) -> Result<CommandOutcome, DiagramError> {
        let outcome = self.diagram.apply(command)?;
        if let CommandOutcome::Deleted { id, removed: true } = outcome {
            self.forget(id);
        }
        Ok(outcome)
    }

    /// Handle a submitted "add class" form
    pub fn submit_class_form(&mut self, form: ClassForm) -> ElementId {
        let (attributes, methods) = (form.attributes(), form.methods());
        self.diagram.add_class(form.name, attributes, methods).id()
    }

    /// Handle a relation palette button
    ///
    /// Uses the picked endpoints when two live classes are picked, and the
    /// first-two fallback otherwise.
    pub fn add_relation(&mut self, kind: RelationKind) -> Result<ElementId, DiagramError> {
        let relation = match self.picked_endpoints() {
            Some((source, target)) => self.diagram.add_relation_between(kind, source, target)?,
            None => self.diagram.add_relation(kind)?,
        };
        Ok(relation.id())
    }

    /// Handle the delete palette button
    ///
    /// Deletes the selected element if it still exists. The selection is
    /// cleared either way.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selected.take() else {
            trace!("Delete ignored, nothing selected");
            return false;
        };
        let removed = self.diagram.delete_element(id);
        self.forget(id);
        removed
    }

    fn forget(&mut self, id: ElementId) {
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.picked.retain(|&picked| picked != id);
    }

    /// Generate code for the current diagram
    pub fn generate(&self) -> String {
        self.generator.generate(&self.diagram)
    }
}
