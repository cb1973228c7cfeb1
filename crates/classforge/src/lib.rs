//! Classforge - UML class diagrams to class skeletons
//!
//! A library for building UML class diagrams (classes, attributes, methods
//! and typed relations) and generating Java class skeletons from them.
//!
//! # Quick Start
//!
//! ```rust
//! use classforge::class::ClassDiagram;
//!
//! let mut diagram = ClassDiagram::new();
//! diagram.add_class("Person", vec!["age".into()], vec!["getAge".into()]);
//!
//! let java = classforge::generate(&diagram);
//! assert!(java.contains("private String age;"));
//! assert!(java.contains("public void getAge() {}"));
//! ```
//!
//! # Driving the model from a UI
//!
//! User actions map onto [`class::Command`] values or [`class::Editor`]
//! handlers, which own the selection state:
//!
//! ```rust
//! use classforge::prelude::*;
//!
//! let mut editor = Editor::new();
//! let animal = editor.submit_class_form(ClassForm::new("Animal", "", "eat"));
//! let dog = editor.submit_class_form(ClassForm::new("Dog", "breed", ""));
//!
//! // Pick the endpoints, then press the relation button
//! editor.select(dog);
//! editor.select(animal);
//! let rel = editor.add_relation(RelationKind::Generalization).unwrap();
//!
//! let relation = editor.diagram().get_relation(rel).unwrap();
//! assert_eq!(relation.source(), dog);
//! assert_eq!(relation.target(), animal);
//! ```

pub mod class;
pub mod core;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::class::{
        ClassDiagram, ClassForm, ClassNode, Command, CommandOutcome, Editor, GeneratorConfig,
        JavaGenerator, Relation,
    };
    pub use crate::core::{
        Database, DiagramError, ElementId, Generator, RelationKind, Visibility,
    };
}

/// Generate Java class skeletons with the default configuration
///
/// One `public class` block per class, in insertion order, each followed by
/// a blank line.
///
/// # Example
/// ```rust
/// use classforge::class::ClassDiagram;
///
/// let mut diagram = ClassDiagram::new();
/// diagram.add_class("Empty", vec![], vec![]);
/// assert_eq!(classforge::generate(&diagram), "public class Empty {\n}\n\n");
/// ```
pub fn generate(diagram: &class::ClassDiagram) -> String {
    use crate::core::Generator as _;

    class::JavaGenerator::new().generate(diagram)
}

/// Build a diagram by applying commands in order
///
/// Stops at the first failing command.
///
/// # Example
/// ```rust
/// use classforge::prelude::*;
///
/// let diagram = classforge::build(vec![
///     Command::add_class("A", vec![], vec![]),
///     Command::relate_fallback(RelationKind::Association),
/// ]);
/// assert!(matches!(
///     diagram,
///     Err(DiagramError::InsufficientElements { .. })
/// ));
/// ```
pub fn build(
    commands: impl IntoIterator<Item = class::Command>,
) -> Result<class::ClassDiagram, DiagramError> {
    let mut diagram = class::ClassDiagram::new();
    for command in commands {
        diagram.apply(command)?;
    }
    Ok(diagram)
}
