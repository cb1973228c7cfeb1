//! Class diagram model and code generation
//!
//! The database holds the diagram, commands and the editor mutate it, and
//! the generator turns it into class skeletons.

mod command;
mod database;
mod editor;
mod form;
mod generator;

pub use command::{Command, CommandOutcome};
pub use database::{ClassDiagram, ClassNode, Relation, MIN_RELATION_ELEMENTS};
pub use editor::Editor;
pub use form::{split_descriptors, ClassForm};
pub use generator::{GeneratorConfig, JavaGenerator};
