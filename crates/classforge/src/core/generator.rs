//! Core generator trait for source output
//!
//! This trait defines the interface for turning diagram data into source
//! text. Generation is total: every database produces output.

use super::Database;

/// Core trait for code generators
///
/// # Example
/// ```
/// use classforge::core::Generator;
/// use classforge::class::{ClassDiagram, JavaGenerator};
///
/// let mut diagram = ClassDiagram::new();
/// diagram.add_class("Point", vec!["x".into()], vec![]);
///
/// let generator = JavaGenerator::new();
/// let output = generator.generate(&diagram);
/// assert!(output.contains("public class Point {"));
/// ```
pub trait Generator<D: Database>: Send + Sync {
    /// The output type of this generator
    type Output;

    /// Generate source from the diagram database
    fn generate(&self, database: &D) -> Self::Output;

    /// Get the name of this generator
    fn name(&self) -> &'static str;

    /// Get the target language of this generator
    fn language(&self) -> &'static str;
}
