//! Class skeleton generator
//!
//! Turns a [`ClassDiagram`] into Java class skeletons, one block per class
//! in insertion order. Relations do not influence the output.

use std::fmt::Write as _;

use tracing::{debug, span, trace, Level};

use crate::core::{Generator, Visibility};

use super::database::{ClassDiagram, ClassNode};

/// Fixed defaults applied to every generated member
///
/// The defaults reproduce the classic output: `private String` fields,
/// `public void` methods and four-space indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub class_visibility: Visibility,
    pub field_visibility: Visibility,
    pub field_type: String,
    pub method_visibility: Visibility,
    pub return_type: String,
    pub indent: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            class_visibility: Visibility::Public,
            field_visibility: Visibility::Private,
            field_type: "String".to_string(),
            method_visibility: Visibility::Public,
            return_type: "void".to_string(),
            indent: "    ".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = field_type.into();
        self
    }

    pub fn with_field_visibility(mut self, visibility: Visibility) -> Self {
        self.field_visibility = visibility;
        self
    }

    pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = return_type.into();
        self
    }

    pub fn with_method_visibility(mut self, visibility: Visibility) -> Self {
        self.method_visibility = visibility;
        self
    }

    /// Indent members by `width` spaces
    pub fn with_indent(mut self, width: usize) -> Self {
        self.indent = " ".repeat(width);
        self
    }
}

/// `"public "` for keyword visibilities, nothing for package-private
fn modifier(visibility: Visibility) -> String {
    match visibility.keyword() {
        "" => String::new(),
        keyword => format!("{} ", keyword),
    }
}

/// Java class skeleton generator
#[derive(Debug, Clone, Default)]
pub struct JavaGenerator {
    config: GeneratorConfig,
}

impl JavaGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the block for a single class, ending with a newline
    pub fn generate_class(&self, node: &ClassNode) -> String {
        let cfg = &self.config;
        let mut out = String::new();

        // Names are emitted verbatim, even when empty
        let _ = writeln!(
            out,
            "{}class {} {{",
            modifier(cfg.class_visibility),
            node.name()
        );
        for attribute in node.attributes() {
            let _ = writeln!(
                out,
                "{}{}{} {};",
                cfg.indent,
                modifier(cfg.field_visibility),
                cfg.field_type,
                attribute
            );
        }
        for method in node.methods() {
            let _ = writeln!(
                out,
                "{}{}{} {}() {{}}",
                cfg.indent,
                modifier(cfg.method_visibility),
                cfg.return_type,
                method
            );
        }
        out.push_str("}\n");
        out
    }

    /// One block per class, in insertion order
    pub fn generate_blocks(&self, diagram: &ClassDiagram) -> Vec<String> {
        diagram
            .nodes()
            .map(|node| {
                trace!(id = %node.id(), name = node.name(), "Generating class");
                self.generate_class(node)
            })
            .collect()
    }
}

impl Generator<ClassDiagram> for JavaGenerator {
    type Output = String;

    /// Every block is followed by a blank line; an empty diagram yields ""
    fn generate(&self, diagram: &ClassDiagram) -> String {
        let generate_span = span!(
            Level::INFO,
            "generate_java",
            classes = diagram.node_count(),
            relations = diagram.relation_count()
        );
        let _enter = generate_span.enter();

        let mut output = String::new();
        for block in self.generate_blocks(diagram) {
            output.push_str(&block);
            output.push('\n');
        }

        debug!(bytes = output.len(), "Generation completed");
        output
    }

    fn name(&self) -> &'static str {
        "java-skeleton"
    }

    fn language(&self) -> &'static str {
        "java"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RelationKind;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_generator_metadata() {
        let generator = JavaGenerator::new();
        assert_eq!(generator.name(), "java-skeleton");
        assert_eq!(generator.language(), "java");
    }

    #[test]
    fn test_person_class() {
        let mut db = ClassDiagram::new();
        db.add_class("Person", strings(&["age", "name"]), strings(&["getAge"]));

        let output = JavaGenerator::new().generate(&db);
        assert_eq!(
            output,
            "public class Person {\n\
             \x20   private String age;\n\
             \x20   private String name;\n\
             \x20   public void getAge() {}\n\
             }\n\n"
        );
    }

    #[test]
    fn test_empty_class_has_no_members() {
        let mut db = ClassDiagram::new();
        db.add_class("Empty", vec![], vec![]);

        let blocks = JavaGenerator::new().generate_blocks(&db);
        assert_eq!(blocks, vec!["public class Empty {\n}\n".to_string()]);
    }

    #[test]
    fn test_empty_name_passes_through() {
        let mut db = ClassDiagram::new();
        db.add_class("", strings(&[""]), vec![]);

        let output = JavaGenerator::new().generate(&db);
        assert!(output.starts_with("public class  {\n"));
        assert!(output.contains("    private String ;\n"));
    }

    #[test]
    fn test_empty_diagram() {
        assert_eq!(JavaGenerator::new().generate(&ClassDiagram::new()), "");
    }

    #[test]
    fn test_relations_do_not_affect_output() {
        let mut db = ClassDiagram::new();
        db.add_class("Animal", vec![], strings(&["eat"]));
        db.add_class("Dog", vec![], vec![]);
        let before = JavaGenerator::new().generate(&db);

        db.add_relation(RelationKind::Generalization).unwrap();
        assert_eq!(JavaGenerator::new().generate(&db), before);
    }

    #[test]
    fn test_custom_config() {
        let mut db = ClassDiagram::new();
        db.add_class("Point", strings(&["x"]), strings(&["norm"]));

        let config = GeneratorConfig::new()
            .with_field_type("int")
            .with_field_visibility(Visibility::Package)
            .with_return_type("double")
            .with_method_visibility(Visibility::Protected)
            .with_indent(2);
        let output = JavaGenerator::with_config(config).generate(&db);

        assert!(output.contains("\n  int x;\n"));
        assert!(output.contains("\n  protected double norm() {}\n"));
    }
}
