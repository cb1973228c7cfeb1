//! Command scripts
//!
//! A script stands in for the interactive canvas: each line is one user
//! action replayed against an [`Editor`].
//!
//! ```text
//! # comment
//! class Person | age; name | getAge
//! class Student
//! select Student
//! select Person
//! relation generalization
//! relation association e1 e2
//! delete e3
//! ```
//!
//! Elements are referenced by id (`e<N>`, digits only) or by class name.
//! A token in id form is always an id, even if a class carries that name.
//!
//! Class names and descriptors are trimmed. `|` separates sections and `;`
//! separates descriptors, so neither can appear inside a name or member.
//! Relation endpoints are split on whitespace, so a class whose name has
//! spaces can only be related through its id or by selection.

use anyhow::{anyhow, bail, Context, Result};
use tracing::{debug, span, Level};

use classforge::class::{ClassForm, Command, Editor};
use classforge::core::{ElementId, RelationKind};

/// Reference to an element: an `e<N>` id or a class name
///
/// Id form takes precedence over names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementRef {
    Id(ElementId),
    Name(String),
}

impl ElementRef {
    fn parse(token: &str) -> Self {
        match token.parse::<ElementId>() {
            Ok(id) => ElementRef::Id(id),
            Err(_) => ElementRef::Name(token.to_string()),
        }
    }

    /// Ids pass through unchecked; names must match a live class
    fn resolve(&self, editor: &Editor) -> Result<ElementId> {
        match self {
            ElementRef::Id(id) => Ok(*id),
            ElementRef::Name(name) => editor
                .diagram()
                .find_node_by_name(name)
                .map(|node| node.id())
                .ok_or_else(|| anyhow!("No class named '{}'", name)),
        }
    }
}

/// One parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Class(ClassForm),
    Relation {
        kind: RelationKind,
        endpoints: Option<(ElementRef, ElementRef)>,
    },
    Select(ElementRef),
    Delete(Option<ElementRef>),
}

/// `a; b ;c` becomes the form text `a\nb\nc`
fn descriptor_text(section: Option<&str>) -> String {
    match section.map(str::trim) {
        None | Some("") => String::new(),
        Some(section) => section
            .split(';')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn parse_class(rest: &str) -> Action {
    let mut sections = rest.splitn(3, '|');
    let name = sections.next().unwrap_or_default().trim();
    let attributes = descriptor_text(sections.next());
    let methods = descriptor_text(sections.next());
    Action::Class(ClassForm::new(name, attributes, methods))
}

fn parse_relation(rest: &str) -> Result<Action> {
    let tokens: Vec<_> = rest.split_whitespace().collect();
    let (kind, endpoints) = match tokens.as_slice() {
        [kind] => (kind, None),
        [kind, source, target] => (
            kind,
            Some((ElementRef::parse(source), ElementRef::parse(target))),
        ),
        [] => bail!("relation needs a kind"),
        _ => bail!("relation takes a kind and either zero or two endpoints"),
    };
    Ok(Action::Relation {
        kind: kind.parse()?,
        endpoints,
    })
}

/// Parse a single non-empty, non-comment line
pub fn parse_line(line: &str) -> Result<Action> {
    let line = line.trim();
    let (keyword, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match keyword {
        "class" => Ok(parse_class(rest)),
        "relation" => parse_relation(rest),
        "select" if !rest.is_empty() => Ok(Action::Select(ElementRef::parse(rest))),
        "select" => bail!("select needs an element"),
        "delete" if rest.is_empty() => Ok(Action::Delete(None)),
        "delete" => Ok(Action::Delete(Some(ElementRef::parse(rest)))),
        other => bail!("Unknown command '{}'", other),
    }
}

/// Parse a whole script into numbered actions, skipping blanks and comments
pub fn parse_script(text: &str) -> Result<Vec<(usize, Action)>> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| {
            parse_line(line)
                .map(|action| (number, action))
                .with_context(|| format!("line {}", number))
        })
        .collect()
}

/// Apply one action to the editor
pub fn apply(editor: &mut Editor, action: &Action) -> Result<()> {
    match action {
        Action::Class(form) => {
            editor.submit_class_form(form.clone());
        }
        Action::Relation {
            kind,
            endpoints: Some((source, target)),
        } => {
            let command = Command::relate(*kind, source.resolve(editor)?, target.resolve(editor)?);
            editor.dispatch(command)?;
        }
        Action::Relation {
            kind,
            endpoints: None,
        } => {
            editor.add_relation(*kind)?;
        }
        Action::Select(target) => {
            let id = target.resolve(editor)?;
            if !editor.select(id) {
                bail!("No element {}", id);
            }
        }
        Action::Delete(Some(target)) => {
            let id = target.resolve(editor)?;
            editor.dispatch(Command::delete(id))?;
        }
        Action::Delete(None) => {
            editor.delete_selected();
        }
    }
    Ok(())
}

/// Parse and replay a script, stopping at the first failing line
pub fn run_script(editor: &mut Editor, text: &str) -> Result<()> {
    let actions = parse_script(text)?;
    let script_span = span!(Level::INFO, "run_script", actions = actions.len());
    let _enter = script_span.enter();

    for (number, action) in &actions {
        debug!(line = number, ?action, "Applying script line");
        apply(editor, action).with_context(|| format!("line {}", number))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use classforge::core::DiagramError;

    #[test]
    fn test_parse_class_sections() {
        assert_eq!(
            parse_line("class Person | age; name | getAge").unwrap(),
            Action::Class(ClassForm::new("Person", "age\nname", "getAge"))
        );
        assert_eq!(
            parse_line("class Empty").unwrap(),
            Action::Class(ClassForm::new("Empty", "", ""))
        );
        assert_eq!(
            parse_line("class").unwrap(),
            Action::Class(ClassForm::new("", "", ""))
        );
    }

    #[test]
    fn test_parse_relation() {
        assert_eq!(
            parse_line("relation composition").unwrap(),
            Action::Relation {
                kind: RelationKind::Composition,
                endpoints: None
            }
        );
        assert_eq!(
            parse_line("relation dependency e1 Person").unwrap(),
            Action::Relation {
                kind: RelationKind::Dependency,
                endpoints: Some((
                    ElementRef::Id(ElementId::new(1)),
                    ElementRef::Name("Person".to_string())
                ))
            }
        );
        assert!(parse_line("relation").is_err());
        assert!(parse_line("relation association e1").is_err());
        assert!(parse_line("relation friendship").is_err());
    }

    #[test]
    fn test_parse_select_and_delete() {
        assert_eq!(
            parse_line("select e4").unwrap(),
            Action::Select(ElementRef::Id(ElementId::new(4)))
        );
        assert_eq!(parse_line("delete").unwrap(), Action::Delete(None));
        assert!(parse_line("select").is_err());
        assert!(parse_line("frobnicate x").is_err());
    }

    #[test]
    fn test_parse_script_skips_comments_and_reports_line() {
        let err = parse_script("# header\n\nclass A\nbogus\n").unwrap_err();
        assert!(format!("{:#}", err).contains("line 4"));

        let actions = parse_script("# only\nclass A\n  \nclass B").unwrap();
        let numbers: Vec<_> = actions.iter().map(|(n, _)| *n).collect();
        assert_eq!(numbers, vec![2, 4]);
    }

    #[test]
    fn test_run_script_generates() {
        let mut editor = Editor::new();
        run_script(
            &mut editor,
            "class Animal | | eat\nclass Dog | breed\nselect Dog\nselect Animal\nrelation generalization\n",
        )
        .unwrap();

        let diagram = editor.diagram();
        assert_eq!(diagram.node_count(), 2);
        let relation = diagram.relations().next().unwrap();
        assert_eq!(relation.source(), diagram.find_node_by_name("Dog").unwrap().id());
        assert!(editor.generate().contains("public class Dog {\n    private String breed;\n}\n"));
    }

    #[test]
    fn test_run_script_insufficient_elements() {
        let mut editor = Editor::new();
        let err = run_script(&mut editor, "class A\nrelation association\n").unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
        assert!(matches!(
            err.downcast_ref::<DiagramError>(),
            Some(DiagramError::InsufficientElements { .. })
        ));
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut editor = Editor::new();
        run_script(&mut editor, "class A\ndelete e99\ndelete\n").unwrap();
        assert_eq!(editor.diagram().node_count(), 1);
    }

    #[test]
    fn test_id_form_wins_over_class_name() {
        assert_eq!(
            parse_line("select e05").unwrap(),
            Action::Select(ElementRef::Name("e05".to_string()))
        );
        assert_eq!(
            parse_line("select e+2").unwrap(),
            Action::Select(ElementRef::Name("e+2".to_string()))
        );

        let mut editor = Editor::new();
        run_script(&mut editor, "class A\nclass e1\nclass e05\nselect e1\n").unwrap();
        let a = editor.diagram().find_node_by_name("A").unwrap().id();
        assert_eq!(editor.selected(), Some(a));

        run_script(&mut editor, "select e05\n").unwrap();
        let padded = editor.diagram().find_node_by_name("e05").unwrap().id();
        assert_eq!(editor.selected(), Some(padded));
    }

    #[test]
    fn test_unknown_name_is_error() {
        let mut editor = Editor::new();
        let err = run_script(&mut editor, "class A\nselect Ghost\n").unwrap_err();
        assert!(format!("{:#}", err).contains("No class named 'Ghost'"));
    }
}
