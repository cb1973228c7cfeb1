//! Property tests for the diagram model and generator

use classforge::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    AddClass(String),
    Relate(RelationKind),
    DeleteNth(usize),
    DeleteUnknown,
}

fn kind_strategy() -> impl Strategy<Value = RelationKind> {
    prop::sample::select(RelationKind::ALL.to_vec())
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => "[A-Za-z]{0,8}".prop_map(Op::AddClass),
        2 => kind_strategy().prop_map(Op::Relate),
        1 => (0usize..8).prop_map(Op::DeleteNth),
        1 => Just(Op::DeleteUnknown),
    ]
}

/// Replays ops, returning the diagram and the names of live classes in order
fn replay(ops: &[Op]) -> (ClassDiagram, Vec<String>) {
    let mut diagram = ClassDiagram::new();
    let mut live: Vec<(ElementId, String)> = Vec::new();

    for op in ops {
        match op {
            Op::AddClass(name) => {
                let id = diagram.add_class(name.clone(), vec![], vec![]).id();
                live.push((id, name.clone()));
            }
            Op::Relate(kind) => {
                let before = diagram.node_count();
                let result = diagram.add_relation(*kind);
                assert_eq!(result.is_err(), before < 2);
            }
            Op::DeleteNth(n) => {
                if *n < live.len() {
                    let (id, _) = live.remove(*n);
                    assert!(diagram.delete_element(id));
                }
            }
            Op::DeleteUnknown => {
                let nodes = diagram.node_count();
                let relations = diagram.relation_count();
                assert!(!diagram.delete_element(ElementId::new(u64::MAX)));
                assert_eq!(diagram.node_count(), nodes);
                assert_eq!(diagram.relation_count(), relations);
            }
        }
    }

    (diagram, live.into_iter().map(|(_, name)| name).collect())
}

proptest! {
    #[test]
    fn generation_is_deterministic(ops in prop::collection::vec(op_strategy(), 0..30)) {
        let (diagram, _) = replay(&ops);
        prop_assert_eq!(classforge::generate(&diagram), classforge::generate(&diagram));
    }

    #[test]
    fn one_block_per_live_class_in_order(ops in prop::collection::vec(op_strategy(), 0..30)) {
        let (diagram, live) = replay(&ops);
        let blocks = JavaGenerator::new().generate_blocks(&diagram);

        prop_assert_eq!(blocks.len(), live.len());
        for (block, name) in blocks.iter().zip(&live) {
            let header = format!("public class {} {{\n", name);
            prop_assert!(block.starts_with(&header));
            prop_assert!(block.ends_with("}\n"), "block does not end with closing brace: {:?}", block);
        }
    }

    #[test]
    fn relation_fails_iff_fewer_than_two(count in 0usize..5, kind in kind_strategy()) {
        let mut diagram = ClassDiagram::new();
        for i in 0..count {
            diagram.add_class(format!("C{}", i), vec![], vec![]);
        }
        let ids: Vec<_> = diagram.nodes().map(ClassNode::id).collect();
        let result = diagram.add_relation(kind);
        if count < 2 {
            prop_assert_eq!(
                result.unwrap_err(),
                DiagramError::insufficient_elements(2, count)
            );
        } else {
            let relation = *result.unwrap();
            prop_assert_eq!(relation.source(), ids[0]);
            prop_assert_eq!(relation.target(), ids[1]);
        }
    }

    #[test]
    fn members_emitted_verbatim(
        attributes in prop::collection::vec("[a-z ]{0,6}", 0..5),
        methods in prop::collection::vec("[a-z]{0,6}", 0..5),
    ) {
        let mut diagram = ClassDiagram::new();
        diagram.add_class("X", attributes.clone(), methods.clone());
        let output = classforge::generate(&diagram);

        let expected_lines = 1 + attributes.len() + methods.len() + 1;
        prop_assert_eq!(output.lines().count(), expected_lines + 1);
        for (line, attribute) in output.lines().skip(1).zip(&attributes) {
            prop_assert_eq!(line, format!("    private String {};", attribute));
        }
        for (line, method) in output.lines().skip(1 + attributes.len()).zip(&methods) {
            prop_assert_eq!(line, format!("    public void {}() {{}}", method));
        }
    }
}
