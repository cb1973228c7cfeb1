//! Class diagram database
//!
//! Stores class nodes and the typed relations between them, keyed by
//! [`ElementId`] in insertion order.

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::core::{Database, DiagramError, ElementId, RelationKind};

/// Number of classes that must exist before any relation can be drawn
pub const MIN_RELATION_ELEMENTS: usize = 2;

/// A class in the diagram
///
/// Content is fixed at creation; there is no in-place edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNode {
    id: ElementId,
    name: String,
    attributes: Vec<String>,
    methods: Vec<String>,
}

impl ClassNode {
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Class name, possibly empty
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw attribute descriptors, one per generated field
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Raw method descriptors, one per generated method stub
    pub fn methods(&self) -> &[String] {
        &self.methods
    }
}

/// A directed, typed reference from one class to another
///
/// Endpoints are weak: deleting a class leaves its relations in place,
/// dangling, until they are deleted themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    id: ElementId,
    kind: RelationKind,
    source: ElementId,
    target: ElementId,
}

impl Relation {
    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> RelationKind {
        self.kind
    }

    pub fn source(&self) -> ElementId {
        self.source
    }

    pub fn target(&self) -> ElementId {
        self.target
    }
}

/// Class diagram database
#[derive(Debug, Clone)]
pub struct ClassDiagram {
    nodes: IndexMap<ElementId, ClassNode>,
    relations: IndexMap<ElementId, Relation>,
    next_id: u64,
}

impl ClassDiagram {
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            relations: IndexMap::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> ElementId {
        let id = ElementId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a class at the end of the diagram. Never fails.
    pub fn add_class(
        &mut self,
        name: impl Into<String>,
        attributes: Vec<String>,
        methods: Vec<String>,
    ) -> &ClassNode {
        let id = self.allocate_id();
        let node = ClassNode {
            id,
            name: name.into(),
            attributes,
            methods,
        };
        debug!(
            %id,
            name = %node.name,
            attributes = node.attributes.len(),
            methods = node.methods.len(),
            "Added class"
        );
        self.nodes.insert(id, node);
        &self.nodes[&id]
    }

    /// Add a relation between two explicitly chosen classes
    ///
    /// Fails with [`DiagramError::InsufficientElements`] when fewer than two
    /// classes exist, and with [`DiagramError::UnknownElement`] when either
    /// endpoint is not a live class. A class may relate to itself.
    pub fn add_relation_between(
        &mut self,
        kind: RelationKind,
        source: ElementId,
        target: ElementId,
    ) -> Result<&Relation, DiagramError> {
        self.ensure_relatable()?;
        for endpoint in [source, target] {
            if !self.nodes.contains_key(&endpoint) {
                return Err(DiagramError::unknown_element(endpoint));
            }
        }
        Ok(self.insert_relation(kind, source, target))
    }

    /// Add a relation from the first class to the second class
    ///
    /// This is the positional fallback used when the caller has no
    /// endpoint selection. Prefer [`ClassDiagram::add_relation_between`].
    pub fn add_relation(&mut self, kind: RelationKind) -> Result<&Relation, DiagramError> {
        self.ensure_relatable()?;
        let mut ids = self.nodes.keys().copied();
        match (ids.next(), ids.next()) {
            (Some(source), Some(target)) => {
                warn!(
                    %kind,
                    %source,
                    %target,
                    "No endpoints selected, wiring the first two classes"
                );
                Ok(self.insert_relation(kind, source, target))
            }
            _ => Err(DiagramError::insufficient_elements(
                MIN_RELATION_ELEMENTS,
                self.nodes.len(),
            )),
        }
    }

    fn ensure_relatable(&self) -> Result<(), DiagramError> {
        if self.nodes.len() < MIN_RELATION_ELEMENTS {
            return Err(DiagramError::insufficient_elements(
                MIN_RELATION_ELEMENTS,
                self.nodes.len(),
            ));
        }
        Ok(())
    }

    fn insert_relation(
        &mut self,
        kind: RelationKind,
        source: ElementId,
        target: ElementId,
    ) -> &Relation {
        let id = self.allocate_id();
        debug!(%id, %kind, %source, %target, "Added relation");
        self.relations.insert(
            id,
            Relation {
                id,
                kind,
                source,
                target,
            },
        );
        &self.relations[&id]
    }

    /// Delete the class or relation with this id
    ///
    /// Unknown ids are ignored. Deleting a class does not delete the
    /// relations that reference it.
    pub fn delete_element(&mut self, id: ElementId) -> bool {
        if let Some(node) = self.nodes.shift_remove(&id) {
            let orphaned = self
                .relations
                .values()
                .filter(|rel| rel.source == id || rel.target == id)
                .count();
            debug!(%id, name = %node.name, orphaned, "Deleted class");
            true
        } else if self.relations.shift_remove(&id).is_some() {
            debug!(%id, "Deleted relation");
            true
        } else {
            trace!(%id, "Delete ignored, no such element");
            false
        }
    }

    /// Classes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &ClassNode> {
        self.nodes.values()
    }

    /// Relations in insertion order, dangling ones included
    pub fn relations(&self) -> impl Iterator<Item = &Relation> {
        self.relations.values()
    }

    pub fn get_node(&self, id: ElementId) -> Option<&ClassNode> {
        self.nodes.get(&id)
    }

    pub fn get_relation(&self, id: ElementId) -> Option<&Relation> {
        self.relations.get(&id)
    }

    /// Whether a class or relation with this id exists
    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains_key(&id) || self.relations.contains_key(&id)
    }

    /// First class with this exact name
    pub fn find_node_by_name(&self, name: &str) -> Option<&ClassNode> {
        self.nodes.values().find(|node| node.name == name)
    }

    /// Returns true if either endpoint of the relation no longer exists
    pub fn is_dangling(&self, relation: &Relation) -> bool {
        !self.nodes.contains_key(&relation.source) || !self.nodes.contains_key(&relation.target)
    }

    /// Relations whose endpoints both exist
    pub fn live_relations(&self) -> impl Iterator<Item = &Relation> {
        self.relations.values().filter(move |rel| !self.is_dangling(rel))
    }

    /// Relations left behind by deleted classes
    pub fn dangling_relations(&self) -> impl Iterator<Item = &Relation> {
        self.relations.values().filter(move |rel| self.is_dangling(rel))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.relations.is_empty()
    }
}

impl Default for ClassDiagram {
    fn default() -> Self {
        Self::new()
    }
}

impl Database for ClassDiagram {
    type Node = ClassNode;
    type Edge = Relation;

    fn get_node(&self, id: ElementId) -> Option<&Self::Node> {
        ClassDiagram::get_node(self, id)
    }

    fn get_edge(&self, id: ElementId) -> Option<&Self::Edge> {
        self.get_relation(id)
    }

    fn nodes(&self) -> impl Iterator<Item = &Self::Node> {
        self.nodes.values()
    }

    fn edges(&self) -> impl Iterator<Item = &Self::Edge> {
        self.relations.values()
    }

    fn remove(&mut self, id: ElementId) -> bool {
        self.delete_element(id)
    }

    /// Removes everything; ids keep counting so old ids stay unused
    fn clear(&mut self) {
        self.nodes.clear();
        self.relations.clear();
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.relations.len()
    }
}
