//! Core database trait for diagram data storage
//!
//! This trait defines the read and removal interface shared by diagram
//! stores. Insertion is type-specific because the store assigns ids.

use super::ElementId;

/// Core trait for diagram databases
///
/// A database owns the nodes and edges of one diagram, keyed by
/// [`ElementId`]. Iteration follows insertion order.
pub trait Database: Send + Sync {
    /// The node data type for this database
    type Node: Clone + Send + Sync;

    /// The edge data type for this database
    type Edge: Clone + Send + Sync;

    /// Get a node by ID
    fn get_node(&self, id: ElementId) -> Option<&Self::Node>;

    /// Get an edge by ID
    fn get_edge(&self, id: ElementId) -> Option<&Self::Edge>;

    /// Iterate over all nodes
    fn nodes(&self) -> impl Iterator<Item = &Self::Node>;

    /// Iterate over all edges
    fn edges(&self) -> impl Iterator<Item = &Self::Edge>;

    /// Remove the node or edge with this ID, returning whether anything was removed
    fn remove(&mut self, id: ElementId) -> bool;

    /// Clear all data from the database
    fn clear(&mut self);

    /// Get the number of nodes
    fn node_count(&self) -> usize;

    /// Get the number of edges
    fn edge_count(&self) -> usize;
}
