//! Document node model.
//!
//! The job engine edits documents through the [`DocumentModel`] trait. Nodes
//! are addressed by [`NodeId`] and come in three kinds (see [`NodeKind`]):
//! concrete instances, intrinsic references that must be resolved before they
//! can be written, and constraint records describing one row or column of a
//! grid container. [`HierarchyMask`] translates grid indexes into constraint
//! nodes, and [`MemoryDocument`] is an in-memory implementation of the model.

mod error;
mod mask;
mod memory;
mod model;

pub use error::DocumentError;
pub use mask::HierarchyMask;
pub use memory::MemoryDocument;
pub use model::DocumentModel;
pub use trellis_properties::{PropertyKey, PropertyValue};

/// Stable identifier of a node within one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// What a node is, as far as editing is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
	/// A node whose properties can be written directly.
	ConcreteInstance,
	/// A placeholder that must be resolved into a concrete instance before
	/// any property write.
	IntrinsicReference,
	/// One row or column definition of a grid container.
	ConstraintRecord,
}

/// Structural axis of a grid container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridAxis {
	/// Row constraints.
	Row,
	/// Column constraints.
	Column,
}

impl std::fmt::Display for GridAxis {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GridAxis::Row => f.write_str("row"),
			GridAxis::Column => f.write_str("column"),
		}
	}
}

/// Outcome of [`DocumentModel::resolve_intrinsic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
	/// The concrete node standing for the resolved entity.
	pub node: NodeId,
	/// `true` if resolving allocated a new node in the document.
	pub materialized: bool,
}

impl Resolution {
	/// A resolution that returned an existing concrete node.
	pub fn existing(node: NodeId) -> Self {
		Self { node, materialized: false }
	}

	/// A resolution that allocated `node`.
	pub fn materialized(node: NodeId) -> Self {
		Self { node, materialized: true }
	}
}
