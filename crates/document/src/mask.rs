//! Read-only structural queries over one container.

use crate::{DocumentModel, GridAxis, NodeId};

/// Translates structural indexes of `ancestor` into constraint nodes.
pub struct HierarchyMask<'a, D: ?Sized> {
	doc: &'a D,
	ancestor: NodeId,
}

impl<'a, D: DocumentModel + ?Sized> HierarchyMask<'a, D> {
	/// Builds a mask over `ancestor`.
	pub fn new(doc: &'a D, ancestor: NodeId) -> Self {
		Self { doc, ancestor }
	}

	/// The container this mask was built over.
	pub fn ancestor(&self) -> NodeId {
		self.ancestor
	}

	/// Returns `true` if the ancestor is a grid container.
	pub fn is_grid(&self) -> bool {
		self.doc.grid_constraints(self.ancestor, GridAxis::Row).is_some()
	}

	/// Number of constraint records along `axis`; zero for non-grids.
	pub fn constraint_count(&self, axis: GridAxis) -> usize {
		self.doc
			.grid_constraints(self.ancestor, axis)
			.map_or(0, <[NodeId]>::len)
	}

	/// Returns the constraint node at `index` along `axis`.
	pub fn constraint_at(&self, axis: GridAxis, index: usize) -> Option<NodeId> {
		self.doc
			.grid_constraints(self.ancestor, axis)
			.and_then(|nodes| nodes.get(index).copied())
	}

	/// Shorthand for [`constraint_at`](Self::constraint_at) on rows.
	pub fn row_constraint_at(&self, index: usize) -> Option<NodeId> {
		self.constraint_at(GridAxis::Row, index)
	}

	/// Shorthand for [`constraint_at`](Self::constraint_at) on columns.
	pub fn column_constraint_at(&self, index: usize) -> Option<NodeId> {
		self.constraint_at(GridAxis::Column, index)
	}
}
