//! Selection shapes the job engine can edit.
//!
//! A [`Selection`] holds at most one [`SelectionGroup`]. Each group variant
//! enumerates what it covers: [`ObjectSelection`] names nodes directly while
//! [`GridSelection`] names row or column positions inside a grid container.
//! Consumers match on [`SelectionGroup`] exhaustively, so a new shape cannot
//! be added without every consumer handling it.

use indexmap::IndexSet;
use trellis_document::{GridAxis, NodeId};

#[cfg(test)]
mod tests;

/// Whole objects, each either concrete or an intrinsic reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSelection {
	items: IndexSet<NodeId>,
}

impl ObjectSelection {
	/// Creates a selection of `items`, keeping first-seen order.
	pub fn new(items: impl IntoIterator<Item = NodeId>) -> Self {
		Self {
			items: items.into_iter().collect(),
		}
	}

	/// Selected nodes in selection order.
	pub fn items(&self) -> impl Iterator<Item = NodeId> {
		self.items.iter().copied()
	}

	/// Returns `true` if `node` is selected.
	pub fn contains(&self, node: NodeId) -> bool {
		self.items.contains(&node)
	}

	/// Number of selected nodes.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns `true` if nothing is selected.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

/// Rows or columns of a grid container, addressed by index.
///
/// Indexes are resolved to constraint nodes lazily through a
/// [`HierarchyMask`](trellis_document::HierarchyMask).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSelection {
	ancestor: NodeId,
	axis: GridAxis,
	indexes: IndexSet<usize>,
}

impl GridSelection {
	/// Selects `indexes` along `axis` of the grid `ancestor`.
	pub fn new(ancestor: NodeId, axis: GridAxis, indexes: impl IntoIterator<Item = usize>) -> Self {
		Self {
			ancestor,
			axis,
			indexes: indexes.into_iter().collect(),
		}
	}

	/// The grid container.
	pub fn ancestor(&self) -> NodeId {
		self.ancestor
	}

	/// Whether rows or columns are selected.
	pub fn axis(&self) -> GridAxis {
		self.axis
	}

	/// Selected indexes in selection order.
	pub fn indexes(&self) -> impl Iterator<Item = usize> {
		self.indexes.iter().copied()
	}

	/// Number of selected indexes.
	pub fn len(&self) -> usize {
		self.indexes.len()
	}

	/// Returns `true` if no index is selected.
	pub fn is_empty(&self) -> bool {
		self.indexes.is_empty()
	}
}

/// One selection shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionGroup {
	/// Whole objects.
	Objects(ObjectSelection),
	/// Grid rows or columns.
	Grid(GridSelection),
}

impl SelectionGroup {
	/// Number of selected items or indexes.
	pub fn len(&self) -> usize {
		match self {
			SelectionGroup::Objects(objects) => objects.len(),
			SelectionGroup::Grid(grid) => grid.len(),
		}
	}

	/// Returns `true` if the group covers nothing.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// The editor's current selection.
///
/// Exactly one shape is active at a time; selecting a different shape
/// replaces the current group. Empty groups are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
	group: Option<SelectionGroup>,
}

impl Selection {
	/// Creates an empty selection.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a selection holding `group`.
	pub fn from_group(group: SelectionGroup) -> Self {
		let mut selection = Self::new();
		selection.set_group(group);
		selection
	}

	/// Replaces the selection with `items`.
	pub fn select_objects(&mut self, items: impl IntoIterator<Item = NodeId>) {
		self.set_group(SelectionGroup::Objects(ObjectSelection::new(items)));
	}

	/// Replaces the selection with `indexes` along `axis` of `ancestor`.
	pub fn select_grid(&mut self, ancestor: NodeId, axis: GridAxis, indexes: impl IntoIterator<Item = usize>) {
		self.set_group(SelectionGroup::Grid(GridSelection::new(ancestor, axis, indexes)));
	}

	/// Adds `node` to an object selection or removes it if already selected.
	///
	/// A grid selection is replaced by a selection of `node` alone.
	pub fn toggle_object(&mut self, node: NodeId) {
		match &mut self.group {
			Some(SelectionGroup::Objects(objects)) => {
				if !objects.items.shift_remove(&node) {
					objects.items.insert(node);
				}
				if objects.is_empty() {
					self.group = None;
				}
			}
			_ => self.select_objects([node]),
		}
	}

	/// Clears the selection.
	pub fn clear(&mut self) {
		self.group = None;
	}

	/// The active group, if any.
	pub fn group(&self) -> Option<&SelectionGroup> {
		self.group.as_ref()
	}

	/// Returns `true` if nothing is selected.
	pub fn is_empty(&self) -> bool {
		self.group.is_none()
	}

	/// Number of selected items or indexes.
	pub fn len(&self) -> usize {
		self.group.as_ref().map_or(0, SelectionGroup::len)
	}

	fn set_group(&mut self, group: SelectionGroup) {
		self.group = (!group.is_empty()).then_some(group);
	}
}
