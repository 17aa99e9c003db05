//! Expansion of a selection into concrete nodes to modify.

use indexmap::IndexSet;
use tracing::{error, trace};
use trellis_document::{DocumentModel, HierarchyMask, NodeId, NodeKind};

use crate::{GridSelection, JobError, ObjectSelection, Result, SelectionGroup};

#[cfg(test)]
mod tests;

/// Concrete nodes covered by a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
	/// Nodes to modify, deduplicated, in selection order.
	pub candidates: IndexSet<NodeId>,
	/// Nodes allocated while resolving intrinsic references.
	///
	/// These stay in the document even if the job is dropped or undone.
	pub materialized: Vec<NodeId>,
}

/// Expands `group` into concrete, writable nodes.
///
/// Object items are taken as-is when concrete and resolved exactly once when
/// intrinsic; other kinds and unknown ids are skipped. Grid indexes are
/// looked up through a [`HierarchyMask`] over the grid container and must
/// name existing constraint records. An absent group expands to nothing.
///
/// A failed resolution aborts the expansion with [`JobError::Unresolvable`],
/// which carries the nodes already materialized.
pub fn expand<D>(doc: &mut D, group: Option<&SelectionGroup>) -> Result<Expansion>
where
	D: DocumentModel + ?Sized,
{
	let mut expansion = Expansion::default();
	match group {
		Some(SelectionGroup::Objects(objects)) => expand_objects(doc, objects, &mut expansion)?,
		Some(SelectionGroup::Grid(grid)) => expand_grid(doc, grid, &mut expansion)?,
		None => {}
	}
	trace!(
		candidates = expansion.candidates.len(),
		materialized = expansion.materialized.len(),
		"selection expanded"
	);
	Ok(expansion)
}

fn expand_objects<D>(doc: &mut D, objects: &ObjectSelection, out: &mut Expansion) -> Result<()>
where
	D: DocumentModel + ?Sized,
{
	for item in objects.items() {
		match doc.node_kind(item) {
			Some(NodeKind::ConcreteInstance) => {
				out.candidates.insert(item);
			}
			Some(NodeKind::IntrinsicReference) => {
				let resolution = doc.resolve_intrinsic(item).map_err(|source| {
					error!(
						%item,
						error = %source,
						materialized = out.materialized.len(),
						"intrinsic resolution failed"
					);
					JobError::Unresolvable {
						node: item,
						materialized: out.materialized.clone(),
						source,
					}
				})?;
				if resolution.materialized {
					out.materialized.push(resolution.node);
				}
				out.candidates.insert(resolution.node);
			}
			kind => trace!(%item, ?kind, "selection item skipped"),
		}
	}
	Ok(())
}

fn expand_grid<D>(doc: &D, grid: &GridSelection, out: &mut Expansion) -> Result<()>
where
	D: DocumentModel + ?Sized,
{
	let mask = HierarchyMask::new(doc, grid.ancestor());
	let axis = grid.axis();
	for index in grid.indexes() {
		let Some(node) = mask.constraint_at(axis, index) else {
			error!(ancestor = %grid.ancestor(), %axis, index, "grid selection names a missing constraint");
			return Err(JobError::MissingConstraint {
				ancestor: grid.ancestor(),
				axis,
				index,
			});
		};
		match doc.node_kind(node) {
			Some(NodeKind::ConstraintRecord) => {
				out.candidates.insert(node);
			}
			kind => {
				error!(%node, ?kind, "hierarchy mask returned a non-constraint node");
				return Err(JobError::NotAConstraint { node, kind });
			}
		}
	}
	Ok(())
}
