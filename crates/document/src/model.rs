use trellis_properties::{PropertyKey, PropertyValue};

use crate::{DocumentError, GridAxis, NodeId, NodeKind, Resolution};

/// Mutable view of a document, as consumed by jobs.
///
/// The trait is object safe; jobs receive `&mut dyn DocumentModel` when they
/// are executed so the host keeps ownership of the document.
pub trait DocumentModel {
	/// Returns the kind of `node`, or `None` if it does not exist.
	fn node_kind(&self, node: NodeId) -> Option<NodeKind>;

	/// Returns the type name of `node` (e.g. `"Button"`).
	fn type_name(&self, node: NodeId) -> Option<&str>;

	/// Returns `true` if `key` applies to `node`'s type.
	///
	/// Intrinsic references support nothing until they are resolved.
	fn supports(&self, node: NodeId, key: PropertyKey) -> bool;

	/// Returns the effective value of `key` on `node`.
	///
	/// Falls back to the property default when the node has no explicit
	/// value. Returns `None` when the node is unknown or the property does
	/// not apply to it.
	fn property(&self, node: NodeId, key: PropertyKey) -> Option<PropertyValue>;

	/// Writes `value` to `key` on `node`.
	fn set_property(
		&mut self,
		node: NodeId,
		key: PropertyKey,
		value: PropertyValue,
	) -> Result<(), DocumentError>;

	/// Resolves `node` into a concrete instance.
	///
	/// Concrete nodes resolve to themselves. Intrinsic references allocate a
	/// new concrete node on every call; callers must resolve each logical
	/// target at most once.
	fn resolve_intrinsic(&mut self, node: NodeId) -> Result<Resolution, DocumentError>;

	/// Returns the constraint records of a grid container along `axis`, in
	/// index order. `None` if `container` is not a grid.
	fn grid_constraints(&self, container: NodeId, axis: GridAxis) -> Option<&[NodeId]>;
}
