//! In-memory document.
//!
//! Nodes live in a [`Slab`] arena and are never removed, so a [`NodeId`]
//! stays valid for the lifetime of the document. Each node type declares the
//! properties it supports through [`MemoryDocument::register_type`]; writes
//! are validated against the property metadata before they land.

use rustc_hash::{FxHashMap, FxHashSet};
use slab::Slab;
use tracing::trace;
use trellis_properties::{PropertyKey, PropertyValue, keys};

use crate::{DocumentError, DocumentModel, GridAxis, NodeId, NodeKind, Resolution};


/// Type name given to row constraint records.
pub const ROW_CONSTRAINTS: &str = "RowConstraints";
/// Type name given to column constraint records.
pub const COLUMN_CONSTRAINTS: &str = "ColumnConstraints";

#[derive(Debug)]
struct Node {
	kind: NodeKind,
	type_name: String,
	parent: Option<NodeId>,
	children: Vec<NodeId>,
	attributes: FxHashMap<PropertyKey, PropertyValue>,
	/// Row and column constraint records, present on grid containers only.
	grid: Option<GridConstraints>,
	/// Include source of an intrinsic reference.
	source: Option<String>,
	/// Intrinsic reference this node was materialized from.
	materialized_from: Option<NodeId>,
}

#[derive(Debug, Default)]
struct GridConstraints {
	rows: Vec<NodeId>,
	columns: Vec<NodeId>,
}

impl GridConstraints {
	fn along(&self, axis: GridAxis) -> &[NodeId] {
		match axis {
			GridAxis::Row => &self.rows,
			GridAxis::Column => &self.columns,
		}
	}
}

/// Arena-backed [`DocumentModel`].
#[derive(Debug)]
pub struct MemoryDocument {
	nodes: Slab<Node>,
	types: FxHashMap<String, FxHashSet<PropertyKey>>,
}

impl Default for MemoryDocument {
	fn default() -> Self {
		Self::new()
	}
}

impl MemoryDocument {
	/// Creates an empty document with the constraint record types registered.
	pub fn new() -> Self {
		let mut doc = Self {
			nodes: Slab::new(),
			types: FxHashMap::default(),
		};
		doc.register_type(
			ROW_CONSTRAINTS,
			&[
				keys::min_height,
				keys::pref_height,
				keys::max_height,
				keys::percent_height,
				keys::fill_height,
			],
		);
		doc.register_type(
			COLUMN_CONSTRAINTS,
			&[
				keys::min_width,
				keys::pref_width,
				keys::max_width,
				keys::percent_width,
				keys::fill_width,
			],
		);
		doc
	}

	/// Declares that nodes of type `name` support `properties`.
	///
	/// Registering the same type again extends its property set.
	pub fn register_type(&mut self, name: &str, properties: &[PropertyKey]) {
		self.types
			.entry(name.to_string())
			.or_default()
			.extend(properties.iter().copied());
	}

	/// Adds a concrete instance of `type_name` under `parent`.
	pub fn add_instance(&mut self, parent: Option<NodeId>, type_name: &str) -> NodeId {
		self.insert(parent, NodeKind::ConcreteInstance, type_name, None)
	}

	/// Adds an intrinsic reference (e.g. an include) under `parent`.
	pub fn add_intrinsic(&mut self, parent: Option<NodeId>, type_name: &str, source: &str) -> NodeId {
		self.insert(
			parent,
			NodeKind::IntrinsicReference,
			type_name,
			Some(source.to_string()),
		)
	}

	/// Adds a grid container with `rows` row and `columns` column constraint records.
	pub fn add_grid(
		&mut self,
		parent: Option<NodeId>,
		type_name: &str,
		rows: usize,
		columns: usize,
	) -> NodeId {
		let grid = self.insert(parent, NodeKind::ConcreteInstance, type_name, None);
		self.node_mut(grid).grid = Some(GridConstraints::default());
		for _ in 0..rows {
			self.push_constraint(grid, GridAxis::Row);
		}
		for _ in 0..columns {
			self.push_constraint(grid, GridAxis::Column);
		}
		grid
	}

	/// Appends a constraint record along `axis` of a grid container.
	pub fn add_constraint(&mut self, grid: NodeId, axis: GridAxis) -> Result<NodeId, DocumentError> {
		let node = self.get(grid).ok_or(DocumentError::UnknownNode(grid))?;
		if node.grid.is_none() {
			return Err(DocumentError::NotAGrid(grid));
		}
		Ok(self.push_constraint(grid, axis))
	}

	/// Number of nodes in the document, materialized instances included.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Returns `true` if the document has no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Parent of `node`.
	pub fn parent(&self, node: NodeId) -> Option<NodeId> {
		self.get(node).and_then(|n| n.parent)
	}

	/// Children of `node` in document order.
	pub fn children(&self, node: NodeId) -> &[NodeId] {
		self.get(node)
			.map(|n| n.children.as_slice())
			.unwrap_or_default()
	}

	/// Include source of an intrinsic reference.
	pub fn source(&self, node: NodeId) -> Option<&str> {
		self.get(node).and_then(|n| n.source.as_deref())
	}

	/// The intrinsic reference `node` was materialized from, if any.
	pub fn materialized_from(&self, node: NodeId) -> Option<NodeId> {
		self.get(node).and_then(|n| n.materialized_from)
	}

	fn get(&self, node: NodeId) -> Option<&Node> {
		usize::try_from(node.0).ok().and_then(|key| self.nodes.get(key))
	}

	fn get_mut(&mut self, node: NodeId) -> Option<&mut Node> {
		let key = usize::try_from(node.0).ok()?;
		self.nodes.get_mut(key)
	}

	/// Only called with ids this document just allocated.
	fn node_mut(&mut self, node: NodeId) -> &mut Node {
		&mut self.nodes[node.0 as usize]
	}

	fn insert(
		&mut self,
		parent: Option<NodeId>,
		kind: NodeKind,
		type_name: &str,
		source: Option<String>,
	) -> NodeId {
		let key = self.nodes.insert(Node {
			kind,
			type_name: type_name.to_string(),
			parent,
			children: Vec::new(),
			attributes: FxHashMap::default(),
			grid: None,
			source,
			materialized_from: None,
		});
		let id = NodeId(key as u64);
		if let Some(parent) = parent
			&& let Some(parent) = self.get_mut(parent)
		{
			parent.children.push(id);
		}
		id
	}

	fn push_constraint(&mut self, grid: NodeId, axis: GridAxis) -> NodeId {
		let type_name = match axis {
			GridAxis::Row => ROW_CONSTRAINTS,
			GridAxis::Column => COLUMN_CONSTRAINTS,
		};
		// Constraint records are not scene children of the grid.
		let record = self.insert(None, NodeKind::ConstraintRecord, type_name, None);
		self.node_mut(record).parent = Some(grid);
		if let Some(constraints) = self.node_mut(grid).grid.as_mut() {
			match axis {
				GridAxis::Row => constraints.rows.push(record),
				GridAxis::Column => constraints.columns.push(record),
			}
		}
		record
	}
}

impl DocumentModel for MemoryDocument {
	fn node_kind(&self, node: NodeId) -> Option<NodeKind> {
		self.get(node).map(|n| n.kind)
	}

	fn type_name(&self, node: NodeId) -> Option<&str> {
		self.get(node).map(|n| n.type_name.as_str())
	}

	fn supports(&self, node: NodeId, key: PropertyKey) -> bool {
		let Some(n) = self.get(node) else {
			return false;
		};
		if n.kind == NodeKind::IntrinsicReference {
			return false;
		}
		self.types
			.get(&n.type_name)
			.is_some_and(|props| props.contains(&key))
	}

	fn property(&self, node: NodeId, key: PropertyKey) -> Option<PropertyValue> {
		if !self.supports(node, key) {
			return None;
		}
		let n = self.get(node)?;
		Some(
			n.attributes
				.get(&key)
				.cloned()
				.unwrap_or_else(|| key.default_value()),
		)
	}

	fn set_property(
		&mut self,
		node: NodeId,
		key: PropertyKey,
		value: PropertyValue,
	) -> Result<(), DocumentError> {
		let kind = self
			.node_kind(node)
			.ok_or(DocumentError::UnknownNode(node))?;
		if kind == NodeKind::IntrinsicReference {
			return Err(DocumentError::Unresolved(node));
		}
		if !self.supports(node, key) {
			return Err(DocumentError::UnsupportedProperty {
				node,
				property: key.name(),
			});
		}
		trellis_properties::validate(key, &value)
			.map_err(|source| DocumentError::Property { node, source })?;

		trace!(%node, property = key.name(), %value, "property set");
		let n = self.get_mut(node).ok_or(DocumentError::UnknownNode(node))?;
		n.attributes.insert(key, value);
		Ok(())
	}

	fn resolve_intrinsic(&mut self, node: NodeId) -> Result<Resolution, DocumentError> {
		let n = self.get(node).ok_or(DocumentError::UnknownNode(node))?;
		match n.kind {
			NodeKind::ConcreteInstance => Ok(Resolution::existing(node)),
			NodeKind::ConstraintRecord => Err(DocumentError::NotIntrinsic(node)),
			NodeKind::IntrinsicReference => {
				let type_name = n.type_name.clone();
				let parent = n.parent;
				let attributes = n.attributes.clone();

				// The instance stands beside the reference; it is not a scene child.
				let instance = self.insert(None, NodeKind::ConcreteInstance, &type_name, None);
				let created = self.node_mut(instance);
				created.parent = parent;
				created.attributes = attributes;
				created.materialized_from = Some(node);

				trace!(intrinsic = %node, %instance, %type_name, "intrinsic materialized");
				Ok(Resolution::materialized(instance))
			}
		}
	}

	fn grid_constraints(&self, container: NodeId, axis: GridAxis) -> Option<&[NodeId]> {
		self.get(container)
			.and_then(|n| n.grid.as_ref())
			.map(|grid| grid.along(axis))
	}
}
