use proptest::prelude::*;
use trellis_document::{DocumentError, GridAxis, MemoryDocument, PropertyKey, PropertyValue, Resolution};
use trellis_properties::keys;

use super::*;
use crate::Selection;

fn scene() -> MemoryDocument {
	let mut doc = MemoryDocument::new();
	doc.register_type("Label", &[keys::text, keys::visible]);
	doc
}

#[test]
fn test_no_group_expands_to_nothing() {
	let mut doc = scene();
	let expansion = expand(&mut doc, None).unwrap();
	assert!(expansion.candidates.is_empty());
	assert!(expansion.materialized.is_empty());
}

#[test]
fn test_concrete_items_pass_through() {
	let mut doc = scene();
	let a = doc.add_instance(None, "Label");
	let b = doc.add_instance(None, "Label");
	let mut selection = Selection::new();
	selection.select_objects([b, a]);

	let expansion = expand(&mut doc, selection.group()).unwrap();
	assert_eq!(expansion.candidates.iter().copied().collect::<Vec<_>>(), [b, a]);
	assert!(expansion.materialized.is_empty());
}

#[test]
fn test_intrinsic_items_are_replaced_by_resolved_node() {
	let mut doc = scene();
	let include = doc.add_intrinsic(None, "Label", "footer.fxml");
	let mut selection = Selection::new();
	selection.select_objects([include]);

	let expansion = expand(&mut doc, selection.group()).unwrap();
	assert_eq!(expansion.candidates.len(), 1);
	let resolved = expansion.candidates[0];
	assert_ne!(resolved, include);
	assert!(!expansion.candidates.contains(&include));
	assert_eq!(expansion.materialized, [resolved]);
	assert_eq!(doc.materialized_from(resolved), Some(include));
}

#[test]
fn test_constraint_and_unknown_items_are_skipped() {
	let mut doc = scene();
	let grid = doc.add_grid(None, "GridPane", 1, 0);
	let row = doc.grid_constraints(grid, GridAxis::Row).unwrap()[0];
	let mut selection = Selection::new();
	selection.select_objects([row, NodeId(500)]);

	let expansion = expand(&mut doc, selection.group()).unwrap();
	assert!(expansion.candidates.is_empty());
}

#[test]
fn test_grid_columns() {
	let mut doc = scene();
	let grid = doc.add_grid(None, "GridPane", 2, 3);
	let columns = doc.grid_constraints(grid, GridAxis::Column).unwrap().to_vec();
	let mut selection = Selection::new();
	selection.select_grid(grid, GridAxis::Column, [0, 2]);

	let expansion = expand(&mut doc, selection.group()).unwrap();
	assert_eq!(
		expansion.candidates.iter().copied().collect::<Vec<_>>(),
		[columns[0], columns[2]]
	);
}

#[test]
fn test_grid_missing_index_is_an_invariant_violation() {
	let mut doc = scene();
	let grid = doc.add_grid(None, "GridPane", 2, 3);
	let mut selection = Selection::new();
	selection.select_grid(grid, GridAxis::Row, [1, 2]);

	let err = expand(&mut doc, selection.group()).unwrap_err();
	assert_eq!(
		err,
		JobError::MissingConstraint {
			ancestor: grid,
			axis: GridAxis::Row,
			index: 2,
		}
	);
	assert!(err.is_invariant_violation());
}

#[test]
fn test_grid_selection_on_non_grid() {
	let mut doc = scene();
	let label = doc.add_instance(None, "Label");
	let mut selection = Selection::new();
	selection.select_grid(label, GridAxis::Column, [0]);
	assert!(matches!(
		expand(&mut doc, selection.group()),
		Err(JobError::MissingConstraint { index: 0, .. })
	));
}

/// Grid model whose constraint list points at ordinary instances.
struct MislabeledGrid {
	inner: MemoryDocument,
	grid: NodeId,
	bogus: Vec<NodeId>,
}

impl DocumentModel for MislabeledGrid {
	fn node_kind(&self, node: NodeId) -> Option<NodeKind> {
		self.inner.node_kind(node)
	}

	fn type_name(&self, node: NodeId) -> Option<&str> {
		self.inner.type_name(node)
	}

	fn supports(&self, node: NodeId, key: PropertyKey) -> bool {
		self.inner.supports(node, key)
	}

	fn property(&self, node: NodeId, key: PropertyKey) -> Option<PropertyValue> {
		self.inner.property(node, key)
	}

	fn set_property(
		&mut self,
		node: NodeId,
		key: PropertyKey,
		value: PropertyValue,
	) -> std::result::Result<(), DocumentError> {
		self.inner.set_property(node, key, value)
	}

	fn resolve_intrinsic(&mut self, node: NodeId) -> std::result::Result<Resolution, DocumentError> {
		self.inner.resolve_intrinsic(node)
	}

	fn grid_constraints(&self, container: NodeId, _axis: GridAxis) -> Option<&[NodeId]> {
		(container == self.grid).then_some(self.bogus.as_slice())
	}
}

#[test]
fn test_mask_returning_non_constraint_is_rejected() {
	let mut inner = scene();
	let grid = inner.add_instance(None, "GridPane");
	let label = inner.add_instance(Some(grid), "Label");
	let mut doc = MislabeledGrid {
		inner,
		grid,
		bogus: vec![label],
	};
	let mut selection = Selection::new();
	selection.select_grid(grid, GridAxis::Row, [0]);

	let err = expand(&mut doc, selection.group()).unwrap_err();
	assert_eq!(
		err,
		JobError::NotAConstraint {
			node: label,
			kind: Some(NodeKind::ConcreteInstance),
		}
	);
}

/// Document that refuses to resolve one intrinsic reference.
struct BrokenInclude {
	inner: MemoryDocument,
	broken: NodeId,
}

impl DocumentModel for BrokenInclude {
	fn node_kind(&self, node: NodeId) -> Option<NodeKind> {
		self.inner.node_kind(node)
	}

	fn type_name(&self, node: NodeId) -> Option<&str> {
		self.inner.type_name(node)
	}

	fn supports(&self, node: NodeId, key: PropertyKey) -> bool {
		self.inner.supports(node, key)
	}

	fn property(&self, node: NodeId, key: PropertyKey) -> Option<PropertyValue> {
		self.inner.property(node, key)
	}

	fn set_property(
		&mut self,
		node: NodeId,
		key: PropertyKey,
		value: PropertyValue,
	) -> std::result::Result<(), DocumentError> {
		self.inner.set_property(node, key, value)
	}

	fn resolve_intrinsic(&mut self, node: NodeId) -> std::result::Result<Resolution, DocumentError> {
		if node == self.broken {
			return Err(DocumentError::UnknownNode(node));
		}
		self.inner.resolve_intrinsic(node)
	}

	fn grid_constraints(&self, container: NodeId, axis: GridAxis) -> Option<&[NodeId]> {
		self.inner.grid_constraints(container, axis)
	}
}

#[test]
fn test_failed_resolution_reports_materialized_nodes() {
	let mut inner = scene();
	let first = inner.add_intrinsic(None, "Label", "a.fxml");
	let broken = inner.add_intrinsic(None, "Label", "b.fxml");
	let mut doc = BrokenInclude { inner, broken };
	let mut selection = Selection::new();
	selection.select_objects([first, broken]);

	let err = expand(&mut doc, selection.group()).unwrap_err();
	let JobError::Unresolvable {
		node,
		materialized,
		source,
	} = err
	else {
		panic!("expected an unresolvable intrinsic");
	};
	assert_eq!(node, broken);
	assert_eq!(source, DocumentError::UnknownNode(broken));
	assert_eq!(materialized.len(), 1);
	assert_eq!(doc.inner.materialized_from(materialized[0]), Some(first));
}

#[derive(Debug, Clone, Copy)]
enum Item {
	Concrete,
	Intrinsic,
	Constraint,
}

fn item_strategy() -> impl Strategy<Value = Vec<(Item, bool)>> {
	prop::collection::vec(
		(
			prop_oneof![Just(Item::Concrete), Just(Item::Intrinsic), Just(Item::Constraint)],
			any::<bool>(),
		),
		0..12,
	)
}

proptest! {
	/// Each intrinsic yields one fresh node, concrete items pass through, and
	/// the candidate count never exceeds the selected item count. The flag
	/// repeats the previous item to exercise deduplication.
	#[test]
	fn prop_object_expansion(items in item_strategy()) {
		let mut doc = scene();
		let grid = doc.add_grid(None, "GridPane", 1, 0);
		let row = doc.grid_constraints(grid, GridAxis::Row).unwrap()[0];

		let mut selected: Vec<NodeId> = Vec::new();
		for (item, repeat) in &items {
			let node = match (*repeat, selected.last()) {
				(true, Some(last)) => *last,
				_ => match item {
					Item::Concrete => doc.add_instance(None, "Label"),
					Item::Intrinsic => doc.add_intrinsic(None, "Label", "part.fxml"),
					Item::Constraint => row,
				},
			};
			selected.push(node);
		}
		let selection = ObjectSelection::new(selected.iter().copied());
		let concrete: Vec<NodeId> = selection
			.items()
			.filter(|n| doc.node_kind(*n) == Some(NodeKind::ConcreteInstance))
			.collect();
		let intrinsics = selection
			.items()
			.filter(|n| doc.node_kind(*n) == Some(NodeKind::IntrinsicReference))
			.count();

		let group = SelectionGroup::Objects(selection.clone());
		let expansion = expand(&mut doc, Some(&group)).unwrap();

		prop_assert!(expansion.candidates.len() <= selection.len());
		prop_assert_eq!(expansion.candidates.len(), concrete.len() + intrinsics);
		prop_assert_eq!(expansion.materialized.len(), intrinsics);
		for node in &concrete {
			prop_assert!(expansion.candidates.contains(node));
		}
		for node in &expansion.materialized {
			prop_assert!(expansion.candidates.contains(node));
			prop_assert_eq!(doc.node_kind(*node), Some(NodeKind::ConcreteInstance));
			prop_assert!(doc.materialized_from(*node).is_some_and(|source| selection.contains(source)));
		}
	}

	#[test]
	fn prop_grid_expansion_size(columns in 1usize..10, picks in prop::collection::vec(any::<prop::sample::Index>(), 0..10)) {
		let mut doc = scene();
		let grid = doc.add_grid(None, "GridPane", 0, columns);
		let indexes: IndexSet<usize> = picks.iter().map(|p| p.index(columns)).collect();
		let group = SelectionGroup::Grid(GridSelection::new(grid, GridAxis::Column, indexes.iter().copied()));

		let expansion = expand(&mut doc, Some(&group)).unwrap();
		prop_assert_eq!(expansion.candidates.len(), indexes.len());
		let all = doc.grid_constraints(grid, GridAxis::Column).unwrap();
		for (index, node) in indexes.iter().zip(&expansion.candidates) {
			prop_assert_eq!(all[*index], *node);
		}
	}
}
