use super::*;

#[test]
fn test_object_selection_dedupes_in_order() {
	let objects = ObjectSelection::new([NodeId(3), NodeId(1), NodeId(3)]);
	assert_eq!(objects.len(), 2);
	assert_eq!(objects.items().collect::<Vec<_>>(), [NodeId(3), NodeId(1)]);
	assert!(objects.contains(NodeId(1)));
}

#[test]
fn test_select_replaces_shape() {
	let mut selection = Selection::new();
	selection.select_objects([NodeId(1), NodeId(2)]);
	assert_eq!(selection.len(), 2);

	selection.select_grid(NodeId(5), GridAxis::Column, [0, 2]);
	let Some(SelectionGroup::Grid(grid)) = selection.group() else {
		panic!("expected grid selection");
	};
	assert_eq!(grid.ancestor(), NodeId(5));
	assert_eq!(grid.axis(), GridAxis::Column);
	assert_eq!(grid.indexes().collect::<Vec<_>>(), [0, 2]);
}

#[test]
fn test_empty_groups_clear_selection() {
	let mut selection = Selection::new();
	selection.select_objects([NodeId(1)]);
	selection.select_objects([]);
	assert!(selection.is_empty());

	selection.select_grid(NodeId(5), GridAxis::Row, []);
	assert!(selection.group().is_none());
	assert_eq!(selection.len(), 0);
}

#[test]
fn test_toggle_object() {
	let mut selection = Selection::new();
	selection.toggle_object(NodeId(1));
	selection.toggle_object(NodeId(2));
	assert_eq!(selection.len(), 2);

	selection.toggle_object(NodeId(1));
	assert_eq!(
		selection.group(),
		Some(&SelectionGroup::Objects(ObjectSelection::new([NodeId(2)])))
	);

	selection.toggle_object(NodeId(2));
	assert!(selection.is_empty());
}

#[test]
fn test_toggle_replaces_grid() {
	let mut selection = Selection::from_group(SelectionGroup::Grid(GridSelection::new(
		NodeId(5),
		GridAxis::Row,
		[1],
	)));
	selection.toggle_object(NodeId(9));
	assert_eq!(
		selection.group(),
		Some(&SelectionGroup::Objects(ObjectSelection::new([NodeId(9)])))
	);
}
