use tracing::{debug, trace};
use trellis_document::{DocumentModel, NodeId};
use trellis_properties::{PropertyKey, PropertyValue};

use crate::{Job, JobError, JobOp, JobState, Result};

/// Sets one property of one concrete node.
///
/// The previous value is captured when the job is built, which is also when
/// executability is decided: the new value must pass the property's
/// validation, the property must apply to the node's type, and the node must
/// currently hold a different value. Floats are compared by bit pattern.
#[derive(Debug)]
pub struct ModifyObjectJob {
	target: NodeId,
	key: PropertyKey,
	new_value: PropertyValue,
	/// `None` when the property does not apply to the target.
	old_value: Option<PropertyValue>,
	executable: bool,
	description: String,
	state: JobState,
}

impl ModifyObjectJob {
	/// Plans writing `new_value` to `key` on `target`.
	pub fn new<D>(doc: &D, target: NodeId, key: PropertyKey, new_value: PropertyValue) -> Self
	where
		D: DocumentModel + ?Sized,
	{
		let old_value = doc.property(target, key);
		let valid = match trellis_properties::validate(key, &new_value) {
			Ok(()) => true,
			Err(err) => {
				debug!(%target, error = %err, "modify rejected");
				false
			}
		};
		let executable = valid
			&& doc.supports(target, key)
			&& old_value.as_ref().is_some_and(|old| !old.is_same(&new_value));
		let description = match doc.type_name(target) {
			Some(type_name) => format!("Set {} on {type_name}", key.name()),
			None => format!("Set {} on {target}", key.name()),
		};

		trace!(%target, property = key.name(), executable, "modify planned");
		Self {
			target,
			key,
			new_value,
			old_value,
			executable,
			description,
			state: JobState::Planned,
		}
	}

	/// Node being modified.
	pub fn target(&self) -> NodeId {
		self.target
	}

	/// Property being modified.
	pub fn key(&self) -> PropertyKey {
		self.key
	}

	/// Value written by execute and redo.
	pub fn new_value(&self) -> &PropertyValue {
		&self.new_value
	}

	/// Value captured at planning time and written back by undo.
	pub fn old_value(&self) -> Option<&PropertyValue> {
		self.old_value.as_ref()
	}

	fn write(&mut self, doc: &mut dyn DocumentModel, op: JobOp) -> Result<()> {
		if !self.executable {
			return Err(JobError::NotExecutable);
		}
		let value = match op {
			JobOp::Execute | JobOp::Redo => self.new_value.clone(),
			JobOp::Undo => self.old_value.clone().ok_or(JobError::NotExecutable)?,
		};
		let (target, key) = (self.target, self.key);
		self.state.run(op, || {
			doc.set_property(target, key, value)?;
			Ok(())
		})
	}
}

impl Job for ModifyObjectJob {
	fn is_executable(&self) -> bool {
		self.executable
	}

	fn state(&self) -> JobState {
		self.state
	}

	fn execute(&mut self, doc: &mut dyn DocumentModel) -> Result<()> {
		self.write(doc, JobOp::Execute)
	}

	fn undo(&mut self, doc: &mut dyn DocumentModel) -> Result<()> {
		self.write(doc, JobOp::Undo)
	}

	fn redo(&mut self, doc: &mut dyn DocumentModel) -> Result<()> {
		self.write(doc, JobOp::Redo)
	}

	fn description(&self) -> String {
		self.description.clone()
	}
}
