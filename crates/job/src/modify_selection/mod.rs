//! Property edits applied to everything the selection covers.

use tracing::{debug, trace};
use trellis_document::{DocumentModel, NodeId};
use trellis_properties::{PropertyKey, PropertyValue};

use crate::{
	BatchJob, DescribeConfig, Expansion, Job, JobState, ModifyObjectJob, Result, Selection,
	describe_batch, expand,
};


/// Sets one property on every node covered by a selection, as one undo step.
///
/// Planning is eager: the selection is expanded and one [`ModifyObjectJob`]
/// is built per candidate when the job is constructed. Candidates that
/// already hold the value, or cannot take the property, are dropped. When
/// nothing is left the job still exists, so callers can detect the no-op,
/// but it is not executable.
#[derive(Debug)]
pub struct ModifySelectionJob {
	key: PropertyKey,
	new_value: PropertyValue,
	targets: Vec<NodeId>,
	materialized: Vec<NodeId>,
	batch: BatchJob,
}

impl ModifySelectionJob {
	/// Plans setting `key` to `new_value` on the current selection.
	pub fn new<D>(doc: &mut D, selection: &Selection, key: PropertyKey, new_value: PropertyValue) -> Result<Self>
	where
		D: DocumentModel + ?Sized,
	{
		Self::with_config(doc, selection, key, new_value, &DescribeConfig::default())
	}

	/// Like [`new`](Self::new), describing the batch with `config`.
	pub fn with_config<D>(
		doc: &mut D,
		selection: &Selection,
		key: PropertyKey,
		new_value: PropertyValue,
		config: &DescribeConfig,
	) -> Result<Self>
	where
		D: DocumentModel + ?Sized,
	{
		let Expansion {
			candidates,
			materialized,
		} = expand(&mut *doc, selection.group())?;

		let mut targets = Vec::with_capacity(candidates.len());
		let mut sub_jobs: Vec<Box<dyn Job>> = Vec::with_capacity(candidates.len());
		for node in candidates {
			let job = ModifyObjectJob::new(&*doc, node, key, new_value.clone());
			if job.is_executable() {
				targets.push(node);
				sub_jobs.push(Box::new(job));
			} else {
				trace!(%node, property = key.name(), "unchanged, dropped");
			}
		}

		let description = describe_batch(&sub_jobs, key, config);
		debug!(
			property = key.name(),
			value = %new_value,
			sub_jobs = sub_jobs.len(),
			materialized = materialized.len(),
			%description,
			"selection edit planned"
		);

		Ok(Self {
			key,
			new_value,
			targets,
			materialized,
			batch: BatchJob::new(sub_jobs, description),
		})
	}

	/// Property being set.
	pub fn key(&self) -> PropertyKey {
		self.key
	}

	/// Value being set.
	pub fn new_value(&self) -> &PropertyValue {
		&self.new_value
	}

	/// Target of each sub-job, in execution order.
	pub fn targets(&self) -> &[NodeId] {
		&self.targets
	}

	/// Nodes allocated while resolving intrinsic references during planning.
	///
	/// Undoing the job does not remove them; that is up to the host.
	pub fn materialized(&self) -> &[NodeId] {
		&self.materialized
	}

	/// The underlying batch.
	pub fn batch(&self) -> &BatchJob {
		&self.batch
	}
}

impl Job for ModifySelectionJob {
	fn is_executable(&self) -> bool {
		self.batch.is_executable()
	}

	fn state(&self) -> JobState {
		self.batch.state()
	}

	fn execute(&mut self, doc: &mut dyn DocumentModel) -> Result<()> {
		self.batch.execute(doc)
	}

	fn undo(&mut self, doc: &mut dyn DocumentModel) -> Result<()> {
		self.batch.undo(doc)
	}

	fn redo(&mut self, doc: &mut dyn DocumentModel) -> Result<()> {
		self.batch.redo(doc)
	}

	fn description(&self) -> String {
		self.batch.description()
	}
}
