//! Ordered composition of jobs.

use tracing::{debug, error};
use trellis_document::DocumentModel;

use crate::{Job, JobError, JobOp, JobState, Result};


/// A job made of an ordered list of sub-jobs, run as a unit.
///
/// Sub-jobs are owned exclusively and fixed at construction. A batch with no
/// sub-jobs is valid and describable but not executable. Undo walks the
/// sub-jobs in reverse so order-dependent jobs restore correctly.
///
/// A sub-job failure leaves the sub-jobs before it applied and reports
/// [`JobError::Inconsistent`]; there is no partial rollback.
#[derive(Debug)]
pub struct BatchJob {
	sub_jobs: Vec<Box<dyn Job>>,
	description: String,
	state: JobState,
}

impl BatchJob {
	/// Creates a batch from `sub_jobs`, run in the given order.
	pub fn new(sub_jobs: Vec<Box<dyn Job>>, description: impl Into<String>) -> Self {
		Self {
			sub_jobs,
			description: description.into(),
			state: JobState::Planned,
		}
	}

	/// The sub-jobs in execution order.
	pub fn sub_jobs(&self) -> &[Box<dyn Job>] {
		&self.sub_jobs
	}

	/// Number of sub-jobs.
	pub fn len(&self) -> usize {
		self.sub_jobs.len()
	}

	/// Returns `true` if the batch has no sub-jobs.
	pub fn is_empty(&self) -> bool {
		self.sub_jobs.is_empty()
	}

	fn run(&mut self, doc: &mut dyn DocumentModel, op: JobOp) -> Result<()> {
		if !self.is_executable() {
			return Err(JobError::NotExecutable);
		}
		let sub_jobs = &mut self.sub_jobs;
		let result = self.state.run(op, || {
			let count = sub_jobs.len();
			for step in 0..count {
				let index = match op {
					JobOp::Execute | JobOp::Redo => step,
					JobOp::Undo => count - 1 - step,
				};
				let job = &mut sub_jobs[index];
				let outcome = match op {
					JobOp::Execute => job.execute(doc),
					JobOp::Undo => job.undo(doc),
					JobOp::Redo => job.redo(doc),
				};
				outcome.map_err(|source| JobError::Inconsistent {
					op,
					index,
					source: Box::new(source),
				})?;
			}
			Ok(())
		});

		match &result {
			Ok(()) => debug!(
				%op,
				sub_jobs = self.sub_jobs.len(),
				description = %self.description,
				"batch done"
			),
			Err(err) => error!(
				%op,
				error = %err,
				description = %self.description,
				"batch left inconsistent"
			),
		}
		result
	}
}

impl Job for BatchJob {
	fn is_executable(&self) -> bool {
		!self.sub_jobs.is_empty()
	}

	fn state(&self) -> JobState {
		self.state
	}

	fn execute(&mut self, doc: &mut dyn DocumentModel) -> Result<()> {
		self.run(doc, JobOp::Execute)
	}

	fn undo(&mut self, doc: &mut dyn DocumentModel) -> Result<()> {
		self.run(doc, JobOp::Undo)
	}

	fn redo(&mut self, doc: &mut dyn DocumentModel) -> Result<()> {
		self.run(doc, JobOp::Redo)
	}

	fn description(&self) -> String {
		self.description.clone()
	}
}
