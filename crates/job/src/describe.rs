use trellis_properties::PropertyKey;

use crate::{DescribeConfig, Job};

/// Label for a batch that sets `key` through `sub_jobs`.
///
/// No sub-jobs gives the no-op label, a single sub-job lends its own
/// description, and larger batches get a summary naming the property and
/// the count so the label stays short however many nodes were edited.
pub fn describe_batch(sub_jobs: &[Box<dyn Job>], key: PropertyKey, config: &DescribeConfig) -> String {
	match sub_jobs {
		[] => config.noop_label.clone(),
		[only] => only.description(),
		_ => config.render_batch(key.name(), sub_jobs.len()),
	}
}
