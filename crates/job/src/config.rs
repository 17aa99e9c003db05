//! Labels used when describing batches.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a [`DescribeConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The TOML source could not be parsed.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Undo history labels for selection edits.
///
/// `batch_template` may use `{property}` and `{count}`; any other text is
/// kept verbatim.
///
/// ```toml
/// noop_label = "Nothing to set"
/// batch_template = "Set {property} on {count} items"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DescribeConfig {
	/// Label of a batch with no sub-jobs.
	pub noop_label: String,
	/// Label of a batch with more than one sub-job.
	pub batch_template: String,
}

impl Default for DescribeConfig {
	fn default() -> Self {
		Self {
			noop_label: "Unexecutable Set".to_string(),
			batch_template: "Set {property} on {count} elements".to_string(),
		}
	}
}

impl DescribeConfig {
	/// Parses a config from TOML, filling missing fields with defaults.
	pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}

	/// Renders the multi-target label.
	pub fn render_batch(&self, property: &str, count: usize) -> String {
		self.batch_template
			.replace("{property}", property)
			.replace("{count}", &count.to_string())
	}
}
