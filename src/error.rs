/// Failures while building the initial forest.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
	/// The seed document is not valid JSON or does not match the schema.
	#[error("malformed seed document: {0}")]
	Malformed(#[from] serde_json::Error),

	/// `selected` names a category the document does not define.
	#[error("seed selects unknown category {0:?}")]
	UnknownCategory(String),
}
