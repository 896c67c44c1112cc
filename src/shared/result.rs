/// Result alias used by the application and adapter layers.
///
/// Domain operations with a closed error set return [`SubmissionError`](super::error::SubmissionError)
/// directly; everything above them funnels through `anyhow` so context can be attached.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
