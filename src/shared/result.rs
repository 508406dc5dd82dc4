/// Crate-wide Result alias backed by `anyhow::Error`.
///
/// Typed failures are raised as `DetectionError` and converted with `?`,
/// so callers can still downcast when they need the variant.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
