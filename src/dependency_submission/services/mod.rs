mod conda_environment_parser;
mod manifest_builder;
mod path_normalizer;

pub use conda_environment_parser::{CondaEnvironmentParser, CondaParseOutcome};
pub use manifest_builder::{ManifestBuildOutcome, ManifestBuilder};
pub use path_normalizer::PathNormalizer;
