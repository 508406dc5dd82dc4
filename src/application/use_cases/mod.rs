/// Use cases module containing application business logic orchestration
mod detect_components;
mod parse_conda_environments;
mod submit_snapshot;

pub use detect_components::DetectComponentsUseCase;
pub use parse_conda_environments::ParseCondaEnvironmentsUseCase;
pub use submit_snapshot::SubmitSnapshotUseCase;
