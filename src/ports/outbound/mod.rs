/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, processes, CI host).
pub mod environment_file_reader;
pub mod output_presenter;
pub mod platform;
pub mod scan_result_reader;
pub mod scanner;
pub mod snapshot_submitter;

pub use environment_file_reader::EnvironmentFileReader;
pub use output_presenter::OutputPresenter;
pub use platform::{ContextProvider, InputProvider, PlatformKind, PlatformLogger, PlatformProvider};
pub use scan_result_reader::ScanResultReader;
pub use scanner::{ScanInvocation, ScannerInstaller, ScannerRunner};
pub use snapshot_submitter::SnapshotSubmitter;
