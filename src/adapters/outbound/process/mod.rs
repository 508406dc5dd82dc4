/// Process adapters for running external executables
mod scanner_runner;

pub use scanner_runner::ComponentDetectionRunner;
