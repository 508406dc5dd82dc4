/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;
mod snapshot_writer;

pub use file_reader::FileSystemReader;
pub use file_writer::{
    extract_stdout_snapshot, FileSystemWriter, StdoutPresenter, SNAPSHOT_BEGIN_MARKER,
    SNAPSHOT_END_MARKER,
};
pub use snapshot_writer::SnapshotWriter;
