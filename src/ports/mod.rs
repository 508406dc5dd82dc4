/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the interfaces the application core
/// uses to reach the scanner, the file system, the host platform and the
/// GitHub API.
pub mod outbound;
