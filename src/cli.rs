use clap::{Parser, Subcommand};
use std::process;

use component_detection_submission::ports::outbound::PlatformKind;
use component_detection_submission::shared::error::ExitCode;

/// `--platform` value; overrides detection from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformArg {
    GitHubActions,
    AzureDevOps,
}

impl std::str::FromStr for PlatformArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "github" | "github-actions" => Ok(PlatformArg::GitHubActions),
            "azure-devops" | "ado" => Ok(PlatformArg::AzureDevOps),
            _ => Err(format!(
                "Invalid platform: {}. Please specify 'github-actions' or 'azure-devops'",
                s
            )),
        }
    }
}

impl From<PlatformArg> for PlatformKind {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::GitHubActions => PlatformKind::GitHubActions,
            PlatformArg::AzureDevOps => PlatformKind::AzureDevOps,
        }
    }
}

/// Run component-detection and submit the result as a dependency snapshot
#[derive(Parser, Debug)]
#[command(name = "component-detection-submission")]
#[command(version)]
#[command(
    about = "Run component-detection and submit the result to the GitHub dependency graph",
    long_about = None
)]
pub struct Args {
    /// Host CI platform: github-actions or azure-devops (detected when omitted)
    #[arg(long, global = true)]
    pub platform: Option<PlatformArg>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan with component-detection and submit the snapshot (default)
    Detect(DetectArgs),
    /// Build a snapshot from conda environment files
    Conda(CondaArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct DetectArgs {
    /// Result file component-detection writes (or already wrote)
    #[arg(long, value_name = "FILE")]
    pub result_file: Option<String>,

    /// Location of the component-detection executable
    #[arg(long, value_name = "FILE")]
    pub scanner_path: Option<String>,

    /// Do not download component-detection; use the existing executable
    #[arg(long)]
    pub skip_download: bool,

    /// Do not run component-detection; read an existing result file
    #[arg(long)]
    pub skip_scan: bool,

    /// Write the snapshot to a file ("-" for stdout) instead of submitting it
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,
}

#[derive(clap::Args, Debug, Default)]
pub struct CondaArgs {
    /// Directory searched for environment files (overrides the filePath input)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Glob for environment files (overrides the filePattern input)
    #[arg(long, value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Write the snapshot to a file ("-" for stdout) instead of submitting it
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,
}

impl Args {
    /// Parses the process arguments, exiting on `--help`, `--version` or a
    /// usage error.
    pub fn parse_args() -> Self {
        Self::try_parse().unwrap_or_else(|e| {
            let _ = e.print();
            process::exit(exit_code_for(&e).as_i32())
        })
    }
}

fn exit_code_for(error: &clap::Error) -> ExitCode {
    if error.use_stderr() {
        ExitCode::InvalidArguments
    } else {
        ExitCode::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_platform_from_str() {
        assert_eq!(
            PlatformArg::from_str("github-actions").unwrap(),
            PlatformArg::GitHubActions
        );
        assert_eq!(PlatformArg::from_str("GitHub").unwrap(), PlatformArg::GitHubActions);
        assert_eq!(
            PlatformArg::from_str("azure-devops").unwrap(),
            PlatformArg::AzureDevOps
        );
        assert_eq!(PlatformArg::from_str("ADO").unwrap(), PlatformArg::AzureDevOps);
    }

    #[test]
    fn test_platform_from_str_invalid() {
        let error = PlatformArg::from_str("jenkins").unwrap_err();
        assert!(error.contains("Invalid platform"));
    }

    #[test]
    fn test_exit_code_for_parse_errors() {
        let error = Args::try_parse_from(["component-detection-submission", "--bogus"]).unwrap_err();
        assert_eq!(exit_code_for(&error), ExitCode::InvalidArguments);

        let help = Args::try_parse_from(["component-detection-submission", "--help"]).unwrap_err();
        assert_eq!(exit_code_for(&help), ExitCode::Success);
    }

    #[test]
    fn test_no_subcommand_means_detect() {
        let args = Args::try_parse_from(["component-detection-submission"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.platform.is_none());
    }

    #[test]
    fn test_detect_flags() {
        let args = Args::try_parse_from([
            "component-detection-submission",
            "detect",
            "--skip-download",
            "--skip-scan",
            "--result-file",
            "scan.json",
            "--output",
            "-",
            "--platform",
            "ado",
        ])
        .unwrap();

        assert_eq!(args.platform, Some(PlatformArg::AzureDevOps));
        let Some(Command::Detect(detect)) = args.command else {
            panic!("expected detect subcommand");
        };
        assert!(detect.skip_download);
        assert!(detect.skip_scan);
        assert_eq!(detect.result_file.as_deref(), Some("scan.json"));
        assert_eq!(detect.output.as_deref(), Some("-"));
    }

    #[test]
    fn test_conda_flags() {
        let args = Args::try_parse_from([
            "component-detection-submission",
            "conda",
            "--path",
            "envs",
            "--pattern",
            "*.yml",
        ])
        .unwrap();

        let Some(Command::Conda(conda)) = args.command else {
            panic!("expected conda subcommand");
        };
        assert_eq!(conda.path.as_deref(), Some("envs"));
        assert_eq!(conda.pattern.as_deref(), Some("*.yml"));
        assert!(conda.output.is_none());
    }
}
