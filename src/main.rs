mod cli;

use cli::{Args, Command, CondaArgs, DetectArgs};
use component_detection_submission::adapters::outbound::filesystem::{
    FileSystemReader, SnapshotWriter,
};
use component_detection_submission::adapters::outbound::network::{
    GitHubReleaseInstaller, GitHubSnapshotSubmitter,
};
use component_detection_submission::adapters::outbound::platform::{
    EnvironmentSnapshot, DEFAULT_API_URL,
};
use component_detection_submission::adapters::outbound::process::ComponentDetectionRunner;
use component_detection_submission::application::dto::{
    CondaRequest, ScanRequest, SnapshotRequest,
};
use component_detection_submission::application::factories::{
    PlatformFactory, PresenterFactory, PresenterType,
};
use component_detection_submission::application::use_cases::{
    DetectComponentsUseCase, ParseCondaEnvironmentsUseCase, SubmitSnapshotUseCase,
};
use component_detection_submission::config::ActionConfig;
use component_detection_submission::dependency_submission::domain::Manifest;
use component_detection_submission::ports::outbound::{
    ContextProvider, PlatformLogger, PlatformProvider, SnapshotSubmitter,
};
use component_detection_submission::shared::error::{DetectionError, ExitCode};
use component_detection_submission::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Resolve the host platform
    let env = EnvironmentSnapshot::from_process();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let kind = args
        .platform
        .map(Into::into)
        .unwrap_or_else(|| PlatformFactory::detect(&env));
    let platform = PlatformFactory::create(kind, env, cwd.clone());

    let outcome = match args.command {
        Some(Command::Conda(conda)) => run_conda(conda, platform.as_ref()).await,
        Some(Command::Detect(detect)) => run_detect(detect, platform.as_ref(), &cwd).await,
        None => run_detect(DetectArgs::default(), platform.as_ref(), &cwd).await,
    };

    if let Err(e) = outcome {
        platform.set_failed(&format!("{:#}", e));

        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::Failure.as_i32());
    }
}

async fn run_detect(args: DetectArgs, platform: &dyn PlatformProvider, cwd: &Path) -> Result<()> {
    let config = ActionConfig::from_inputs(platform, platform.kind())?;
    platform.debug(&format!("Running on {}", platform.kind()));

    // Create adapters (Dependency Injection)
    let ghes_mode = platform.api_url() != DEFAULT_API_URL;
    let installer = GitHubReleaseInstaller::new(config.token.clone(), ghes_mode)?;
    let runner = ComponentDetectionRunner::new();
    let reader = FileSystemReader::new();

    // Create use case with injected dependencies
    let use_case = DetectComponentsUseCase::new(installer, runner, reader, platform);

    // Create request
    let mut request = ScanRequest::new(config.file_path.clone(), cwd.to_path_buf())
        .with_scanner_arguments(config.scanner.to_arguments());
    if let Some(result_file) = &args.result_file {
        request = request.with_result_file(PathBuf::from(result_file));
    }
    if let Some(scanner_path) = &args.scanner_path {
        request = request.with_scanner_path(PathBuf::from(scanner_path));
    }
    request.download_scanner = !(args.skip_download || config.skip_download);
    request.run_scanner = !(args.skip_scan || config.skip_scan);

    // Execute use case
    let response = use_case.execute(request).await?;

    submit(response.manifests, &config, args.output.as_deref(), platform).await
}

async fn run_conda(args: CondaArgs, platform: &dyn PlatformProvider) -> Result<()> {
    let config = ActionConfig::from_inputs(platform, platform.kind())?;

    let root = platform
        .workspace()
        .join(args.path.as_deref().unwrap_or(&config.file_path));
    let pattern = args.pattern.clone().unwrap_or_else(|| config.file_pattern.clone());

    let use_case = ParseCondaEnvironmentsUseCase::new(FileSystemReader::new(), platform);
    let manifests = use_case.execute(CondaRequest::new(root, pattern))?;

    submit(manifests, &config, args.output.as_deref(), platform).await
}

async fn submit(
    manifests: Vec<Manifest>,
    config: &ActionConfig,
    output: Option<&str>,
    platform: &dyn PlatformProvider,
) -> Result<()> {
    let submitter: Box<dyn SnapshotSubmitter> = match output {
        Some(output) => Box::new(SnapshotWriter::new(PresenterFactory::create(
            PresenterType::from_output_arg(output),
        ))),
        None => {
            let token = config.token.clone().ok_or_else(|| DetectionError::MissingInput {
                name: "token".to_string(),
                hint: "Please provide a GitHub token, or use --output to write the snapshot to a file"
                    .to_string(),
            })?;
            let repository = match &config.github_repository {
                Some(repository) => repository.clone(),
                None => platform.repository()?,
            };
            Box::new(GitHubSnapshotSubmitter::new(
                &platform.api_url(),
                repository,
                token,
            )?)
        }
    };

    let request = SnapshotRequest {
        manifests,
        detector: config.detector.clone(),
        correlator: config
            .correlator
            .clone()
            .unwrap_or_else(|| platform.job_id()),
        job_id: platform.run_id(),
        sha: platform.sha(),
        git_ref: platform.git_ref(),
        sha_override: config.snapshot_sha.clone(),
        ref_override: config.snapshot_ref.clone(),
    };

    SubmitSnapshotUseCase::new(submitter, platform)
        .execute(request)
        .await?;
    Ok(())
}
