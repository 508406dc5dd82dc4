use crate::ports::outbound::ScannerInstaller;
use crate::shared::error::DetectionError;
use crate::shared::Result;
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Releases are always fetched from github.com, also on GHES.
const RELEASES_API_URL: &str = "https://api.github.com";
const SCANNER_OWNER: &str = "microsoft";
const SCANNER_REPO: &str = "component-detection";

#[derive(Debug, Deserialize)]
struct Release {
    #[serde(default)]
    tag_name: Option<String>,
    #[serde(default)]
    assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Deserialize)]
struct ReleaseAsset {
    name: String,
    browser_download_url: String,
}

/// GitHubReleaseInstaller adapter for downloading component-detection
///
/// This adapter implements the ScannerInstaller port: it looks up the
/// latest `microsoft/component-detection` release, downloads the asset for
/// the current OS and writes it as an executable.
pub struct GitHubReleaseInstaller {
    client: reqwest::Client,
    token: Option<String>,
    asset_name: &'static str,
    max_retries: u32,
}

impl GitHubReleaseInstaller {
    /// Creates an installer for the current OS.
    ///
    /// # Arguments
    /// * `token` - GitHub token used for the release lookup
    /// * `ghes_mode` - `true` when the job runs against GitHub Enterprise
    ///   Server; its token means nothing to github.com, so none is sent
    pub fn new(token: Option<String>, ghes_mode: bool) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("component-detection-submission/{}", version);
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(300))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            token: if ghes_mode { None } else { token },
            asset_name: Self::asset_name_for(std::env::consts::OS),
            max_retries: 3,
        })
    }

    /// Release asset to download for an OS as named by `std::env::consts::OS`.
    pub fn asset_name_for(os: &str) -> &'static str {
        if os == "windows" {
            "component-detection-win-x64.exe"
        } else {
            "component-detection-linux-x64"
        }
    }

    fn download_url(release: &Release, asset_name: &str) -> Option<String> {
        release
            .assets
            .iter()
            .find(|asset| asset.name == asset_name)
            .map(|asset| asset.browser_download_url.clone())
    }

    async fn fetch_latest_release(&self) -> Result<Release> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.request_latest_release().await {
                Ok(release) => return Ok(release),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(500 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow::anyhow!("No release lookup was attempted")))
    }

    async fn request_latest_release(&self) -> Result<Release> {
        let url = format!(
            "{}/repos/{}/{}/releases/latest",
            RELEASES_API_URL, SCANNER_OWNER, SCANNER_REPO
        );

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            anyhow::bail!("GitHub releases API returned status code {}", response.status());
        }

        Ok(response.json::<Release>().await?)
    }

    async fn download(&self, url: &str, destination: &Path) -> Result<()> {
        let mut response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("Download of {} returned status code {}", url, response.status());
        }

        let progress = match response.content_length() {
            Some(total) => ProgressBar::new(total),
            None => ProgressBar::new_spinner(),
        };
        if let Ok(style) = ProgressStyle::default_bar()
            .template("   {spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} - {msg}")
        {
            progress.set_style(style.progress_chars("=>-"));
        }
        progress.set_message(self.asset_name);

        let parent = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = tempfile::NamedTempFile::new_in(parent)?;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk)?;
            progress.inc(chunk.len() as u64);
        }
        file.flush()?;
        progress.finish_and_clear();

        make_executable(file.path())?;
        file.persist(destination)
            .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", destination.display(), e))?;
        Ok(())
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o777))?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[async_trait]
impl ScannerInstaller for GitHubReleaseInstaller {
    async fn install(&self, destination: &Path) -> Result<()> {
        let release = self
            .fetch_latest_release()
            .await
            .map_err(|e| DetectionError::ScannerDownloadFailed {
                details: format!("Failed to look up the latest release: {}", e),
            })?;

        let url = Self::download_url(&release, self.asset_name).ok_or_else(|| {
            DetectionError::ScannerDownloadFailed {
                details: format!(
                    "Release {} has no asset named {}",
                    release.tag_name.as_deref().unwrap_or("latest"),
                    self.asset_name
                ),
            }
        })?;

        self.download(&url, destination)
            .await
            .map_err(|e| DetectionError::ScannerDownloadFailed {
                details: e.to_string(),
            })?;

        Ok(())
    }
}
