//! The per-file routing state machine and the stage loop

use crate::path;
use crate::resolve::{resolve, GlobMatcher};
use routecp_config::StageConfig;
use routecp_io::{copy_file, ensure_dir, TransferOptions};
use routecp_types::{ContentKind, CopyOutcome, Error, FileObject, PatternMatcher, Result, StageStats};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

/// The file-routing-and-copy stage
///
/// For each incoming [`FileObject`] the stage resolves a destination root,
/// rewrites the relative path, provisions the destination directory tree,
/// streams a byte-for-byte copy, and reassigns the object's `path` so
/// downstream stages observe the new location. Contentless objects pass
/// through untouched; open-stream objects are rejected.
///
/// The configuration is validated at construction and immutable afterwards.
#[derive(Debug)]
pub struct CopyStage<M = GlobMatcher> {
    config: Arc<StageConfig>,
    matcher: M,
    transfer: TransferOptions,
}

impl CopyStage<GlobMatcher> {
    /// Create a stage with the default glob-backed matcher
    pub fn new(config: StageConfig) -> Result<Self> {
        Self::with_matcher(config, GlobMatcher)
    }
}

impl<M: PatternMatcher> CopyStage<M> {
    /// Create a stage with a custom pattern matcher
    ///
    /// Fails with [`Error::InvalidConfiguration`] before any file is
    /// processed when the configuration is malformed.
    pub fn with_matcher(config: StageConfig, matcher: M) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            matcher,
            transfer: TransferOptions::default(),
        })
    }

    /// Override the transfer options
    pub fn with_transfer_options(mut self, transfer: TransferOptions) -> Self {
        self.transfer = transfer;
        self
    }

    /// Get the stage configuration
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Route and copy one file object
    ///
    /// Emits exactly one outcome per input: the object is either forwarded
    /// (possibly rewritten) or the error is terminal for the run. On
    /// success with content, `file.path` points at the copy.
    pub async fn process(&self, file: &mut FileObject) -> Result<CopyOutcome> {
        match file.content {
            ContentKind::Stream => {
                return Err(Error::streaming_unsupported(&file.path));
            }
            ContentKind::Empty => {
                debug!("passing through contentless object: {}", file.path.display());
                return Ok(CopyOutcome::PassedThrough);
            }
            ContentKind::Content => {}
        }

        let relative = path::relative_path(&file.base, &file.path);
        let stripped = path::strip_segments(&relative, self.config.prefix);

        // Routing always keys on the unstripped relative path.
        let root = resolve(&self.config.destination, &relative, &self.matcher)?;
        let target = root.join(stripped);

        if let Some(parent) = target.parent() {
            ensure_dir(parent).await?;
        }

        let bytes_copied = copy_file(&file.path, &target, &self.transfer).await?;

        debug!(
            "routed '{}' -> '{}' ({} bytes)",
            relative,
            target.display(),
            bytes_copied
        );

        // Downstream stages must observe the new location.
        file.path = target.clone();
        Ok(CopyOutcome::Copied {
            target,
            bytes_copied,
        })
    }

    /// Drive the stage over a whole pipeline run
    ///
    /// Consumes file objects strictly one at a time in arrival order and
    /// forwards each transformed object downstream before receiving the
    /// next; the bounded channels give the demand-driven flow control. The
    /// first per-file failure aborts the run. Returns the accumulated
    /// statistics once the input side closes.
    pub async fn run(
        &self,
        mut input: mpsc::Receiver<FileObject>,
        output: mpsc::Sender<FileObject>,
    ) -> Result<StageStats> {
        let started = Instant::now();
        let mut stats = StageStats::new();

        while let Some(mut file) = input.recv().await {
            let outcome = match self.process(&mut file).await {
                Ok(outcome) => outcome,
                Err(error) => {
                    error!("copy stage aborting the run: {}", error);
                    return Err(error);
                }
            };
            stats.record(&outcome);

            if output.send(file).await.is_err() {
                return Err(Error::other(
                    "downstream consumer dropped before the stage finished",
                ));
            }
        }

        stats.duration = started.elapsed();
        info!(
            "stage finished: {} copied, {} passed through, {} bytes",
            stats.files_copied, stats.files_passed_through, stats.bytes_copied
        );
        Ok(stats)
    }
}
