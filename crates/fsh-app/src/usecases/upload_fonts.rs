//! Upload pipeline.
//!
//! One batch runs `Idle -> Validating -> PerFileProcessing -> Finalizing -> Idle`.
//! Batch-level guards reject everything before a single file is touched;
//! per-file failures are reported as they happen and never stop the batch.

use fsh_core::limits::{is_accepted_extension, MAX_FILE_BYTES, MAX_RECORDS, SIGNATURE_LEN};
use fsh_core::ports::UploadSource;
use fsh_core::{
    FileName, FontBlob, FontFormat, FontRecord, MimeType, Notification, QuotaError, ShelfError,
    UploadPhase, UploadProgress, ValidationError,
};
use tracing::{debug, info, warn};

use crate::busy::BusyFlag;
use crate::deps::ShelfDeps;
use crate::state::{lock, SharedState};

#[derive(Debug)]
pub enum UploadOutcome {
    /// Another batch or a clear was running; nothing happened.
    Skipped,
    /// The batch failed a guard; zero records were written.
    Rejected(ShelfError),
    Completed(UploadReport),
}

#[derive(Debug, Default)]
pub struct UploadReport {
    /// Files stored, in input order.
    pub succeeded: Vec<FileName>,
    /// Files refused or failed, in input order.
    pub failures: Vec<(FileName, ShelfError)>,
    /// Files without an accepted extension, dropped before processing.
    pub skipped: usize,
}

impl UploadReport {
    pub fn success_count(&self) -> usize {
        self.succeeded.len()
    }
}

pub struct UploadFonts {
    deps: ShelfDeps,
    state: SharedState,
    busy: BusyFlag,
}

impl UploadFonts {
    pub fn new(deps: ShelfDeps, state: SharedState, busy: BusyFlag) -> Self {
        Self { deps, state, busy }
    }

    #[tracing::instrument(
        name = "usecase.upload_fonts.execute",
        skip(self, files),
        fields(batch_size = files.len())
    )]
    pub async fn execute(&self, files: Vec<Box<dyn UploadSource>>) -> UploadOutcome {
        let Some(_guard) = self.busy.try_acquire() else {
            debug!("busy, upload batch ignored");
            return UploadOutcome::Skipped;
        };

        let mut phase = UploadPhase::Idle;
        self.enter(&mut phase, UploadPhase::Validating);
        let accepted = match self.validate(files).await {
            Ok(accepted) => accepted,
            Err(err) => {
                self.enter(&mut phase, UploadPhase::Idle);
                return UploadOutcome::Rejected(err);
            }
        };

        self.enter(&mut phase, UploadPhase::PerFileProcessing);
        let mut report = UploadReport {
            skipped: accepted.skipped,
            ..UploadReport::default()
        };
        let total = accepted.files.len();
        for (index, file) in accepted.files.iter().enumerate() {
            let file_name = FileName::from(file.file_name());
            match self.process_file(file.as_ref()).await {
                Ok(()) => {
                    debug!(file_name = %file_name, "font stored");
                    report.succeeded.push(file_name);
                }
                Err(err) => {
                    warn!(file_name = %file_name, error = %err, "font rejected");
                    self.deps.notifier.notify(Notification::error(err.to_string()));
                    report.failures.push((file_name, err));
                }
            }

            self.deps.progress.progress(UploadProgress {
                completed: index + 1,
                total,
            });
            if index + 1 < total {
                self.deps.frame.yield_frame().await;
            }
        }

        self.enter(&mut phase, UploadPhase::Finalizing);
        self.finalize(&report).await;
        self.enter(&mut phase, UploadPhase::Idle);

        info!(
            succeeded = report.succeeded.len(),
            failed = report.failures.len(),
            skipped = report.skipped,
            "upload batch finished"
        );
        UploadOutcome::Completed(report)
    }

    fn enter(&self, phase: &mut UploadPhase, next: UploadPhase) {
        debug_assert!(phase.can_advance_to(next), "{phase:?} -> {next:?}");
        *phase = next;
        self.deps.progress.phase_changed(next);
    }

    /// Batch guards. Each refusal emits exactly one notification.
    async fn validate(
        &self,
        files: Vec<Box<dyn UploadSource>>,
    ) -> Result<AcceptedBatch, ShelfError> {
        let current = lock(&self.state).registry.len();
        if current + files.len() > MAX_RECORDS {
            let err = ValidationError::LimitExceeded {
                current,
                incoming: files.len(),
                limit: MAX_RECORDS,
            };
            self.deps.notifier.notify(Notification::error(err.to_string()));
            return Err(err.into());
        }

        let incoming = files.len();
        let files: Vec<_> = files
            .into_iter()
            .filter(|f| {
                FileName::from(f.file_name())
                    .extension()
                    .is_some_and(|ext| is_accepted_extension(&ext))
            })
            .collect();
        if files.is_empty() {
            let err = ValidationError::NoAcceptedFiles;
            self.deps.notifier.notify(Notification::error(err.to_string()));
            return Err(err.into());
        }

        let total_bytes: u64 = files.iter().map(|f| f.size()).sum();
        if let Some(estimate) = self.deps.quota.estimate().await {
            if estimate.available() < total_bytes {
                let err = QuotaError {
                    required: total_bytes,
                    available: estimate.available(),
                };
                self.deps.notifier.notify(Notification::warning(err.to_string()));
                return Err(err.into());
            }
        }

        let skipped = incoming - files.len();
        if skipped > 0 {
            self.deps.notifier.notify(Notification::warning(format!(
                "Skipped {skipped} file(s) that are not .ttf, .otf, .woff or .woff2"
            )));
        }

        Ok(AcceptedBatch { files, skipped })
    }

    async fn process_file(&self, file: &dyn UploadSource) -> Result<(), ShelfError> {
        let file_name = FileName::from(file.file_name());

        if file.size() > MAX_FILE_BYTES {
            return Err(ValidationError::TooLarge {
                file_name: file_name.into_inner(),
                size: file.size(),
                limit: MAX_FILE_BYTES,
            }
            .into());
        }

        let head = file.read_prefix(SIGNATURE_LEN).await?;
        let Some(format) = FontFormat::sniff(&head) else {
            return Err(ValidationError::BadSignature {
                file_name: file_name.into_inner(),
                found: FontFormat::signature(&head),
            }
            .into());
        };

        let bytes = file.read_all().await?;
        let content_type = file
            .content_type()
            .map(str::trim)
            .filter(|ct| !ct.is_empty())
            .map(MimeType::from)
            .unwrap_or_else(|| format.mime_type());

        let existing_tag = self
            .deps
            .store
            .get(&file_name)
            .await?
            .and_then(|existing| existing.user_tag);

        let record = FontRecord::new(file_name, FontBlob::new(bytes, content_type))
            .with_tag(existing_tag);
        self.deps.store.put(&record).await?;
        Ok(())
    }

    /// Reloads the registry from the store and reports the success count.
    async fn finalize(&self, report: &UploadReport) {
        match self.deps.store.get_all().await {
            Ok(records) => {
                let mut state = lock(&self.state);
                // Re-uploaded names get fresh faces and cards bound to the new bytes.
                for name in &report.succeeded {
                    if state.registry.contains(name) {
                        state.faces.release(
                            name,
                            self.deps.object_urls.as_ref(),
                            self.deps.style_sheet.as_ref(),
                        );
                        state.renderer.forget(name, self.deps.view.as_ref());
                    }
                }
                state.registry.replace_all(records);
                state.rerender(&self.deps);
            }
            Err(err) => {
                warn!(error = %err, "failed to reload library after upload");
                self.deps
                    .notifier
                    .notify(Notification::error(format!("Could not reload fonts: {err}")));
            }
        }

        let count = report.succeeded.len();
        if count > 0 {
            let noun = if count == 1 { "font" } else { "fonts" };
            self.deps
                .notifier
                .notify(Notification::success(format!("Added {count} {noun}")));
        }
    }
}

struct AcceptedBatch {
    files: Vec<Box<dyn UploadSource>>,
    skipped: usize,
}
