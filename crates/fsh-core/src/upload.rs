//! Upload batch lifecycle.

/// Phase of one upload batch.
///
/// `Idle -> Validating -> PerFileProcessing -> Finalizing -> Idle`.
/// A batch rejected during validation goes straight back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    Idle,
    Validating,
    PerFileProcessing,
    Finalizing,
}

impl UploadPhase {
    /// Whether `next` is a legal successor of `self`.
    pub fn can_advance_to(self, next: UploadPhase) -> bool {
        use UploadPhase::*;
        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, PerFileProcessing)
                | (Validating, Idle)
                | (PerFileProcessing, Finalizing)
                | (Finalizing, Idle)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    pub completed: usize,
    pub total: usize,
}

impl UploadProgress {
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.completed as f64 / self.total as f64
    }
}
