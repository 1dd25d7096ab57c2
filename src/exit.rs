// src/exit.rs
//! Standardized process exit codes for `bplint`.
//!
//! Provides a stable contract for build scripts and CI.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum BplintExit {
    /// Every expected file was found and scanned. Warnings do not count.
    Success = 0,
    /// At least one expected file was missing or unreadable.
    CheckFailed = 1,
    /// Configuration or internal error (bad config file, invalid pattern).
    Error = 2,
}

impl BplintExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps a run verdict onto the exit contract.
    #[must_use]
    pub fn from_pass(passed: bool) -> Self {
        if passed {
            Self::Success
        } else {
            Self::CheckFailed
        }
    }
}

impl Termination for BplintExit {
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn report(self) -> std::process::ExitCode {
        std::process::ExitCode::from(self.code() as u8)
    }
}
