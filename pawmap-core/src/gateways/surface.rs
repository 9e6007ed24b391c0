use std::fmt;

use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(s)
    }
}

/// User-facing feedback: toasts and blocking yes/no questions.
#[async_trait(?Send)]
pub trait ConfirmationSurface {
    fn notify(&self, kind: NoticeKind, message: &str);

    /// Resolves to `true` only on explicit confirmation.
    async fn confirm(&self, message: &str) -> bool;
}
