// src/watch/events.rs

use notify::event::{EventKind, ModifyKind};

/// Kind of filesystem change, reduced to the categories the reload policy
/// distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Write,
    Create,
    Remove,
    Rename,
    Chmod,
}

impl ChangeKind {
    /// Map a raw notify event kind onto a [`ChangeKind`].
    ///
    /// Access events and anything else that does not describe a change to
    /// watched content return `None` and are dropped by the watcher.
    pub fn classify(kind: &EventKind) -> Option<Self> {
        match kind {
            EventKind::Create(_) => Some(Self::Create),
            EventKind::Remove(_) => Some(Self::Remove),
            EventKind::Modify(ModifyKind::Name(_)) => Some(Self::Rename),
            EventKind::Modify(ModifyKind::Metadata(_)) => Some(Self::Chmod),
            EventKind::Modify(_) => Some(Self::Write),
            _ => None,
        }
    }

    /// Only plain content writes trigger a hot reload.
    pub fn triggers_reload(self) -> bool {
        matches!(self, Self::Write)
    }
}
