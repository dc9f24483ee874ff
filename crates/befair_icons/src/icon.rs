//! Icon identifiers

use std::fmt;
use std::str::FromStr;

use crate::error::IconError;

/// The procedural icons available to buttons and input fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// Right-pointing arrow used by action buttons
    ArrowRight,
    /// Envelope shown in the email field
    Email,
    /// Padlock shown in the password field
    Lock,
    /// Eye used as the password visibility toggle
    Eye,
}

impl IconKind {
    /// Every icon, in declaration order
    pub const ALL: [IconKind; 4] = [
        IconKind::ArrowRight,
        IconKind::Email,
        IconKind::Lock,
        IconKind::Eye,
    ];

    /// Stable snake_case name
    pub const fn name(self) -> &'static str {
        match self {
            IconKind::ArrowRight => "arrow_right",
            IconKind::Email => "email",
            IconKind::Lock => "lock",
            IconKind::Eye => "eye",
        }
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IconKind {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| IconError::Config(format!("Unknown icon: {s}")))
    }
}
