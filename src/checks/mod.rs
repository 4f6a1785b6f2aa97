use std::fmt;

pub mod format;
pub mod lint;
pub mod runner;
pub mod typecheck;

/// Quality check categories, one per external tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    Format,
    Lint,
    Typecheck,
    Test,
}

impl CheckKind {
    pub const ALL: [CheckKind; 4] = [
        CheckKind::Format,
        CheckKind::Lint,
        CheckKind::Typecheck,
        CheckKind::Test,
    ];

    /// Checks that carry their own enabled flag, in reporting order
    pub const GATES: [CheckKind; 3] = [CheckKind::Lint, CheckKind::Typecheck, CheckKind::Test];

    pub fn name(self) -> &'static str {
        match self {
            CheckKind::Format => "format",
            CheckKind::Lint => "lint",
            CheckKind::Typecheck => "typecheck",
            CheckKind::Test => "test",
        }
    }

    /// Capitalised name for user-facing confirmations
    pub fn title(self) -> &'static str {
        match self {
            CheckKind::Format => "Format",
            CheckKind::Lint => "Lint",
            CheckKind::Typecheck => "Typecheck",
            CheckKind::Test => "Test",
        }
    }

    /// The check whose enabled flag decides whether this one runs.
    /// Formatting shares ruff with linting, so it follows the lint flag.
    pub fn gate(self) -> CheckKind {
        match self {
            CheckKind::Format => CheckKind::Lint,
            other => other,
        }
    }

    /// File name of the tracking list feeding this check
    pub fn tracking_file(self) -> &'static str {
        match self {
            CheckKind::Format => "edited-files.txt",
            CheckKind::Lint => "lint-files.txt",
            CheckKind::Typecheck => "typecheck-files.txt",
            CheckKind::Test => "test-files.txt",
        }
    }

    pub fn from_name(name: &str) -> Option<CheckKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Look up a check that can be toggled by name
    pub fn gate_from_name(name: &str) -> Option<CheckKind> {
        Self::from_name(name).filter(|kind| kind.gate() == *kind)
    }

    /// Comma-separated list of toggleable check names
    pub fn gate_names() -> String {
        Self::GATES.map(CheckKind::name).join(", ")
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
