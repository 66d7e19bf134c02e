//! Structured log entry accepted by the remote collector.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Reasons a log tuple is rejected before forwarding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogValidationError {
    #[error("Invalid stack: {0}. Must be one of {list}", list = Stack::names())]
    Stack(String),

    #[error("Invalid level: {0}. Must be one of {list}", list = Level::names())]
    Level(String),

    #[error("Invalid package: {0}. Must be one of {list}", list = Package::names())]
    Package(String),

    #[error("Message must be a non-empty string")]
    EmptyMessage,
}

/// Which side of the system produced the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stack {
    Backend,
    Frontend,
}

impl Stack {
    pub const ALL: &'static [Stack] = &[Stack::Backend, Stack::Frontend];

    pub fn as_str(self) -> &'static str {
        match self {
            Stack::Backend => "backend",
            Stack::Frontend => "frontend",
        }
    }

    fn names() -> String {
        join(Self::ALL.iter().map(|s| s.as_str()))
    }
}

impl FromStr for Stack {
    type Err = LogValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| LogValidationError::Stack(s.to_string()))
    }
}

/// Severity of the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Level {
    pub const ALL: &'static [Level] = &[
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }

    fn names() -> String {
        join(Self::ALL.iter().map(|l| l.as_str()))
    }
}

impl FromStr for Level {
    type Err = LogValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| LogValidationError::Level(s.to_string()))
    }
}

/// Subsystem tag of the entry.
///
/// Tags are grouped into backend-only, frontend-only and shared sets; any tag
/// is accepted with either stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Package {
    Cache,
    Controller,
    CronJob,
    Db,
    Domain,
    Handler,
    Repository,
    Route,
    Service,
    Api,
    Component,
    Hook,
    Page,
    State,
    Style,
    Auth,
    Config,
    Middleware,
    Utils,
}

impl Package {
    pub const BACKEND: &'static [Package] = &[
        Package::Cache,
        Package::Controller,
        Package::CronJob,
        Package::Db,
        Package::Domain,
        Package::Handler,
        Package::Repository,
        Package::Route,
        Package::Service,
    ];

    pub const FRONTEND: &'static [Package] = &[
        Package::Api,
        Package::Component,
        Package::Hook,
        Package::Page,
        Package::State,
        Package::Style,
    ];

    pub const SHARED: &'static [Package] = &[
        Package::Auth,
        Package::Config,
        Package::Middleware,
        Package::Utils,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Package::Cache => "cache",
            Package::Controller => "controller",
            Package::CronJob => "cron_job",
            Package::Db => "db",
            Package::Domain => "domain",
            Package::Handler => "handler",
            Package::Repository => "repository",
            Package::Route => "route",
            Package::Service => "service",
            Package::Api => "api",
            Package::Component => "component",
            Package::Hook => "hook",
            Package::Page => "page",
            Package::State => "state",
            Package::Style => "style",
            Package::Auth => "auth",
            Package::Config => "config",
            Package::Middleware => "middleware",
            Package::Utils => "utils",
        }
    }

    /// Every accepted tag, backend group first.
    pub fn all() -> impl Iterator<Item = Package> {
        Self::BACKEND
            .iter()
            .chain(Self::FRONTEND)
            .chain(Self::SHARED)
            .copied()
    }

    /// True if the tag is meant for `stack` (its own group or the shared one).
    pub fn belongs_to(self, stack: Stack) -> bool {
        let own = match stack {
            Stack::Backend => Self::BACKEND,
            Stack::Frontend => Self::FRONTEND,
        };
        own.contains(&self) || Self::SHARED.contains(&self)
    }

    fn names() -> String {
        join(Self::all().map(|p| p.as_str()))
    }
}

impl FromStr for Package {
    type Err = LogValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| LogValidationError::Package(s.to_string()))
    }
}

macro_rules! display_as_str {
    ($($t:ty),*) => {$(
        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    )*};
}

display_as_str!(Stack, Level, Package);

fn join<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

/// A validated log entry, serialized as the collector's request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub stack: Stack,
    pub level: Level,
    pub package: Package,
    pub message: String,
}

impl LogEntry {
    /// Builds an entry from typed parts.
    ///
    /// # Errors
    ///
    /// Returns [`LogValidationError::EmptyMessage`] if `message` is empty.
    pub fn new(
        stack: Stack,
        level: Level,
        package: Package,
        message: impl Into<String>,
    ) -> Result<Self, LogValidationError> {
        let message = message.into();
        if message.is_empty() {
            return Err(LogValidationError::EmptyMessage);
        }

        Ok(Self {
            stack,
            level,
            package,
            message,
        })
    }

    /// Validates a raw tuple. Fields are checked in order: stack, level,
    /// package, message.
    pub fn parse(
        stack: &str,
        level: &str,
        package: &str,
        message: &str,
    ) -> Result<Self, LogValidationError> {
        Self::new(stack.parse()?, level.parse()?, package.parse()?, message)
    }
}
