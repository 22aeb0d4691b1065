//! Boot error types

extern crate alloc;

use alloc::string::String;
use core::fmt;

pub type Result<T> = core::result::Result<T, BootError>;

/// Errors reported by boot collaborators.
///
/// None of these abort the autoboot procedure. They are carried inside a
/// [`StageFailure`](crate::attempt::StageFailure) and the orchestrator moves
/// on to the next device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootError {
    /// Driver-level error with description.
    DeviceError(String),
    LinkDown,
    DhcpTimeout,
    /// Address configuration finished without a usable lease.
    NoLease,
    /// Routing table has no free entry.
    RouteTableFull,
    /// DHCP did not provide a boot file name.
    NoBootFilename,
    NotFound,
    ConnectionFailed,
    Timeout,
    InvalidImage,
    NotExecutable,
    /// Image ran and handed back an error.
    ExecFailed(String),
    OutOfMemory,
    Unknown,
}

impl fmt::Display for BootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceError(msg) => write!(f, "Device error: {}", msg),
            Self::LinkDown => write!(f, "Link down"),
            Self::DhcpTimeout => write!(f, "DHCP timed out"),
            Self::NoLease => write!(f, "No DHCP lease"),
            Self::RouteTableFull => write!(f, "Routing table full"),
            Self::NoBootFilename => write!(f, "No boot filename"),
            Self::NotFound => write!(f, "No such file or directory"),
            Self::ConnectionFailed => write!(f, "Connection failed"),
            Self::Timeout => write!(f, "Operation timed out"),
            Self::InvalidImage => write!(f, "Invalid image format"),
            Self::NotExecutable => write!(f, "Image is not executable"),
            Self::ExecFailed(msg) => write!(f, "Execution failed: {}", msg),
            Self::OutOfMemory => write!(f, "Out of memory"),
            Self::Unknown => write!(f, "Unknown error"),
        }
    }
}
