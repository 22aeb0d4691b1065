//! Context shared between the states of one boot attempt.

extern crate alloc;

use alloc::string::String;

use super::{BootStage, StageFailure};
use crate::device::NetDevice;
use crate::error::BootError;
use crate::services::Lease;

/// Per-attempt state handed from stage to stage.
///
/// Created for one device and dropped when the attempt ends.
pub struct AttemptContext<I> {
    /// Device under attempt
    pub device: NetDevice,
    /// Boot filename length limit in bytes
    pub filename_limit: usize,
    /// Lease from address configuration
    pub lease: Option<Lease>,
    /// Resolved boot filename
    pub filename: Option<String>,
    /// Fetched image
    pub image: Option<I>,
    /// Set by the stage that failed
    pub failure: Option<StageFailure>,
}

impl<I> AttemptContext<I> {
    pub fn new(device: NetDevice, filename_limit: usize) -> Self {
        Self {
            device,
            filename_limit,
            lease: None,
            filename: None,
            image: None,
            failure: None,
        }
    }

    /// Record a failure of `stage`, tagged with the boot filename if one
    /// has been resolved.
    pub fn fail(&mut self, stage: BootStage, cause: BootError) {
        self.failure = Some(StageFailure {
            stage,
            cause,
            artifact: self.filename.clone(),
        });
    }
}
