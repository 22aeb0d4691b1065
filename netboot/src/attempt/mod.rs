//! Boot attempt against a single device.
//!
//! # State Machine Flow
//! ```text
//! Idle → Opening → Configuring → RoutingSetup → ResolvingFilename
//!      → Fetching → Loading → Executing → Done
//! ```
//! Any stage error moves to `Failed`, which records the stage and cause.
//! Routing setup never fails the attempt. Nothing is retried.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::config::AutobootConfig;
use crate::device::NetDevice;
use crate::error::BootError;
use crate::services::BootServices;

pub mod context;
pub mod state;
pub mod states;

pub use context::AttemptContext;
pub use state::{State, StepResult};
pub use states::IdleState;

/// Pipeline stage a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootStage {
    Open,
    Configure,
    Route,
    Resolve,
    Fetch,
    Load,
    Execute,
}

impl BootStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            BootStage::Open => "open",
            BootStage::Configure => "configure",
            BootStage::Route => "route",
            BootStage::Resolve => "resolve",
            BootStage::Fetch => "fetch",
            BootStage::Load => "load",
            BootStage::Execute => "execute",
        }
    }
}

impl fmt::Display for BootStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an attempt stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageFailure {
    pub stage: BootStage,
    pub cause: BootError,
    /// Boot filename, once resolved.
    pub artifact: Option<String>,
}

impl StageFailure {
    pub fn new(stage: BootStage, cause: BootError) -> Self {
        Self {
            stage,
            cause,
            artifact: None,
        }
    }
}

impl fmt::Display for StageFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.artifact {
            Some(name) => write!(f, "{} {} failed: {}", self.stage, name, self.cause),
            None => write!(f, "{} failed: {}", self.stage, self.cause),
        }
    }
}

/// Result of one boot attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootOutcome {
    Success,
    Failure(StageFailure),
}

impl BootOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BootOutcome::Success)
    }

    /// Stage that failed, if any.
    pub fn failed_stage(&self) -> Option<BootStage> {
        match self {
            BootOutcome::Success => None,
            BootOutcome::Failure(failure) => Some(failure.stage),
        }
    }
}

/// Run the boot pipeline once against `device`.
pub fn attempt<S: BootServices>(
    services: &mut S,
    device: &NetDevice,
    config: &AutobootConfig,
) -> BootOutcome {
    let mut ctx = AttemptContext::new(device.clone(), config.filename_limit);
    let mut current_state: Box<dyn State<S>> = Box::new(IdleState::new());

    log::debug!("[BOOT] {}: state {}", device.name(), current_state.name());

    loop {
        let (next_state, result) = current_state.step(&mut ctx, services);
        current_state = next_state;

        match result {
            StepResult::Transition => {
                log::debug!("[BOOT] {}: state {}", device.name(), current_state.name());
            }
            StepResult::Done => {
                debug_assert!(current_state.is_terminal());
                return BootOutcome::Success;
            }
            StepResult::Failed(stage) => {
                debug_assert!(current_state.is_terminal());
                let failure = ctx
                    .failure
                    .take()
                    .unwrap_or_else(|| StageFailure::new(stage, BootError::Unknown));
                return BootOutcome::Failure(failure);
            }
        }
    }
}
