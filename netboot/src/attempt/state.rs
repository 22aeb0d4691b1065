//! State trait definition for the boot attempt state machine.
//!
//! Follows the State design pattern where each pipeline stage is a separate
//! type implementing a common trait. Transitions consume `self` and return
//! the next boxed state.

extern crate alloc;
use alloc::boxed::Box;

use super::context::AttemptContext;
use super::BootStage;
use crate::services::BootServices;

/// Result of a single state machine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Moved on to the returned state
    Transition,
    /// Attempt succeeded
    Done,
    /// Attempt failed in this stage; details are in the context
    Failed(BootStage),
}

/// One stage of a boot attempt.
pub trait State<S: BootServices> {
    /// Run this stage once.
    ///
    /// Stage calls block until the collaborator reports an outcome, so every
    /// step ends in a transition or a terminal result.
    fn step(
        self: Box<Self>,
        ctx: &mut AttemptContext<S::Image>,
        services: &mut S,
    ) -> (Box<dyn State<S>>, StepResult);

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Whether this is a terminal state.
    fn is_terminal(&self) -> bool {
        false
    }
}
