//! Idle state — entry point of every attempt.

extern crate alloc;
use alloc::boxed::Box;

use crate::attempt::context::AttemptContext;
use crate::attempt::state::{State, StepResult};
use crate::services::BootServices;

use super::OpenState;

/// Initial state. Announces the device and moves on to opening it.
pub struct IdleState;

impl IdleState {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IdleState {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BootServices> State<S> for IdleState {
    fn step(
        self: Box<Self>,
        ctx: &mut AttemptContext<S::Image>,
        _services: &mut S,
    ) -> (Box<dyn State<S>>, StepResult) {
        log::info!("[BOOT] Trying {}", ctx.device);
        (Box::new(OpenState::new()), StepResult::Transition)
    }

    fn name(&self) -> &'static str {
        "Idle"
    }
}
