//! Executing state — hands control to the loaded image.

extern crate alloc;
use alloc::boxed::Box;

use crate::attempt::context::AttemptContext;
use crate::attempt::state::{State, StepResult};
use crate::attempt::BootStage;
use crate::error::BootError;
use crate::services::BootServices;

use super::{DoneState, FailedState};

pub struct ExecuteState;

impl ExecuteState {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ExecuteState {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BootServices> State<S> for ExecuteState {
    fn step(
        self: Box<Self>,
        ctx: &mut AttemptContext<S::Image>,
        services: &mut S,
    ) -> (Box<dyn State<S>>, StepResult) {
        let result = match ctx.image.as_mut() {
            Some(image) => services.execute_image(image),
            None => Err(BootError::NotExecutable),
        };

        if let Err(err) = result {
            log::warn!(
                "[BOOT] Could not execute {}: {}",
                ctx.filename.as_deref().unwrap_or(""),
                err
            );
            ctx.fail(BootStage::Execute, err);
            return FailedState::enter(BootStage::Execute);
        }

        (Box::new(DoneState::new()), StepResult::Transition)
    }

    fn name(&self) -> &'static str {
        "Executing"
    }
}
