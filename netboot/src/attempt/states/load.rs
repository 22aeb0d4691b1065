//! Loading state — prepares the fetched image.

extern crate alloc;
use alloc::boxed::Box;

use crate::attempt::context::AttemptContext;
use crate::attempt::state::{State, StepResult};
use crate::attempt::BootStage;
use crate::error::BootError;
use crate::services::BootServices;

use super::{ExecuteState, FailedState};

pub struct LoadState;

impl LoadState {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoadState {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BootServices> State<S> for LoadState {
    fn step(
        self: Box<Self>,
        ctx: &mut AttemptContext<S::Image>,
        services: &mut S,
    ) -> (Box<dyn State<S>>, StepResult) {
        let result = match ctx.image.as_mut() {
            Some(image) => services.load_image(image),
            None => Err(BootError::InvalidImage),
        };

        if let Err(err) = result {
            log::warn!(
                "[BOOT] Could not load {}: {}",
                ctx.filename.as_deref().unwrap_or(""),
                err
            );
            ctx.fail(BootStage::Load, err);
            return FailedState::enter(BootStage::Load);
        }

        (Box::new(ExecuteState::new()), StepResult::Transition)
    }

    fn name(&self) -> &'static str {
        "Loading"
    }
}
