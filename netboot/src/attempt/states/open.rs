//! Opening state — brings the interface up.

extern crate alloc;
use alloc::boxed::Box;

use crate::attempt::context::AttemptContext;
use crate::attempt::state::{State, StepResult};
use crate::attempt::BootStage;
use crate::services::BootServices;

use super::{ConfigureState, FailedState};

/// Opens the device and prints its status.
pub struct OpenState;

impl OpenState {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OpenState {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BootServices> State<S> for OpenState {
    fn step(
        self: Box<Self>,
        ctx: &mut AttemptContext<S::Image>,
        services: &mut S,
    ) -> (Box<dyn State<S>>, StepResult) {
        if let Err(err) = services.open(&ctx.device) {
            log::warn!("[BOOT] Could not open {}: {}", ctx.device.name(), err);
            ctx.fail(BootStage::Open, err);
            return FailedState::enter(BootStage::Open);
        }

        services.report_status(&ctx.device);
        (Box::new(ConfigureState::new()), StepResult::Transition)
    }

    fn name(&self) -> &'static str {
        "Opening"
    }
}
