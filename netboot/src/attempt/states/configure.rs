//! Configuring state — address configuration over DHCP.

extern crate alloc;
use alloc::boxed::Box;

use crate::attempt::context::AttemptContext;
use crate::attempt::state::{State, StepResult};
use crate::attempt::BootStage;
use crate::services::BootServices;

use super::{FailedState, RouteState};

/// Obtains a lease for the opened device.
pub struct ConfigureState;

impl ConfigureState {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConfigureState {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BootServices> State<S> for ConfigureState {
    fn step(
        self: Box<Self>,
        ctx: &mut AttemptContext<S::Image>,
        services: &mut S,
    ) -> (Box<dyn State<S>>, StepResult) {
        match services.configure_addresses(&ctx.device) {
            Ok(lease) => {
                log::info!("[BOOT] {}: got {}", ctx.device.name(), lease.address);
                ctx.lease = Some(lease);
                (Box::new(RouteState::new()), StepResult::Transition)
            }
            Err(err) => {
                log::warn!("[BOOT] Could not configure {}: {}", ctx.device.name(), err);
                ctx.fail(BootStage::Configure, err);
                FailedState::enter(BootStage::Configure)
            }
        }
    }

    fn name(&self) -> &'static str {
        "Configuring"
    }
}
