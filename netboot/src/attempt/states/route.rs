//! Routing setup state.
//!
//! Best effort: a failure is logged and the attempt carries on.

extern crate alloc;
use alloc::boxed::Box;

use crate::attempt::context::AttemptContext;
use crate::attempt::state::{State, StepResult};
use crate::services::BootServices;

use super::ResolveState;

/// Installs routes for the fresh lease.
pub struct RouteState;

impl RouteState {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RouteState {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BootServices> State<S> for RouteState {
    fn step(
        self: Box<Self>,
        ctx: &mut AttemptContext<S::Image>,
        services: &mut S,
    ) -> (Box<dyn State<S>>, StepResult) {
        if let Some(lease) = &ctx.lease {
            if let Err(err) = services.install_routes(lease) {
                log::warn!("[BOOT] {}: route setup failed: {}", ctx.device.name(), err);
            }
        }

        (Box::new(ResolveState::new()), StepResult::Transition)
    }

    fn name(&self) -> &'static str {
        "RoutingSetup"
    }
}
