//! Filename resolution state.

extern crate alloc;
use alloc::boxed::Box;

use crate::attempt::context::AttemptContext;
use crate::attempt::state::{State, StepResult};
use crate::attempt::BootStage;
use crate::error::BootError;
use crate::filename;
use crate::services::BootServices;

use super::{FailedState, FetchState};

/// Derives the boot filename from the lease.
pub struct ResolveState;

impl ResolveState {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ResolveState {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BootServices> State<S> for ResolveState {
    fn step(
        self: Box<Self>,
        ctx: &mut AttemptContext<S::Image>,
        services: &mut S,
    ) -> (Box<dyn State<S>>, StepResult) {
        let resolved = match &ctx.lease {
            Some(lease) => services.resolve_filename(lease),
            None => None,
        };
        let name = resolved
            .and_then(|name| filename::bootfile_name(Some(&name), ctx.filename_limit));

        match name {
            Some(name) => {
                ctx.filename = Some(name);
                (Box::new(FetchState::new()), StepResult::Transition)
            }
            None => {
                log::warn!("[BOOT] No boot filename");
                ctx.fail(BootStage::Resolve, BootError::NoBootFilename);
                FailedState::enter(BootStage::Resolve)
            }
        }
    }

    fn name(&self) -> &'static str {
        "ResolvingFilename"
    }
}
