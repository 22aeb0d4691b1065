//! Fetching state — retrieves the boot image.

extern crate alloc;
use alloc::boxed::Box;

use crate::attempt::context::AttemptContext;
use crate::attempt::state::{State, StepResult};
use crate::attempt::BootStage;
use crate::error::BootError;
use crate::services::BootServices;

use super::{FailedState, LoadState};

/// Fetches the image named by the resolved filename.
pub struct FetchState;

impl FetchState {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FetchState {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BootServices> State<S> for FetchState {
    fn step(
        self: Box<Self>,
        ctx: &mut AttemptContext<S::Image>,
        services: &mut S,
    ) -> (Box<dyn State<S>>, StepResult) {
        let result = match ctx.filename.as_deref() {
            Some(name) => {
                log::info!("[BOOT] Booting \"{}\"", name);
                services.fetch_image(name)
            }
            None => Err(BootError::NoBootFilename),
        };

        match result {
            Ok(image) => {
                ctx.image = Some(image);
                (Box::new(LoadState::new()), StepResult::Transition)
            }
            Err(err) => {
                log::warn!(
                    "[BOOT] Could not retrieve {}: {}",
                    ctx.filename.as_deref().unwrap_or(""),
                    err
                );
                ctx.fail(BootStage::Fetch, err);
                FailedState::enter(BootStage::Fetch)
            }
        }
    }

    fn name(&self) -> &'static str {
        "Fetching"
    }
}
