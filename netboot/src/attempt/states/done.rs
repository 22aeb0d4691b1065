//! Terminal states — success and failure endpoints.

extern crate alloc;
use alloc::boxed::Box;

use crate::attempt::context::AttemptContext;
use crate::attempt::state::{State, StepResult};
use crate::attempt::BootStage;
use crate::services::BootServices;

/// Success terminal state.
pub struct DoneState;

impl DoneState {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DoneState {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BootServices> State<S> for DoneState {
    fn step(
        self: Box<Self>,
        _ctx: &mut AttemptContext<S::Image>,
        _services: &mut S,
    ) -> (Box<dyn State<S>>, StepResult) {
        (self, StepResult::Done)
    }

    fn name(&self) -> &'static str {
        "Done"
    }

    fn is_terminal(&self) -> bool {
        true
    }
}

/// Failure terminal state.
pub struct FailedState {
    stage: BootStage,
}

impl FailedState {
    pub fn new(stage: BootStage) -> Self {
        Self { stage }
    }

    /// Transition into `Failed` for `stage`.
    pub fn enter<S: BootServices>(stage: BootStage) -> (Box<dyn State<S>>, StepResult) {
        (Box::new(Self::new(stage)), StepResult::Transition)
    }

    /// Stage the attempt failed in.
    pub fn stage(&self) -> BootStage {
        self.stage
    }
}

impl<S: BootServices> State<S> for FailedState {
    fn step(
        self: Box<Self>,
        _ctx: &mut AttemptContext<S::Image>,
        _services: &mut S,
    ) -> (Box<dyn State<S>>, StepResult) {
        let stage = self.stage();
        (self, StepResult::Failed(stage))
    }

    fn name(&self) -> &'static str {
        "Failed"
    }

    fn is_terminal(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{registry_of, MockImage, MockServices};

    fn context() -> AttemptContext<MockImage> {
        let dev = registry_of(&["net0"]).lock().iter().next().cloned().unwrap();
        AttemptContext::new(dev, 255)
    }

    #[test]
    fn test_done_state_yields_done() {
        let mut ctx = context();
        let mut services = MockServices::new();
        let state: Box<dyn State<MockServices<'static>>> = Box::new(DoneState::new());
        assert!(state.is_terminal());

        let (state, result) = state.step(&mut ctx, &mut services);

        assert_eq!(result, StepResult::Done);
        assert_eq!(state.name(), "Done");
        assert!(services.events.is_empty());
    }

    #[test]
    fn test_failed_state_yields_its_stage() {
        let mut ctx = context();
        let mut services = MockServices::new();
        let (state, result) = FailedState::enter::<MockServices<'static>>(BootStage::Load);
        assert_eq!(result, StepResult::Transition);
        assert!(state.is_terminal());
        assert_eq!(FailedState::new(BootStage::Load).stage(), BootStage::Load);

        let (state, result) = state.step(&mut ctx, &mut services);

        assert_eq!(result, StepResult::Failed(BootStage::Load));
        assert_eq!(state.name(), "Failed");
    }
}
