//! Boot attempt states, one per pipeline stage.

pub mod idle;
pub mod open;
pub mod configure;
pub mod route;
pub mod resolve;
pub mod fetch;
pub mod load;
pub mod execute;
pub mod done;

pub use idle::IdleState;
pub use open::OpenState;
pub use configure::ConfigureState;
pub use route::RouteState;
pub use resolve::ResolveState;
pub use fetch::FetchState;
pub use load::LoadState;
pub use execute::ExecuteState;
pub use done::{DoneState, FailedState};
