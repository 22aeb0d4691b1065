//! MorpheusX Network Autoboot
//!
//! Picks a network interface and drives the boot pipeline against it,
//! falling back to every other interface until one boots.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    BootOrchestrator                         │
//! │  close all → preferred device → cursor cycle → exhausted    │
//! └─────────────────────────────────────────────────────────────┘
//!              │                               │
//!              ▼                               ▼
//!      DeviceCursor                      BootAttempt
//!   (over DeviceRegistry)     Idle → Open → Configure → Route
//!                             → Resolve → Fetch → Load → Execute
//!                                              │
//!                                              ▼
//!                                        BootServices
//!                          (drivers, DHCP, image fetch/load/exec)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use morpheus_netboot::{run_autoboot, NET_DEVICES};
//!
//! // Drivers register their interfaces as they bind.
//! NET_DEVICES.lock().register("net0", mac);
//!
//! let report = run_autoboot(FirmwareServices::new());
//! if report.exhausted() {
//!     // fall back to the local boot menu
//! }
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod attempt;
pub mod config;
pub mod device;
pub mod error;
pub mod filename;
pub mod logger;
pub mod orchestrator;
pub mod routes;
pub mod services;

#[cfg(test)]
mod mock;

pub use attempt::{BootOutcome, BootStage, StageFailure};
pub use config::AutobootConfig;
pub use device::{DeviceCursor, DeviceId, DeviceRegistry, NetDevice, SharedRegistry, NET_DEVICES};
pub use error::{BootError, Result};
pub use orchestrator::{AttemptRecord, AutobootReport, BootOrchestrator};
pub use services::{BootServices, Lease};

/// Boot from the first network device that works, using the global
/// registry and default configuration.
///
/// Pass `&mut services` to keep the collaborators after the run.
pub fn run_autoboot<S: BootServices>(services: S) -> AutobootReport {
    BootOrchestrator::new(&NET_DEVICES, services, AutobootConfig::default()).run()
}
