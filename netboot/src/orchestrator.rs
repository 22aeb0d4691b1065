//! Autoboot orchestrator
//!
//! # Entry Point Contract
//!
//! **SOLE ENTRY**: [`BootOrchestrator::run`] or the wrapper
//! [`run_autoboot`](crate::run_autoboot) over the global registry.
//!
//! **WHAT THIS MODULE RECEIVES**:
//! - `&SharedRegistry` - device registry, mutated by hotplug at any time
//! - `S: BootServices` - driver, DHCP and image collaborators
//! - `AutobootConfig` - boot MAC hint and filename limit
//!
//! **WHAT THIS MODULE DOES NOT DO**:
//! - Mutate the registry (drivers and hotplug do)
//! - Retry a device within one run
//! - Impose timeouts (the collaborators own them)
//!
//! # Flow
//! ```text
//! close all → preferred device? → attempt
//!           → cursor cycle: skip preferred, close all, attempt
//!           → "No more network devices"
//! ```
//! The first successful attempt ends the run.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::attempt::{self, BootOutcome};
use crate::config::AutobootConfig;
use crate::device::{DeviceCursor, DeviceId, NetDevice, SharedRegistry};
use crate::services::BootServices;

/// One boot attempt as seen by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    pub device: DeviceId,
    pub name: String,
    pub outcome: BootOutcome,
}

/// Summary of an autoboot run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutobootReport {
    /// Attempts in the order they were made.
    pub attempts: Vec<AttemptRecord>,
    /// Device that booted, if any.
    pub booted: Option<DeviceId>,
}

impl AutobootReport {
    /// True when every candidate was tried without success.
    pub fn exhausted(&self) -> bool {
        self.booted.is_none()
    }
}

/// Drives boot attempts across all registered devices.
pub struct BootOrchestrator<'r, S: BootServices> {
    registry: &'r SharedRegistry,
    cursor: DeviceCursor<'r>,
    services: S,
    config: AutobootConfig,
}

impl<'r, S: BootServices> BootOrchestrator<'r, S> {
    pub fn new(registry: &'r SharedRegistry, services: S, config: AutobootConfig) -> Self {
        Self {
            registry,
            cursor: DeviceCursor::new(registry),
            services,
            config,
        }
    }

    pub fn services(&self) -> &S {
        &self.services
    }

    pub fn services_mut(&mut self) -> &mut S {
        &mut self.services
    }

    pub fn into_services(self) -> S {
        self.services
    }

    /// Try every device until one boots.
    ///
    /// The identified boot device goes first and is skipped in the cursor
    /// pass. All devices are closed before each attempt; a device is never
    /// closed while its own attempt is running.
    pub fn run(&mut self) -> AutobootReport {
        let mut report = AutobootReport::default();

        self.release_all();
        let preferred = self.preferred_device();
        if let Some(device) = &preferred {
            log::info!("[BOOT] Boot device: {}", device);
            if self.try_device(device, &mut report) {
                return report;
            }
        }

        self.cursor.reset();
        while let Some(device) = self.cursor.next() {
            if preferred.as_ref().map(NetDevice::id) == Some(device.id()) {
                continue;
            }
            self.release_all();
            if self.try_device(&device, &mut report) {
                return report;
            }
        }

        log::warn!("[BOOT] No more network devices");
        report
    }

    fn try_device(&mut self, device: &NetDevice, report: &mut AutobootReport) -> bool {
        let outcome = attempt::attempt(&mut self.services, device, &self.config);
        match &outcome {
            BootOutcome::Success => {
                log::info!("[BOOT] {} booted", device.name());
                report.booted = Some(device.id());
            }
            BootOutcome::Failure(failure) => {
                log::info!("[BOOT] {}: {}", device.name(), failure);
            }
        }

        let success = outcome.is_success();
        report.attempts.push(AttemptRecord {
            device: device.id(),
            name: String::from(device.name()),
            outcome,
        });
        success
    }

    /// Close every registered device. Called before each attempt, never
    /// right after one.
    fn release_all(&mut self) {
        let devices = self.registry.lock().snapshot();
        for device in &devices {
            self.services.close(device);
        }
    }

    fn preferred_device(&mut self) -> Option<NetDevice> {
        let devices = self.registry.lock().snapshot();
        if let Some(device) = self.services.identify_boot_device(&devices) {
            return Some(device);
        }

        let mac = self.config.boot_mac?;
        devices.into_iter().find(|d| d.mac() == mac)
    }
}
