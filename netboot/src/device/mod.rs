//! Network device handles, registry and cursor.
//!
//! The registry is the single owner of every [`NetDevice`]. Everything else
//! in the crate holds a [`DeviceId`] or a cloned handle and re-resolves
//! identity against the registry on each access, because hotplug and driver
//! teardown may add or remove devices between any two observations.
//!
//! - [`registry`] - ordered device set with generation-checked slots
//! - [`cursor`] - cycle iterator that tolerates concurrent mutation

extern crate alloc;

use alloc::string::String;
use core::fmt;

use smoltcp::wire::EthernetAddress;
use spin::Mutex;

pub mod cursor;
pub mod registry;

pub use cursor::DeviceCursor;
pub use registry::DeviceRegistry;

/// Registry shared between the boot core and hotplug/driver events.
pub type SharedRegistry = Mutex<DeviceRegistry>;

/// Global registry of network devices.
///
/// Drivers register here when they bind and unregister on teardown.
pub static NET_DEVICES: SharedRegistry = Mutex::new(DeviceRegistry::new());

/// Identity of a registry entry.
///
/// A slot index plus the slot's generation at registration time. Freeing a
/// slot bumps its generation, so an id held across an unregister never
/// matches the device that later reuses the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId {
    slot: u32,
    generation: u32,
}

impl DeviceId {
    pub(crate) const fn new(slot: u32, generation: u32) -> Self {
        Self { slot, generation }
    }

    pub fn slot(&self) -> u32 {
        self.slot
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.slot, self.generation)
    }
}

/// Handle to one network interface.
///
/// Cheap to clone. A clone is a snapshot: it stays valid as a value after the
/// device leaves the registry, but it no longer identifies a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetDevice {
    id: DeviceId,
    name: String,
    mac: EthernetAddress,
}

impl NetDevice {
    pub(crate) fn new(id: DeviceId, name: String, mac: EthernetAddress) -> Self {
        Self { id, name, mac }
    }

    pub fn id(&self) -> DeviceId {
        self.id
    }

    /// Interface name, e.g. `net0`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mac(&self) -> EthernetAddress {
        self.mac
    }
}

impl fmt::Display for NetDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.mac)
    }
}
