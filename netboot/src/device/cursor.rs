//! Device cursor.
//!
//! Walks the registry one device per call and reports the end of a cycle
//! with `None`. The only state kept between calls is the identity of the
//! last device returned, so the registry is free to change underneath.
//!
//! # Consistency
//!
//! Without concurrent mutation every member is returned exactly once per
//! cycle. With mutation the guarantee is weaker:
//! - a device registered mid-cycle is appended after the current position
//!   and seen in the same cycle
//! - removing any other device never disturbs the position
//! - if the last returned device disappears, the cycle ends early

extern crate alloc;

use super::{DeviceId, NetDevice, SharedRegistry};

/// Cycle iterator over a [`SharedRegistry`].
pub struct DeviceCursor<'r> {
    registry: &'r SharedRegistry,
    last: Option<DeviceId>,
}

impl<'r> DeviceCursor<'r> {
    pub fn new(registry: &'r SharedRegistry) -> Self {
        Self {
            registry,
            last: None,
        }
    }

    /// Return the next device of the current cycle.
    ///
    /// `None` marks cycle completion; the call after it starts a new cycle
    /// from the first registered device.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<NetDevice> {
        // The lock covers this one observation only.
        let registry = self.registry.lock();
        let mut devices = registry.iter();

        let found = match self.last {
            None => devices.next(),
            Some(last) => {
                if devices.any(|d| d.id() == last) {
                    devices.next()
                } else {
                    log::debug!("[NET] cursor lost device {}, ending cycle", last);
                    None
                }
            }
        };

        let found = found.cloned();
        self.last = found.as_ref().map(NetDevice::id);
        found
    }

    /// Forget the current position so the next call starts a fresh cycle.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Identity of the last device returned in the current cycle.
    pub fn last(&self) -> Option<DeviceId> {
        self.last
    }
}
