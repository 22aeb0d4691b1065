//! Ordered registry of network devices.
//!
//! Devices are kept in registration order, which is the order the autoboot
//! cursor walks them. Storage is slot based: a slot freed by
//! [`DeviceRegistry::unregister`] is reused by the next registration with a
//! bumped generation.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use smoltcp::wire::EthernetAddress;

use super::{DeviceId, NetDevice};

struct Slot {
    generation: u32,
    device: Option<NetDevice>,
}

/// Ordered set of registered network devices.
pub struct DeviceRegistry {
    slots: Vec<Slot>,
    /// Registration order.
    order: Vec<DeviceId>,
}

impl DeviceRegistry {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Register a device at the end of the iteration order.
    pub fn register(&mut self, name: impl Into<String>, mac: EthernetAddress) -> DeviceId {
        let id = match self.slots.iter().position(|s| s.device.is_none()) {
            Some(index) => DeviceId::new(index as u32, self.slots[index].generation),
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    device: None,
                });
                DeviceId::new((self.slots.len() - 1) as u32, 0)
            }
        };

        let name = name.into();
        log::debug!("[NET] register {} as {}", name, id);
        self.slots[id.slot() as usize].device = Some(NetDevice::new(id, name, mac));
        self.order.push(id);
        id
    }

    /// Remove a device. Returns the removed handle, or `None` if `id` is
    /// stale or was never registered.
    pub fn unregister(&mut self, id: DeviceId) -> Option<NetDevice> {
        let slot = self.slot_mut(id)?;
        let device = slot.device.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.order.retain(|other| *other != id);
        log::debug!("[NET] unregister {}", device.name());
        Some(device)
    }

    pub fn get(&self, id: DeviceId) -> Option<&NetDevice> {
        let slot = self.slots.get(id.slot() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.device.as_ref()
    }

    pub fn contains(&self, id: DeviceId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Devices in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &NetDevice> + '_ {
        self.order.iter().filter_map(move |id| self.get(*id))
    }

    /// Clone of the current membership, in order.
    pub fn snapshot(&self) -> Vec<NetDevice> {
        self.iter().cloned().collect()
    }

    pub fn find_by_mac(&self, mac: EthernetAddress) -> Option<&NetDevice> {
        self.iter().find(|d| d.mac() == mac)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&NetDevice> {
        self.iter().find(|d| d.name() == name)
    }

    fn slot_mut(&mut self, id: DeviceId) -> Option<&mut Slot> {
        let slot = self.slots.get_mut(id.slot() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        Some(slot)
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mac(last: u8) -> EthernetAddress {
        EthernetAddress([0x52, 0x54, 0x00, 0x12, 0x34, last])
    }

    #[test]
    fn test_register_keeps_order() {
        let mut reg = DeviceRegistry::new();
        reg.register("net0", mac(1));
        reg.register("net1", mac(2));
        reg.register("net2", mac(3));

        let names: Vec<&str> = reg.iter().map(|d| d.name()).collect();
        assert_eq!(names, ["net0", "net1", "net2"]);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn test_unregister_removes_member() {
        let mut reg = DeviceRegistry::new();
        let a = reg.register("net0", mac(1));
        let b = reg.register("net1", mac(2));

        let removed = reg.unregister(a).unwrap();
        assert_eq!(removed.name(), "net0");
        assert!(!reg.contains(a));
        assert!(reg.contains(b));
        assert!(reg.unregister(a).is_none());
    }

    #[test]
    fn test_stale_id_does_not_match_reused_slot() {
        let mut reg = DeviceRegistry::new();
        let old = reg.register("net0", mac(1));
        reg.unregister(old);
        let new = reg.register("net0", mac(9));

        assert_eq!(old.slot(), new.slot());
        assert_ne!(old, new);
        assert!(reg.get(old).is_none());
        assert_eq!(reg.get(new).unwrap().mac(), mac(9));
    }

    #[test]
    fn test_reused_slot_goes_to_end_of_order() {
        let mut reg = DeviceRegistry::new();
        let a = reg.register("net0", mac(1));
        reg.register("net1", mac(2));
        reg.unregister(a);
        reg.register("net2", mac(3));

        let names: Vec<&str> = reg.iter().map(|d| d.name()).collect();
        assert_eq!(names, ["net1", "net2"]);
    }

    #[test]
    fn test_find_by_mac_and_name() {
        let mut reg = DeviceRegistry::new();
        reg.register("net0", mac(1));
        let b = reg.register("net1", mac(2));

        assert_eq!(reg.find_by_mac(mac(2)).unwrap().id(), b);
        assert_eq!(reg.find_by_name("net1").unwrap().id(), b);
        assert!(reg.find_by_mac(mac(7)).is_none());
    }
}
