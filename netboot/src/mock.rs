//! Recording [`BootServices`] for tests.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use smoltcp::wire::{EthernetAddress, Ipv4Address, Ipv4Cidr};
use spin::Mutex;

use crate::attempt::BootStage;
use crate::device::{DeviceId, DeviceRegistry, NetDevice, SharedRegistry};
use crate::error::{BootError, Result};
use crate::services::{BootServices, Lease};

/// Registry holding `names` in order.
pub fn registry_of(names: &[&str]) -> SharedRegistry {
    let mut reg = DeviceRegistry::new();
    for (i, name) in names.iter().enumerate() {
        reg.register(*name, EthernetAddress([0x52, 0x54, 0x00, 0, 0, i as u8 + 1]));
    }
    Mutex::new(reg)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Close(String),
    Open(String),
    Status(String),
    Configure(String),
    Routes,
    Fetch(String),
    Load(String),
    Execute(String),
}

pub struct MockImage {
    name: String,
}

/// Every stage succeeds unless told otherwise. Boot file for device `X`
/// is `X.efi`.
pub struct MockServices<'r> {
    pub events: Vec<Event>,
    registry: Option<&'r SharedRegistry>,
    failures: Vec<(String, BootStage)>,
    no_boot_file: Vec<String>,
    boot_files: Vec<(String, String)>,
    boot_device: Option<String>,
    remove_on_configure: Option<DeviceId>,
    plug_on_configure: Option<String>,
    current: String,
}

impl MockServices<'static> {
    pub fn new() -> Self {
        Self::blank(None)
    }
}

impl<'r> MockServices<'r> {
    /// Mock that can mutate `registry` while an attempt runs.
    pub fn with_registry(registry: &'r SharedRegistry) -> Self {
        Self::blank(Some(registry))
    }

    fn blank(registry: Option<&'r SharedRegistry>) -> Self {
        Self {
            events: Vec::new(),
            registry,
            failures: Vec::new(),
            no_boot_file: Vec::new(),
            boot_files: Vec::new(),
            boot_device: None,
            remove_on_configure: None,
            plug_on_configure: None,
            current: String::new(),
        }
    }

    pub fn failing(mut self, device: &str, stage: BootStage) -> Self {
        self.failures.push((device.into(), stage));
        self
    }

    pub fn without_boot_file(mut self, device: &str) -> Self {
        self.no_boot_file.push(device.into());
        self
    }

    /// Hand out `file` as the raw boot file option for `device`.
    pub fn with_boot_file(mut self, device: &str, file: impl Into<String>) -> Self {
        self.boot_files.push((device.into(), file.into()));
        self
    }

    pub fn identifying(mut self, device: &str) -> Self {
        self.boot_device = Some(device.into());
        self
    }

    pub fn removing_on_configure(mut self, id: DeviceId) -> Self {
        self.remove_on_configure = Some(id);
        self
    }

    pub fn plugging_on_configure(mut self, name: &str) -> Self {
        self.plug_on_configure = Some(name.into());
        self
    }

    fn check(&self, stage: BootStage) -> Result<()> {
        let fails = self
            .failures
            .iter()
            .any(|(name, s)| *name == self.current && *s == stage);
        if !fails {
            return Ok(());
        }
        Err(match stage {
            BootStage::Open => BootError::LinkDown,
            BootStage::Configure => BootError::DhcpTimeout,
            BootStage::Route => BootError::RouteTableFull,
            BootStage::Resolve => BootError::NoBootFilename,
            BootStage::Fetch => BootError::NotFound,
            BootStage::Load => BootError::InvalidImage,
            BootStage::Execute => BootError::ExecFailed("image returned".into()),
        })
    }
}

impl<'r> BootServices for MockServices<'r> {
    type Image = MockImage;

    fn identify_boot_device(&mut self, devices: &[NetDevice]) -> Option<NetDevice> {
        let name = self.boot_device.as_deref()?;
        devices.iter().find(|d| d.name() == name).cloned()
    }

    fn open(&mut self, device: &NetDevice) -> Result<()> {
        self.current = device.name().into();
        self.events.push(Event::Open(device.name().into()));
        self.check(BootStage::Open)
    }

    fn close(&mut self, device: &NetDevice) {
        self.events.push(Event::Close(device.name().into()));
    }

    fn report_status(&mut self, device: &NetDevice) {
        self.events.push(Event::Status(device.name().into()));
    }

    fn configure_addresses(&mut self, device: &NetDevice) -> Result<Lease> {
        self.events.push(Event::Configure(device.name().into()));

        if let Some(registry) = self.registry {
            if let Some(id) = self.remove_on_configure.take() {
                registry.lock().unregister(id);
            }
            if let Some(name) = self.plug_on_configure.take() {
                registry.lock().register(name, EthernetAddress([0x52, 0x54, 0x00, 0, 1, 0]));
            }
        }

        self.check(BootStage::Configure)?;
        let lease = Lease::new(Ipv4Cidr::new(Ipv4Address::new(10, 0, 2, 15), 24))
            .with_router(Ipv4Address::new(10, 0, 2, 2));
        if self.no_boot_file.iter().any(|n| n == device.name()) {
            return Ok(lease);
        }
        let file = match self.boot_files.iter().find(|(n, _)| n == device.name()) {
            Some((_, file)) => file.clone(),
            None => format!("{}.efi", device.name()),
        };
        Ok(lease.with_boot_file(file))
    }

    fn install_routes(&mut self, _lease: &Lease) -> Result<()> {
        self.events.push(Event::Routes);
        self.check(BootStage::Route)
    }

    fn fetch_image(&mut self, name: &str) -> Result<MockImage> {
        self.events.push(Event::Fetch(name.into()));
        self.check(BootStage::Fetch)?;
        Ok(MockImage { name: name.into() })
    }

    fn load_image(&mut self, image: &mut MockImage) -> Result<()> {
        self.events.push(Event::Load(image.name.clone()));
        self.check(BootStage::Load)
    }

    fn execute_image(&mut self, image: &mut MockImage) -> Result<()> {
        self.events.push(Event::Execute(image.name.clone()));
        self.check(BootStage::Execute)
    }
}
