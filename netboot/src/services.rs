//! Boot collaborator interface.
//!
//! The boot core does not talk to hardware, DHCP or image formats itself.
//! Everything below the state machine goes through [`BootServices`], which
//! the firmware implements on top of its drivers, its DHCP client and its
//! image loader.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use smoltcp::wire::{Ipv4Address, Ipv4Cidr};

use crate::device::NetDevice;
use crate::error::Result;

/// Address configuration obtained for one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lease {
    /// Assigned address and prefix.
    pub address: Ipv4Cidr,
    /// Default gateway.
    pub router: Option<Ipv4Address>,
    pub dns_servers: Vec<Ipv4Address>,
    /// Boot server (`siaddr`).
    pub next_server: Option<Ipv4Address>,
    /// Raw boot file name option, exactly as received.
    pub boot_file: Option<String>,
}

impl Lease {
    /// Lease with only an address.
    pub fn new(address: Ipv4Cidr) -> Self {
        Self {
            address,
            router: None,
            dns_servers: Vec::new(),
            next_server: None,
            boot_file: None,
        }
    }

    pub fn with_router(mut self, router: Ipv4Address) -> Self {
        self.router = Some(router);
        self
    }

    pub fn with_boot_file(mut self, name: impl Into<String>) -> Self {
        self.boot_file = Some(name.into());
        self
    }
}

/// Services the autoboot core delegates to.
///
/// Every method is one synchronous unit of work from the core's point of
/// view. Implementations may poll their network stack internally while
/// they wait; any timeout policy lives here, not in the core.
pub trait BootServices {
    /// Fetched image handle.
    type Image;

    /// Identify the device the firmware itself was booted from.
    ///
    /// `devices` is the registry membership at the time of the call.
    fn identify_boot_device(&mut self, _devices: &[NetDevice]) -> Option<NetDevice> {
        None
    }

    /// Bring the interface up.
    fn open(&mut self, device: &NetDevice) -> Result<()>;

    /// Shut the interface down. Closing a closed device is a no-op.
    fn close(&mut self, device: &NetDevice);

    /// Print link and counter status for an opened device.
    fn report_status(&mut self, _device: &NetDevice) {}

    /// Run address configuration (DHCP or equivalent) on an opened device.
    fn configure_addresses(&mut self, device: &NetDevice) -> Result<Lease>;

    /// Install routes for a fresh lease.
    ///
    /// Errors are logged by the caller and otherwise ignored.
    fn install_routes(&mut self, _lease: &Lease) -> Result<()> {
        Ok(())
    }

    /// Derive the boot file name from a lease.
    ///
    /// Returns the raw name. The caller cuts it at the first NUL and
    /// truncates it to the configured limit.
    fn resolve_filename(&mut self, lease: &Lease) -> Option<String> {
        lease.boot_file.clone()
    }

    /// Retrieve the image called `name`.
    fn fetch_image(&mut self, name: &str) -> Result<Self::Image>;

    /// Prepare a fetched image for execution.
    fn load_image(&mut self, image: &mut Self::Image) -> Result<()>;

    /// Transfer control to a loaded image.
    ///
    /// A real handoff does not come back. `Ok(())` means the image ran and
    /// returned cleanly; the attempt then counts as a success and the run
    /// stops there instead of moving on to the next device. Return an error
    /// if a returning image should let the run continue.
    fn execute_image(&mut self, image: &mut Self::Image) -> Result<()>;
}

impl<S: BootServices + ?Sized> BootServices for &mut S {
    type Image = S::Image;

    fn identify_boot_device(&mut self, devices: &[NetDevice]) -> Option<NetDevice> {
        (**self).identify_boot_device(devices)
    }

    fn open(&mut self, device: &NetDevice) -> Result<()> {
        (**self).open(device)
    }

    fn close(&mut self, device: &NetDevice) {
        (**self).close(device)
    }

    fn report_status(&mut self, device: &NetDevice) {
        (**self).report_status(device)
    }

    fn configure_addresses(&mut self, device: &NetDevice) -> Result<Lease> {
        (**self).configure_addresses(device)
    }

    fn install_routes(&mut self, lease: &Lease) -> Result<()> {
        (**self).install_routes(lease)
    }

    fn resolve_filename(&mut self, lease: &Lease) -> Option<String> {
        (**self).resolve_filename(lease)
    }

    fn fetch_image(&mut self, name: &str) -> Result<Self::Image> {
        (**self).fetch_image(name)
    }

    fn load_image(&mut self, image: &mut Self::Image) -> Result<()> {
        (**self).load_image(image)
    }

    fn execute_image(&mut self, image: &mut Self::Image) -> Result<()> {
        (**self).execute_image(image)
    }
}
