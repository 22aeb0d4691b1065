//! Autoboot configuration.

use smoltcp::wire::EthernetAddress;

use crate::filename::MAX_BOOT_FILENAME;

/// Knobs for one autoboot run.
#[derive(Debug, Clone)]
pub struct AutobootConfig {
    /// MAC of the interface to try first when the boot services cannot
    /// identify the boot device themselves.
    pub boot_mac: Option<EthernetAddress>,
    /// Boot filenames longer than this many bytes are truncated.
    pub filename_limit: usize,
}

impl Default for AutobootConfig {
    fn default() -> Self {
        Self {
            boot_mac: None,
            filename_limit: MAX_BOOT_FILENAME,
        }
    }
}

impl AutobootConfig {
    /// Prefer the interface with this MAC.
    pub fn with_boot_mac(mut self, mac: EthernetAddress) -> Self {
        self.boot_mac = Some(mac);
        self
    }

    pub fn with_filename_limit(mut self, limit: usize) -> Self {
        self.filename_limit = limit;
        self
    }
}
