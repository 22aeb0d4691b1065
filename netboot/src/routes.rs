//! Route installation helper for [`BootServices::install_routes`].
//!
//! [`BootServices::install_routes`]: crate::services::BootServices::install_routes

use smoltcp::iface::Routes;

use crate::error::{BootError, Result};
use crate::services::Lease;

/// Install the lease's router as the IPv4 default route.
///
/// Returns `Ok(false)` when the lease carries no router. An existing
/// default route is replaced.
pub fn install_default_route(routes: &mut Routes, lease: &Lease) -> Result<bool> {
    let router = match lease.router {
        Some(router) => router,
        None => {
            log::debug!("[NET] lease has no router, no default route");
            return Ok(false);
        }
    };

    routes
        .add_default_ipv4_route(router)
        .map_err(|_| BootError::RouteTableFull)?;
    log::debug!("[NET] default route via {}", router);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use smoltcp::wire::{Ipv4Address, Ipv4Cidr};

    fn lease() -> Lease {
        Lease::new(Ipv4Cidr::new(Ipv4Address::new(10, 0, 2, 15), 24))
    }

    #[test]
    fn test_no_router_installs_nothing() {
        let mut routes = Routes::new();
        assert_eq!(install_default_route(&mut routes, &lease()), Ok(false));
    }

    #[test]
    fn test_router_installed_and_replaced() {
        let mut routes = Routes::new();
        let first = lease().with_router(Ipv4Address::new(10, 0, 2, 2));
        let second = lease().with_router(Ipv4Address::new(10, 0, 2, 1));

        assert_eq!(install_default_route(&mut routes, &first), Ok(true));
        assert_eq!(install_default_route(&mut routes, &second), Ok(true));
    }
}
