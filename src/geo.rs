//! Geolocation stub for the IP lookup endpoint.
//!
//! This is deliberately not a real geolocation backend. Loopback and
//! private-range addresses classify as "Local"; every other parseable
//! address classifies as "Unknown". A production deployment would swap this
//! for a GeoIP database lookup behind the same signature.

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// Approximate geographic information for an IP address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoInfo {
    /// Country name ("Local" for loopback/private ranges).
    pub country: String,
    /// ISO-style country code ("LOCAL" or "XX" for the stub).
    pub country_code: String,
    /// Region/state, when known.
    pub region: Option<String>,
    /// City, when known.
    pub city: Option<String>,
    /// Latitude, when known.
    pub latitude: Option<f64>,
    /// Longitude, when known.
    pub longitude: Option<f64>,
}

/// Returns geographic information for an IP address.
///
/// # Example
///
/// ```
/// use utils_backend::geo;
///
/// let info = geo::lookup("127.0.0.1".parse().unwrap());
/// assert_eq!(info.country, "Local");
///
/// let info = geo::lookup("8.8.8.8".parse().unwrap());
/// assert_eq!(info.country, "Unknown");
/// ```
pub fn lookup(ip: IpAddr) -> GeoInfo {
    if is_local(ip) {
        return GeoInfo {
            country: "Local".to_string(),
            country_code: "LOCAL".to_string(),
            region: None,
            city: None,
            latitude: None,
            longitude: None,
        };
    }

    GeoInfo {
        country: "Unknown".to_string(),
        country_code: "XX".to_string(),
        region: None,
        city: None,
        latitude: None,
        longitude: None,
    }
}

/// Returns the IP version label for an address.
pub fn ip_version(ip: IpAddr) -> &'static str {
    match ip {
        IpAddr::V4(_) => "IPv4",
        IpAddr::V6(_) => "IPv6",
    }
}

/// Whether an address is loopback or in a private range.
fn is_local(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => v4.is_loopback() || v4.is_private() || v4.is_link_local(),
        // fc00::/7 unique-local, fe80::/10 link-local
        IpAddr::V6(v6) => {
            v6.is_loopback()
                || (v6.segments()[0] & 0xfe00) == 0xfc00
                || (v6.segments()[0] & 0xffc0) == 0xfe80
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_loopback_is_local() {
        assert_eq!(lookup(ip("127.0.0.1")).country, "Local");
        assert_eq!(lookup(ip("::1")).country, "Local");
    }

    #[test]
    fn test_private_ranges_are_local() {
        for addr in ["10.0.0.1", "172.16.5.4", "192.168.1.20"] {
            let info = lookup(ip(addr));
            assert_eq!(info.country, "Local", "{}", addr);
            assert_eq!(info.country_code, "LOCAL");
        }
    }

    #[test]
    fn test_unique_local_v6_is_local() {
        assert_eq!(lookup(ip("fd12:3456:789a::1")).country, "Local");
        assert_eq!(lookup(ip("fe80::1")).country, "Local");
    }

    #[test]
    fn test_public_addresses_are_unknown() {
        for addr in ["8.8.8.8", "1.1.1.1", "2001:4860:4860::8888"] {
            let info = lookup(ip(addr));
            assert_eq!(info.country, "Unknown", "{}", addr);
            assert_eq!(info.country_code, "XX");
            assert_eq!(info.latitude, None);
        }
    }

    #[test]
    fn test_ip_version() {
        assert_eq!(ip_version(ip("8.8.8.8")), "IPv4");
        assert_eq!(ip_version(ip("2001:4860:4860::8888")), "IPv6");
    }
}
