//! Address classification, end to end from string literals.

use std::net::IpAddr;

use tinware_net::{IPV4_ADDR_BYTES, IPV6_ADDR_BYTES, IpAddrExt};

#[test]
fn address_widths_match_the_families() {
    let v4: IpAddr = "203.0.113.7".parse().unwrap();
    let v6: IpAddr = "2001:db8::7".parse().unwrap();

    match v4 {
        IpAddr::V4(a) => assert_eq!(a.octets().len(), IPV4_ADDR_BYTES),
        IpAddr::V6(_) => unreachable!(),
    }
    match v6 {
        IpAddr::V6(a) => assert_eq!(a.octets().len(), IPV6_ADDR_BYTES),
        IpAddr::V4(_) => unreachable!(),
    }
}

#[test]
fn multicast_split_over_a_mixed_list() {
    let addrs: Vec<IpAddr> = [
        "224.0.0.251",   // mDNS
        "239.255.255.250", // SSDP
        "ff02::fb",      // mDNS over v6
        "192.168.0.1",
        "8.8.8.8",
        "fe80::1",
    ]
    .iter()
    .map(|s| s.parse().unwrap())
    .collect();

    let multicast: Vec<&IpAddr> = addrs.iter().filter(|a| a.is_any_multicast()).collect();
    assert_eq!(multicast.len(), 3);

    let v4_multicast: Vec<&IpAddr> = addrs.iter().filter(|a| a.is_v4_multicast()).collect();
    assert_eq!(v4_multicast.len(), 2);
}
