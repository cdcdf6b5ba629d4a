//! Standards-defined address ranges, keyed by RFC number.

/// Pseudo RFC number listing blocks that must never be forwarded.
pub const FORWARDING_BLACKLIST: u32 = u32::MAX;

#[rustfmt::skip]
pub(crate) const KNOWN_RFCS: &[(u32, &[&str])] = &[
    // Broadcasting Internet Datagrams
    (919, &["255.255.255.255/32"]),
    // Host Extensions for IP Multicasting
    (1112, &["224.0.0.0/4"]),
    // Requirements for Internet Hosts: "this" network and loopback
    (1122, &["0.0.0.0/8", "127.0.0.0/8"]),
    // Address Allocation for Private Internets
    (1918, &["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16"]),
    // Benchmarking Methodology for Network Interconnect Devices
    (2544, &["198.18.0.0/15"]),
    // SIIT
    (2765, &["::ffff:0:0/96"]),
    // Initial IPv6 Sub-TLA ID Assignments
    (2928, &["2001::/16"]),
    // 6to4
    (3056, &["2002::/16"]),
    // 6to4 relay anycast
    (3068, &["192.88.99.0/24", "2002:c058:6301::/48"]),
    // IPv4 multicast
    (3171, &["224.0.0.0/4"]),
    // Special-Use IPv4 Addresses
    (3330, &[
        "0.0.0.0/8", "10.0.0.0/8", "14.0.0.0/8", "24.0.0.0/8", "39.0.0.0/8",
        "127.0.0.0/8", "128.0.0.0/16", "169.254.0.0/16", "172.16.0.0/12",
        "191.255.0.0/16", "192.0.0.0/24", "192.0.2.0/24", "192.88.99.0/24",
        "192.168.0.0/16", "198.18.0.0/15", "223.255.255.0/24", "224.0.0.0/4",
        "240.0.0.0/4",
    ]),
    // IPv6 documentation prefix
    (3849, &["2001:db8::/32"]),
    // IPv4 link-local
    (3927, &["169.254.0.0/16"]),
    // Application Aspects of IPv6 Transition
    (4038, &["::ffff:0:0/96"]),
    // Unique Local IPv6 Unicast Addresses
    (4193, &["fc00::/7"]),
    // IPv6 Addressing Architecture
    (4291, &[
        "::/128", "::1/128", "::/96", "::ffff:0:0/96", "fe80::/10", "ff00::/8",
    ]),
    // Teredo
    (4380, &["2001::/32"]),
    // IANA IPv6 special purpose block
    (4773, &["2001::/23"]),
    // ORCHID
    (4843, &["2001:10::/28"]),
    // IPv6 benchmarking
    (5180, &["2001:200::/48"]),
    // Special Use IPv4 Addresses (2010)
    (5735, &[
        "192.0.2.0/24", "198.51.100.0/24", "203.0.113.0/24", "198.18.0.0/15",
    ]),
    // IPv4 documentation blocks
    (5737, &["192.0.2.0/24", "198.51.100.0/24", "203.0.113.0/24"]),
    // NAT64 well-known prefix
    (6052, &["64:ff9b::/96"]),
    // DS-Lite
    (6333, &["192.0.0.0/29"]),
    // Shared Address Space
    (6598, &["100.64.0.0/10"]),
    // IPv6 discard prefix
    (6666, &["100::/64"]),
    // Special-Purpose IP Address Registries
    (6890, &[
        "0.0.0.0/8", "10.0.0.0/8", "100.64.0.0/10", "127.0.0.0/8",
        "169.254.0.0/16", "172.16.0.0/12", "192.0.0.0/24", "192.0.0.0/29",
        "192.0.2.0/24", "192.88.99.0/24", "192.168.0.0/16", "198.18.0.0/15",
        "198.51.100.0/24", "203.0.113.0/24", "240.0.0.0/4",
        "255.255.255.255/32",
        "::1/128", "::/128", "::ffff:0:0/96", "100::/64", "2001::/23",
        "2001::/32", "2001:2::/48", "2001:db8::/32", "2001:10::/28",
        "2002::/16", "64:ff9b::/96", "fc00::/7", "fe80::/10",
    ]),
    // DS-Lite B4 addresses
    (7335, &["192.0.0.0/29"]),
    (FORWARDING_BLACKLIST, &[
        "0.0.0.0/8", "127.0.0.0/8", "169.254.0.0/16", "192.0.0.0/24",
        "192.0.2.0/24", "198.51.100.0/24", "203.0.113.0/24", "240.0.0.0/4",
        "255.255.255.255/32",
        "::1/128", "::/128", "::ffff:0:0/96", "2001:db8::/32", "fe80::/10",
    ]),
];
