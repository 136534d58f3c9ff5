//! Classification properties checked through the public API.

use std::net::{Ipv4Addr, Ipv6Addr};

use whois_lookup::{classify, InputKind, LookupQuery};

#[test]
fn ip_literals_are_never_domains_or_emails() {
    let v4 = [
        Ipv4Addr::new(8, 8, 8, 8),
        Ipv4Addr::new(10, 0, 0, 1),
        Ipv4Addr::new(127, 0, 0, 1),
        Ipv4Addr::new(1, 2, 3, 4),
        Ipv4Addr::BROADCAST,
        Ipv4Addr::UNSPECIFIED,
    ];
    for ip in v4 {
        assert_eq!(classify(&ip.to_string()), InputKind::Ipv4, "{}", ip);
    }

    let v6 = [
        Ipv6Addr::LOCALHOST,
        Ipv6Addr::UNSPECIFIED,
        Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1),
        Ipv6Addr::new(0xfe80, 0, 0, 0, 0x1ff, 0xfe23, 0x4567, 0x890a),
        Ipv4Addr::new(192, 0, 2, 128).to_ipv6_mapped(),
    ];
    for ip in v6 {
        assert_eq!(classify(&ip.to_string()), InputKind::Ipv6, "{}", ip);
    }
}

#[test]
fn blank_input_means_my_ip() {
    assert_eq!(classify(""), InputKind::MyIp);
    assert_eq!(classify("   "), InputKind::MyIp);
    let query = LookupQuery::from_input("   ", InputKind::MyIp).unwrap();
    assert_eq!(query.as_str(), "");
}

#[test]
fn email_is_rewritten_to_its_domain() {
    let input = "user@example.com";
    let kind = classify(input);
    assert_eq!(kind, InputKind::Email);
    assert_eq!(
        LookupQuery::from_input(input, kind).unwrap().as_str(),
        "example.com"
    );
}

#[test]
fn garbage_is_invalid_and_has_no_query() {
    let input = "not a domain!!";
    let kind = classify(input);
    assert_eq!(kind, InputKind::Invalid);
    assert!(LookupQuery::from_input(input, kind).is_none());
}
