use super::*;

// =============================================================================
// is_forwardable_header
// =============================================================================

#[test]
fn hop_by_hop_headers_are_stripped() {
    for name in [
        "connection",
        "keep-alive",
        "proxy-authenticate",
        "proxy-authorization",
        "te",
        "trailers",
        "transfer-encoding",
        "upgrade",
    ] {
        assert!(!is_forwardable_header(name), "expected {name:?} stripped");
    }
}

#[test]
fn host_and_content_length_are_recomputed_not_copied() {
    assert!(!is_forwardable_header("host"));
    assert!(!is_forwardable_header("content-length"));
}

#[test]
fn header_filtering_is_case_insensitive() {
    assert!(!is_forwardable_header("Connection"));
    assert!(!is_forwardable_header("HOST"));
}

#[test]
fn end_to_end_headers_pass_through() {
    for name in ["user-agent", "content-type", "accept", "referer", "cookie"] {
        assert!(is_forwardable_header(name), "expected {name:?} forwarded");
    }
}

// =============================================================================
// forwarded_for
// =============================================================================

#[test]
fn client_ip_becomes_the_chain_when_none_exists() {
    let ip: IpAddr = "203.0.113.7".parse().unwrap();
    assert_eq!(forwarded_for(None, ip), "203.0.113.7");
}

#[test]
fn client_ip_is_appended_to_an_existing_chain() {
    let ip: IpAddr = "203.0.113.7".parse().unwrap();
    assert_eq!(
        forwarded_for(Some("198.51.100.1"), ip),
        "198.51.100.1, 203.0.113.7"
    );
}

#[test]
fn blank_existing_chain_is_ignored() {
    let ip: IpAddr = "203.0.113.7".parse().unwrap();
    assert_eq!(forwarded_for(Some("   "), ip), "203.0.113.7");
}

#[test]
fn ipv6_clients_are_recorded_verbatim() {
    let ip: IpAddr = "2001:db8::1".parse().unwrap();
    assert_eq!(forwarded_for(None, ip), "2001:db8::1");
}
