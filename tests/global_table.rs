//! The process-wide table lives in its own test binary: it can only be
//! installed once per process.

use sockaddr_rfc::config::Config;
use sockaddr_rfc::rfc::global;
use sockaddr_rfc::{ConfigError, RfcTable, SockAddr};

#[test]
fn test_install_once() {
    let table = Config::from_value(Some("1918#100.100.0.0/16"))
        .build_table()
        .expect("Failed to build table");
    let installed = global::install(table).expect("First install must succeed");

    let addr = SockAddr::new("100.100.7.7").unwrap();
    assert!(installed.is_rfc(1918, &addr));
    assert!(global::is_rfc(1918, &addr));

    assert_eq!(
        global::install(RfcTable::known()),
        Err(ConfigError::AlreadyInstalled)
    );
    assert!(global::is_rfc(1918, &addr), "Installed table must not change");
}
