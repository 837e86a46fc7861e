//! Native transfer decoder vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use swapgate_core::protocol::system::decode_system_transfer;

use vector_loader::TestVector;

fn load(name: &str) -> TestVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

#[test]
fn system_transfer_vectors() {
    let files = [
        "transfer_200m.json",
        "transfer_trailing.json",
        "transfer_too_short.json",
        "transfer_empty.json",
        "create_account.json",
    ];

    for f in files {
        let v = load(f);
        let raw = v.payload.decode();
        let res = decode_system_transfer(&raw);

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.code().as_str(), err.code, "vector={}", v.description);
            continue;
        }

        let t = res.expect("expected decoded transfer");
        let ex = v.expect.expect("missing expect block");
        assert_eq!(t.lamports, ex["lamports"].as_u64().unwrap(), "vector={}", v.description);
    }
}

#[test]
fn large_payload_with_foreign_discriminator() {
    let mut p = vec![0u8; 1000];
    p[0] = 3;
    assert!(decode_system_transfer(&p).is_err());
}
