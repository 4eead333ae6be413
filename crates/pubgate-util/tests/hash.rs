use pubgate_util::hash::ChecksumAlgorithm;

#[test]
fn test_sha256_known_value() {
    assert_eq!(
        ChecksumAlgorithm::Sha256.digest_hex(b"hello world"),
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
    );
}

#[test]
fn test_sha1_known_value() {
    assert_eq!(
        ChecksumAlgorithm::Sha1.digest_hex(b"hello world"),
        "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"
    );
}

#[test]
fn test_md5_known_value() {
    assert_eq!(
        ChecksumAlgorithm::Md5.digest_hex(b"hello world"),
        "5eb63bbbe01eeed093cb22bb8f5acdc3"
    );
}

#[test]
fn test_sidecar_extensions() {
    let exts: Vec<&str> = ChecksumAlgorithm::ALL
        .iter()
        .map(|a| a.extension())
        .collect();
    assert_eq!(exts, vec!["sha1", "md5", "sha256"]);
}
