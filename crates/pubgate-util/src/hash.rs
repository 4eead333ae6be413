//! Hex digests for Maven checksum sidecars.

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

/// Checksum algorithms Maven repositories expect next to each uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumAlgorithm {
    Sha1,
    Md5,
    Sha256,
}

impl ChecksumAlgorithm {
    /// Every sidecar pubgate uploads, in upload order.
    pub const ALL: [ChecksumAlgorithm; 3] = [Self::Sha1, Self::Md5, Self::Sha256];

    /// File extension of the sidecar (`jar.sha1`, `pom.md5`, ...).
    pub fn extension(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Md5 => "md5",
            Self::Sha256 => "sha256",
        }
    }

    /// Lowercase hex digest of `data`.
    pub fn digest_hex(self, data: &[u8]) -> String {
        match self {
            Self::Sha1 => format!("{:x}", Sha1::digest(data)),
            Self::Md5 => format!("{:x}", Md5::digest(data)),
            Self::Sha256 => format!("{:x}", Sha256::digest(data)),
        }
    }
}
