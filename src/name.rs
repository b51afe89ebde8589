//! Name-based UUIDs (versions 3 and 5)

use crate::Uuid;
use md5::{Digest, Md5};
use sha1::Sha1;

/// The hash function that derives a name-based UUID from a namespace and a name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum HashAlgorithm {
    /// MD5, producing UUID version 3.
    Md5,

    /// SHA-1, producing UUID version 5.
    Sha1,
}

impl HashAlgorithm {
    /// Returns the UUID version number associated with the hash function.
    pub const fn version(self) -> u8 {
        match self {
            Self::Md5 => 3,
            Self::Sha1 => 5,
        }
    }

    /// Hashes `namespace` immediately followed by `name` and returns the first 16 bytes of the
    /// digest.
    pub fn digest(self, namespace: &[u8], name: &[u8]) -> [u8; 16] {
        match self {
            Self::Md5 => {
                truncate(&Md5::new().chain_update(namespace).chain_update(name).finalize())
            }
            Self::Sha1 => {
                truncate(&Sha1::new().chain_update(namespace).chain_update(name).finalize())
            }
        }
    }
}

fn truncate(digest: &[u8]) -> [u8; 16] {
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    bytes
}

impl Uuid {
    /// Name space for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self::from_bytes([
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self::from_bytes([
        0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self::from_bytes([
        0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space for X.500 DNs (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self::from_bytes([
        0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Creates a name-based UUID by hashing `namespace` followed by `name` with `algorithm`.
    ///
    /// Both arguments are plain byte sequences concatenated without a separator, so any
    /// [`Uuid`], byte slice or string can serve as the namespace. The first 16 bytes of the
    /// digest are then stamped with the version and variant bits.
    pub fn from_namespace_name(
        algorithm: HashAlgorithm,
        namespace: impl AsRef<[u8]>,
        name: impl AsRef<[u8]>,
    ) -> Self {
        let bytes = algorithm.digest(namespace.as_ref(), name.as_ref());
        Self::stamp(bytes, algorithm.version())
    }

    /// Creates a UUIDv3 object by hashing `namespace` and `name` with MD5.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid35::Uuid;
    ///
    /// let uuid = Uuid::v3(Uuid::NAMESPACE_DNS, "python.org");
    /// assert_eq!(uuid.to_string(), "6fa459ea-ee8a-1fa4-7f4e-db77e160355e");
    /// assert_eq!(uuid, Uuid::v3(Uuid::NAMESPACE_DNS, b"python.org"));
    /// ```
    pub fn v3(namespace: impl AsRef<[u8]>, name: impl AsRef<[u8]>) -> Self {
        Self::from_namespace_name(HashAlgorithm::Md5, namespace, name)
    }

    /// Creates a UUIDv5 object by hashing `namespace` and `name` with SHA-1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid35::Uuid;
    ///
    /// let uuid = Uuid::v5(Uuid::NAMESPACE_DNS, "python.org");
    /// assert_eq!(uuid.to_string(), "886313e1-3b8a-5f72-7f90-0c9aee199e5d");
    /// ```
    pub fn v5(namespace: impl AsRef<[u8]>, name: impl AsRef<[u8]>) -> Self {
        Self::from_namespace_name(HashAlgorithm::Sha1, namespace, name)
    }
}
