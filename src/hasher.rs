//! Batched SHA-256 backend used by the hash tree.
//!
//! Every hash-tree node is the SHA-256 digest of one 64-byte block (two concatenated chunks). A
//! [`Hasher`] turns `n` such blocks into `n` chunks in one call. The backend is picked once per
//! process from the CPU features that are available, but any [`Hasher`] can be handed to a
//! [`HashTree`](crate::HashTree) directly, which keeps tests pinned to a known call path.

use crate::{BYTES_PER_CHUNK, BYTES_PER_HASH_BLOCK, SSZError, hashtree::Chunk};
use alloc::boxed::Box;
use core::fmt;
use once_cell::race::OnceBox;
use sha2::{Digest, Sha256, digest::generic_array::GenericArray};

/// Signature shared by all backends: hash `input` (64 bytes per output chunk) into `output`.
pub type CompressFn = fn(&mut [Chunk], &[u8]);

/// SHA-256 initial hash value.
const IV: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Second block of every 64-byte message: the `0x80` terminator and a 512-bit length.
const PADDING_BLOCK: [u8; BYTES_PER_HASH_BLOCK] = {
    let mut block = [0u8; BYTES_PER_HASH_BLOCK];
    block[0] = 0x80;
    block[62] = 0x02;
    block
};

static GLOBAL: OnceBox<Hasher> = OnceBox::new();

/// Which SHA-256 call path a [`Hasher`] runs, named after the CPU feature it was selected for.
///
/// Both paths end in the `sha2` block function, and `sha2` picks the CPU instructions for that
/// function itself at runtime. The variants therefore record which feature was detected and how
/// blocks are fed in, not distinct instruction sets. Building `sha2` with its `force-soft` feature pins every
/// variant to the portable code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Implementation {
    /// One streaming `Sha256` digest per block.
    Generic,
    /// Raw block compression, selected on a CPU with AVX.
    Avx,
    /// Raw block compression, selected on a CPU with AVX2.
    Avx2,
    /// Raw block compression, selected on a CPU with SHA extensions (x86 SHA-NI or ARMv8 SHA2).
    Sha,
}

impl Implementation {
    /// Fastest implementation supported by the running CPU.
    ///
    /// Without the `std` feature there is no runtime feature probing and this is always
    /// [`Implementation::Generic`].
    pub fn detect() -> Self {
        #[cfg(all(feature = "std", any(target_arch = "x86", target_arch = "x86_64")))]
        {
            if std::is_x86_feature_detected!("sha") {
                return Self::Sha;
            }
            if std::is_x86_feature_detected!("avx2") {
                return Self::Avx2;
            }
            if std::is_x86_feature_detected!("avx") {
                return Self::Avx;
            }
        }
        #[cfg(all(feature = "std", target_arch = "aarch64"))]
        {
            if std::arch::is_aarch64_feature_detected!("sha2") {
                return Self::Sha;
            }
        }
        Self::Generic
    }

    /// Returns true if the running CPU can execute this implementation.
    pub fn is_supported(self) -> bool {
        match self {
            Self::Generic => true,
            #[cfg(all(feature = "std", any(target_arch = "x86", target_arch = "x86_64")))]
            Self::Avx => std::is_x86_feature_detected!("avx"),
            #[cfg(all(feature = "std", any(target_arch = "x86", target_arch = "x86_64")))]
            Self::Avx2 => std::is_x86_feature_detected!("avx2"),
            #[cfg(all(feature = "std", any(target_arch = "x86", target_arch = "x86_64")))]
            Self::Sha => std::is_x86_feature_detected!("sha"),
            #[cfg(all(feature = "std", target_arch = "aarch64"))]
            Self::Sha => std::arch::is_aarch64_feature_detected!("sha2"),
            #[allow(unreachable_patterns)]
            _ => false,
        }
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Generic => "generic",
            Self::Avx => "avx",
            Self::Avx2 => "avx2",
            Self::Sha => "sha",
        };
        f.write_str(name)
    }
}

/// Handle to a batched SHA-256 backend.
#[derive(Clone, Copy)]
pub struct Hasher {
    implementation: Implementation,
    compress_fn: CompressFn,
}

impl Hasher {
    /// Process-wide hasher, detected on first use and reused afterwards.
    pub fn global() -> Self {
        *GLOBAL.get_or_init(|| {
            let hasher = Self::best_available();
            tracing::debug!(implementation = %hasher.implementation, "selected sha256 backend");
            Box::new(hasher)
        })
    }

    /// Hasher running the given implementation.
    ///
    /// Every variant produces identical output on any machine, including variants the running
    /// CPU does not support.
    pub fn new(implementation: Implementation) -> Self {
        let compress_fn: CompressFn = match implementation {
            Implementation::Generic => sha256_digest_blocks,
            Implementation::Avx | Implementation::Avx2 | Implementation::Sha => {
                sha256_compress_blocks
            }
        };
        Self {
            implementation,
            compress_fn,
        }
    }

    /// Hasher on the streaming digest path.
    pub fn generic() -> Self {
        Self::new(Implementation::Generic)
    }

    /// Hasher for the fastest implementation the running CPU supports.
    pub fn best_available() -> Self {
        Self::new(Implementation::detect())
    }

    pub fn implementation(&self) -> Implementation {
        self.implementation
    }

    /// Hashes `output.len()` independent 64-byte blocks from `input`, one chunk per block.
    pub fn compress(&self, output: &mut [Chunk], input: &[u8]) -> Result<(), SSZError> {
        if input.len() != output.len() * BYTES_PER_HASH_BLOCK {
            return Err(SSZError::InvalidChunkSize);
        }
        (self.compress_fn)(output, input);
        Ok(())
    }

    /// Hash of the two chunks concatenated.
    pub fn hash_pair(&self, left: &Chunk, right: &Chunk) -> Chunk {
        let mut block = [0u8; BYTES_PER_HASH_BLOCK];
        block[..BYTES_PER_CHUNK].copy_from_slice(left);
        block[BYTES_PER_CHUNK..].copy_from_slice(right);
        let mut out = [[0u8; BYTES_PER_CHUNK]; 1];
        (self.compress_fn)(&mut out, &block);
        out[0]
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::global()
    }
}

impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hasher").field("implementation", &self.implementation).finish()
    }
}

impl PartialEq for Hasher {
    fn eq(&self, other: &Self) -> bool {
        self.implementation == other.implementation
    }
}

impl Eq for Hasher {}

/// Streaming digest of each block.
fn sha256_digest_blocks(output: &mut [Chunk], input: &[u8]) {
    for (out, block) in output.iter_mut().zip(input.chunks_exact(BYTES_PER_HASH_BLOCK)) {
        out.copy_from_slice(&Sha256::digest(block));
    }
}

/// Block compression of each message block followed by the constant padding block.
fn sha256_compress_blocks(output: &mut [Chunk], input: &[u8]) {
    let padding = GenericArray::clone_from_slice(&PADDING_BLOCK);
    for (out, block) in output.iter_mut().zip(input.chunks_exact(BYTES_PER_HASH_BLOCK)) {
        let mut state = IV;
        sha2::compress256(&mut state, &[GenericArray::clone_from_slice(block), padding]);
        for (bytes, word) in out.chunks_exact_mut(4).zip(state) {
            bytes.copy_from_slice(&word.to_be_bytes());
        }
    }
}
