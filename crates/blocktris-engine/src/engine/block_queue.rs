use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Block, BlockKind, ParseBlockSeedError};

/// One-step lookahead block generator.
///
/// The queue always knows the next block kind so it can be previewed. Each
/// draw hands out that kind and picks a new one uniformly at random among
/// all seven, re-drawing until it differs from the kind just handed out.
/// The same kind therefore never comes twice in a row, but there is no
/// 7-bag fairness guarantee beyond that.
///
/// # Example
///
/// ```
/// use blocktris_engine::{BlockQueue, BlockSeed};
///
/// let seed: BlockSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
/// let mut queue = BlockQueue::with_seed(seed);
///
/// let preview = queue.next_block();
/// let block = queue.get_and_update();
/// assert_eq!(block.kind(), preview);
/// assert_ne!(queue.next_block(), preview);
/// ```
#[derive(Debug, Clone)]
pub struct BlockQueue {
    rng: Pcg32,
    next_block: BlockKind,
}

impl Default for BlockQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockQueue {
    /// Creates a queue with a random seed.
    ///
    /// For a reproducible sequence, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but the whole block sequence is determined by `seed`.
    #[must_use]
    pub fn with_seed(seed: BlockSeed) -> Self {
        Self::with_rng(Pcg32::from_seed(seed.0))
    }

    /// Creates a queue that draws from the given generator.
    #[must_use]
    pub fn with_rng(mut rng: Pcg32) -> Self {
        let next_block = rng.random();
        Self { rng, next_block }
    }

    /// Returns the kind the next call to [`Self::get_and_update`] will hand out.
    #[must_use]
    pub fn next_block(&self) -> BlockKind {
        self.next_block
    }

    /// Hands out a fresh block of the previewed kind and draws the next preview.
    pub fn get_and_update(&mut self) -> Block {
        let kind = self.next_block;
        while self.next_block == kind {
            self.next_block = self.rng.random();
        }
        Block::new(kind)
    }
}

/// Seed for deterministic block generation.
///
/// A 128-bit value that initializes the queue's random number generator.
/// Two queues built from the same seed produce the same block sequence,
/// which is what makes headless simulations reproducible.
///
/// The textual form (used by `Display`, `FromStr` and serde) is a
/// 32-character hex string.
///
/// # Example
///
/// ```
/// use blocktris_engine::BlockSeed;
/// use rand::Rng as _;
///
/// let seed: BlockSeed = rand::rng().random();
/// let parsed: BlockSeed = seed.to_string().parse().unwrap();
/// assert_eq!(seed, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSeed([u8; 16]);

impl BlockSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

impl fmt::Display for BlockSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for BlockSeed {
    type Err = ParseBlockSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseBlockSeedError::new(format!(
                "expected 32 hex characters, got {}",
                s.len()
            )));
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseBlockSeedError::new(format!("invalid hex: {s}")));
        }
        let num = u128::from_str_radix(s, 16)
            .map_err(|e| ParseBlockSeedError::new(format!("invalid hex: {s} ({e})")))?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for BlockSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BlockSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `BlockSeed` values with `rng.random()`.
impl Distribution<BlockSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BlockSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        BlockSeed(seed)
    }
}
