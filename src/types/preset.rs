//! Preset values used as type-level bounds.
//!
//! Each preset is a module of `const`s, so the values can appear as const-generic arguments,
//! plus a marker type implementing [`Preset`] that ties the values to the containers they bound.

use crate::{Merkleize, SimpleDeserialize, SimpleSerialize, SszTypeInfo};
use core::fmt::Debug;

pub const JUSTIFICATION_BITS_LENGTH: usize = 4;
pub const DEPOSIT_CONTRACT_TREE_DEPTH: usize = 32;
/// Merkle branch length of a deposit proof, the extra node being the mixed-in deposit count.
pub const DEPOSIT_PROOF_LENGTH: usize = DEPOSIT_CONTRACT_TREE_DEPTH + 1;
pub const FAR_FUTURE_EPOCH: u64 = u64::MAX;

pub mod mainnet {
    pub const SLOTS_PER_EPOCH: usize = 32;
    pub const SLOTS_PER_HISTORICAL_ROOT: usize = 8192;
    pub const HISTORICAL_ROOTS_LIMIT: usize = 1 << 24;
    pub const EPOCHS_PER_ETH1_VOTING_PERIOD: usize = 64;
    pub const SLOTS_PER_ETH1_VOTING_PERIOD: usize = EPOCHS_PER_ETH1_VOTING_PERIOD * SLOTS_PER_EPOCH;
    pub const VALIDATOR_REGISTRY_LIMIT: usize = 1 << 40;
    pub const EPOCHS_PER_HISTORICAL_VECTOR: usize = 65536;
    pub const EPOCHS_PER_SLASHINGS_VECTOR: usize = 8192;
    pub const MAX_VALIDATORS_PER_COMMITTEE: usize = 2048;

    pub const MAX_PROPOSER_SLASHINGS: usize = 16;
    pub const MAX_ATTESTER_SLASHINGS: usize = 2;
    pub const MAX_ATTESTATIONS: usize = 128;
    pub const MAX_DEPOSITS: usize = 16;
    pub const MAX_VOLUNTARY_EXITS: usize = 16;
    pub const MAX_PENDING_ATTESTATIONS: usize = MAX_ATTESTATIONS * SLOTS_PER_EPOCH;
}

/// Short epochs and small state vectors for tests. Registry and block limits match mainnet.
pub mod minimal {
    pub use super::mainnet::{
        HISTORICAL_ROOTS_LIMIT, MAX_ATTESTATIONS, MAX_ATTESTER_SLASHINGS, MAX_DEPOSITS,
        MAX_PROPOSER_SLASHINGS, MAX_VALIDATORS_PER_COMMITTEE, MAX_VOLUNTARY_EXITS,
        VALIDATOR_REGISTRY_LIMIT,
    };

    pub const SLOTS_PER_EPOCH: usize = 8;
    pub const SLOTS_PER_HISTORICAL_ROOT: usize = 64;
    pub const EPOCHS_PER_ETH1_VOTING_PERIOD: usize = 4;
    pub const SLOTS_PER_ETH1_VOTING_PERIOD: usize = EPOCHS_PER_ETH1_VOTING_PERIOD * SLOTS_PER_EPOCH;
    pub const EPOCHS_PER_HISTORICAL_VECTOR: usize = 64;
    pub const EPOCHS_PER_SLASHINGS_VECTOR: usize = 64;
    pub const MAX_PENDING_ATTESTATIONS: usize = MAX_ATTESTATIONS * SLOTS_PER_EPOCH;
}

/// Everything a preset-bound container implements.
pub trait PresetContainer:
    SszTypeInfo + SimpleSerialize + SimpleDeserialize + Merkleize + Clone + Debug + PartialEq + Default
{
}

impl<T> PresetContainer for T where
    T: SszTypeInfo
        + SimpleSerialize
        + SimpleDeserialize
        + Merkleize
        + Clone
        + Debug
        + PartialEq
        + Default
{
}

/// A named set of bounds and the containers declared with them.
///
/// Lets code that only moves containers around stay generic over the network it runs on.
pub trait Preset: 'static + Clone + Copy + Debug + Default + PartialEq + Eq + Send + Sync {
    const NAME: &'static str;

    const SLOTS_PER_EPOCH: usize;
    const SLOTS_PER_HISTORICAL_ROOT: usize;
    const HISTORICAL_ROOTS_LIMIT: usize;
    const SLOTS_PER_ETH1_VOTING_PERIOD: usize;
    const VALIDATOR_REGISTRY_LIMIT: usize;
    const EPOCHS_PER_HISTORICAL_VECTOR: usize;
    const EPOCHS_PER_SLASHINGS_VECTOR: usize;
    const MAX_VALIDATORS_PER_COMMITTEE: usize;
    const MAX_PENDING_ATTESTATIONS: usize;

    type Attestation: PresetContainer;
    type PendingAttestation: PresetContainer;
    type AttesterSlashing: PresetContainer;
    type BeaconBlockBody: PresetContainer;
    type BeaconBlock: PresetContainer;
    type SignedBeaconBlock: PresetContainer;
    type BeaconState: PresetContainer;
}

macro_rules! impl_preset {
    ($name:ident, $label:literal, $values:ident) => {
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Preset for $name {
            const NAME: &'static str = $label;

            const SLOTS_PER_EPOCH: usize = self::$values::SLOTS_PER_EPOCH;
            const SLOTS_PER_HISTORICAL_ROOT: usize = self::$values::SLOTS_PER_HISTORICAL_ROOT;
            const HISTORICAL_ROOTS_LIMIT: usize = self::$values::HISTORICAL_ROOTS_LIMIT;
            const SLOTS_PER_ETH1_VOTING_PERIOD: usize =
                self::$values::SLOTS_PER_ETH1_VOTING_PERIOD;
            const VALIDATOR_REGISTRY_LIMIT: usize = self::$values::VALIDATOR_REGISTRY_LIMIT;
            const EPOCHS_PER_HISTORICAL_VECTOR: usize =
                self::$values::EPOCHS_PER_HISTORICAL_VECTOR;
            const EPOCHS_PER_SLASHINGS_VECTOR: usize = self::$values::EPOCHS_PER_SLASHINGS_VECTOR;
            const MAX_VALIDATORS_PER_COMMITTEE: usize =
                self::$values::MAX_VALIDATORS_PER_COMMITTEE;
            const MAX_PENDING_ATTESTATIONS: usize = self::$values::MAX_PENDING_ATTESTATIONS;

            type Attestation = super::$values::Attestation;
            type PendingAttestation = super::$values::PendingAttestation;
            type AttesterSlashing = super::$values::AttesterSlashing;
            type BeaconBlockBody = super::$values::BeaconBlockBody;
            type BeaconBlock = super::$values::BeaconBlock;
            type SignedBeaconBlock = super::$values::SignedBeaconBlock;
            type BeaconState = super::$values::BeaconState;
        }
    };
}

impl_preset!(Mainnet, "mainnet", mainnet);
impl_preset!(Minimal, "minimal", minimal);
