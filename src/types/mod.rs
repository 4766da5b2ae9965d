//! Phase 0 consensus containers declared on top of the SSZ core.
//!
//! Containers without a preset-dependent bound live at this level. The rest are declared once per
//! preset, in [`mainnet`] and [`minimal`], and the mainnet set is re-exported here.

pub mod preset;
pub use preset::{Mainnet, Minimal, Preset};

mod misc;
pub use misc::*;

mod attestation;
pub use attestation::*;

mod deposit;
pub use deposit::*;

mod block;
pub use block::*;

mod state;

use crate::{Bytes4, Bytes32, Bytes48, Bytes96};

pub type Slot = u64;
pub type Epoch = u64;
pub type CommitteeIndex = u64;
pub type ValidatorIndex = u64;
pub type Gwei = u64;
pub type Root = Bytes32;
pub type Domain = Bytes32;
pub type Version = Bytes4;
pub type BLSPubkey = Bytes48;
pub type BLSSignature = Bytes96;

macro_rules! preset_containers {
    ($preset:ident) => {
        use crate::{
            BitList, BitVector, Bytes32, List, Vector, ssz_container,
            types::{
                AttestationData, BLSSignature, BeaconBlockHeader, Checkpoint, Deposit, Eth1Data,
                Fork, Gwei, ProposerSlashing, Root, SignedVoluntaryExit, Slot, Validator,
                ValidatorIndex,
                preset::{JUSTIFICATION_BITS_LENGTH, $preset::*},
            },
        };

        crate::types::attestation::attestation_containers!();
        crate::types::block::block_containers!();
        crate::types::state::state_containers!();
    };
}

pub mod mainnet {
    //! Containers bounded by the [`Mainnet`](super::Mainnet) preset.
    preset_containers!(mainnet);
}
pub use mainnet::{
    Attestation, AttesterSlashing, BeaconBlock, BeaconBlockBody, BeaconState, IndexedAttestation,
    PendingAttestation, SignedBeaconBlock,
};

pub mod minimal {
    //! Containers bounded by the [`Minimal`](super::Minimal) preset.
    preset_containers!(minimal);
}
