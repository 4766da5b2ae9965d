//! Block containers.

use super::{BLSSignature, Epoch, Root, Slot, ValidatorIndex};
use crate::ssz_container;

ssz_container! {
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct BeaconBlockHeader {
        pub slot: Slot,
        pub proposer_index: ValidatorIndex,
        pub parent_root: Root,
        pub state_root: Root,
        pub body_root: Root,
    }
}

ssz_container! {
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SignedBeaconBlockHeader {
        pub message: BeaconBlockHeader,
        pub signature: BLSSignature,
    }
}

ssz_container! {
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ProposerSlashing {
        pub signed_header_1: SignedBeaconBlockHeader,
        pub signed_header_2: SignedBeaconBlockHeader,
    }
}


ssz_container! {
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct VoluntaryExit {
        pub epoch: Epoch,
        pub validator_index: ValidatorIndex,
    }
}

ssz_container! {
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SignedVoluntaryExit {
        pub message: VoluntaryExit,
        pub signature: BLSSignature,
    }
}

/// Block containers whose operation bounds come from the preset in scope.
macro_rules! block_containers {
    () => {
        ssz_container! {
            #[derive(Debug, Clone, PartialEq, Eq, Default)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            pub struct AttesterSlashing {
                pub attestation_1: IndexedAttestation,
                pub attestation_2: IndexedAttestation,
            }
        }

        ssz_container! {
            #[derive(Debug, Clone, PartialEq, Eq, Default)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            pub struct BeaconBlockBody {
                pub randao_reveal: BLSSignature,
                pub eth1_data: Eth1Data,
                pub graffiti: Bytes32,
                pub proposer_slashings: List<ProposerSlashing, MAX_PROPOSER_SLASHINGS>,
                pub attester_slashings: List<AttesterSlashing, MAX_ATTESTER_SLASHINGS>,
                pub attestations: List<Attestation, MAX_ATTESTATIONS>,
                pub deposits: List<Deposit, MAX_DEPOSITS>,
                pub voluntary_exits: List<SignedVoluntaryExit, MAX_VOLUNTARY_EXITS>,
            }
        }

        ssz_container! {
            #[derive(Debug, Clone, PartialEq, Eq, Default)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            pub struct BeaconBlock {
                pub slot: Slot,
                pub proposer_index: ValidatorIndex,
                pub parent_root: Root,
                pub state_root: Root,
                pub body: BeaconBlockBody,
            }
        }

        ssz_container! {
            #[derive(Debug, Clone, PartialEq, Eq, Default)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            pub struct SignedBeaconBlock {
                pub message: BeaconBlock,
                pub signature: BLSSignature,
            }
        }

        impl BeaconBlock {
            /// Header committing to this block, with the body replaced by its root.
            pub fn header(&self) -> Result<BeaconBlockHeader, crate::SSZError> {
                use crate::Merkleize;

                Ok(BeaconBlockHeader {
                    slot: self.slot,
                    proposer_index: self.proposer_index,
                    parent_root: self.parent_root,
                    state_root: self.state_root,
                    body_root: self.body.hash_tree_root()?.into(),
                })
            }
        }
    };
}
pub(crate) use block_containers;
