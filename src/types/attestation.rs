//! Attestation containers.

use super::{Checkpoint, CommitteeIndex, Root, Slot};
use crate::ssz_container;

ssz_container! {
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct AttestationData {
        pub slot: Slot,
        pub index: CommitteeIndex,
        pub beacon_block_root: Root,
        pub source: Checkpoint,
        pub target: Checkpoint,
    }
}

/// Attestation containers whose aggregation bounds come from the preset in scope.
macro_rules! attestation_containers {
    () => {
        ssz_container! {
            #[derive(Debug, Clone, PartialEq, Eq, Default)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            pub struct IndexedAttestation {
                pub attesting_indices: List<ValidatorIndex, MAX_VALIDATORS_PER_COMMITTEE>,
                pub data: AttestationData,
                pub signature: BLSSignature,
            }
        }

        ssz_container! {
            #[derive(Debug, Clone, PartialEq, Eq, Default)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            pub struct PendingAttestation {
                pub aggregation_bits: BitList<MAX_VALIDATORS_PER_COMMITTEE>,
                pub data: AttestationData,
                pub inclusion_delay: Slot,
                pub proposer_index: ValidatorIndex,
            }
        }

        ssz_container! {
            #[derive(Debug, Clone, PartialEq, Eq, Default)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            pub struct Attestation {
                pub aggregation_bits: BitList<MAX_VALIDATORS_PER_COMMITTEE>,
                pub data: AttestationData,
                pub signature: BLSSignature,
            }
        }
    };
}
pub(crate) use attestation_containers;
