/// The state container, bounded by the preset in scope.
macro_rules! state_containers {
    () => {
        ssz_container! {
            /// Full phase 0 chain state.
            #[derive(Debug, Clone, PartialEq, Eq, Default)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            pub struct BeaconState {
                pub genesis_time: u64,
                pub genesis_validators_root: Root,
                pub slot: Slot,
                pub fork: Fork,
                pub latest_block_header: BeaconBlockHeader,
                pub block_roots: Vector<Root, SLOTS_PER_HISTORICAL_ROOT>,
                pub state_roots: Vector<Root, SLOTS_PER_HISTORICAL_ROOT>,
                pub historical_roots: List<Root, HISTORICAL_ROOTS_LIMIT>,
                pub eth1_data: Eth1Data,
                pub eth1_data_votes: List<Eth1Data, SLOTS_PER_ETH1_VOTING_PERIOD>,
                pub eth1_deposit_index: u64,
                pub validators: List<Validator, VALIDATOR_REGISTRY_LIMIT>,
                pub balances: List<Gwei, VALIDATOR_REGISTRY_LIMIT>,
                pub randao_mixes: Vector<Bytes32, EPOCHS_PER_HISTORICAL_VECTOR>,
                pub slashings: Vector<Gwei, EPOCHS_PER_SLASHINGS_VECTOR>,
                pub previous_epoch_attestations: List<PendingAttestation, MAX_PENDING_ATTESTATIONS>,
                pub current_epoch_attestations: List<PendingAttestation, MAX_PENDING_ATTESTATIONS>,
                pub justification_bits: BitVector<JUSTIFICATION_BITS_LENGTH>,
                pub previous_justified_checkpoint: Checkpoint,
                pub current_justified_checkpoint: Checkpoint,
                pub finalized_checkpoint: Checkpoint,
            }
        }
    };
}
pub(crate) use state_containers;
