//! End-to-end encoding and merkleization of the phase 0 state.

use alloy_primitives::{B256, hex};
use beacon_ssz::{
    BitList, BitVector, Bytes32, Bytes48, List, Merkleize, SSZError, SimpleDeserialize,
    SimpleSerialize, SszTypeInfo,
    types::{
        AttestationData, BeaconState, Checkpoint, Eth1Data, Mainnet, Minimal, PendingAttestation,
        Preset, Validator, minimal, preset::FAR_FUTURE_EPOCH,
    },
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn populated_state() -> BeaconState {
    let mut state = BeaconState {
        genesis_time: 1606824023,
        slot: 5,
        eth1_deposit_index: 2,
        justification_bits: BitVector::from_bools(&[true, false, true, false]).unwrap(),
        finalized_checkpoint: Checkpoint {
            epoch: 1,
            root: Bytes32::from_array([0x44; 32]),
        },
        ..Default::default()
    };
    state.block_roots[0] = Bytes32::from_array([0x11; 32]);
    state.randao_mixes[1] = Bytes32::from_array([0x22; 32]);
    state
        .historical_roots
        .push(Bytes32::from_array([0x33; 32]))
        .unwrap();
    state
        .eth1_data_votes
        .push(Eth1Data {
            deposit_count: 1,
            ..Default::default()
        })
        .unwrap();
    state
        .validators
        .push(Validator {
            pubkey: Bytes48::from_array([0x01; 48]),
            withdrawal_credentials: Bytes32::from_array([0x02; 32]),
            effective_balance: 32_000_000_000,
            exit_epoch: FAR_FUTURE_EPOCH,
            withdrawable_epoch: FAR_FUTURE_EPOCH,
            ..Default::default()
        })
        .unwrap();
    state
        .validators
        .push(Validator {
            pubkey: Bytes48::from_array([0x03; 48]),
            withdrawal_credentials: Bytes32::from_array([0x04; 32]),
            effective_balance: 31_000_000_000,
            slashed: true,
            activation_eligibility_epoch: 1,
            activation_epoch: 2,
            exit_epoch: 3,
            withdrawable_epoch: 4,
        })
        .unwrap();
    state.balances.push(32_000_000_000).unwrap();
    state.balances.push(31_000_000_000).unwrap();
    state
        .previous_epoch_attestations
        .push(PendingAttestation {
            aggregation_bits: BitList::from_bools(&[true, true]).unwrap(),
            data: AttestationData::default(),
            inclusion_delay: 1,
            proposer_index: 7,
        })
        .unwrap();
    state
}

#[test]
fn default_state_root() {
    init_tracing();
    assert_eq!(BeaconState::fixed_size(), None);
    assert_eq!(
        BeaconState::default().hash_tree_root().unwrap(),
        B256::from(hex!("0996b41e411c3b49dedd1ae54df347e9a0f8e81f1bb2faba7e10b9af91b96bfa"))
    );
}

#[test]
fn default_state_encoding() {
    let bytes = BeaconState::default().to_ssz_bytes().unwrap();
    // Nothing but the fixed region when every list is empty.
    assert_eq!(bytes.len(), 2_687_377);
    assert_eq!(BeaconState::deserialize(&bytes), Ok(BeaconState::default()));
}

#[test]
fn populated_state_round_trip() {
    init_tracing();
    let state = populated_state();
    let bytes = state.to_ssz_bytes().unwrap();
    let decoded = BeaconState::deserialize(&bytes).unwrap();
    assert_eq!(decoded, state);
    assert_eq!(decoded.validators.len(), 2);
    assert!(decoded.validators[1].slashed);
    assert_eq!(decoded.justification_bits.get(2), Some(true));
}

#[test]
fn populated_state_root() {
    assert_eq!(
        populated_state().hash_tree_root().unwrap(),
        B256::from(hex!("01e9730818877cc4a0bdf22c5a3b0ecdd0e261abaf24042b07e917ca75a5e4f0"))
    );
}

#[test]
fn truncated_state_is_rejected() {
    let bytes = populated_state().to_ssz_bytes().unwrap();
    assert!(BeaconState::deserialize(&bytes[..bytes.len() - 1]).is_err());
    assert!(matches!(
        BeaconState::deserialize(&bytes[..1000]),
        Err(SSZError::ExpectedFurtherInput { .. })
    ));
}

#[test]
fn balances_list_is_packed() {
    let balances = List::<u64, 4>::new(vec![1, 2]).unwrap();
    let mut chunk = [0u8; 32];
    chunk[0] = 1;
    chunk[8] = 2;
    let mut length = [0u8; 32];
    length[0] = 2;
    let expected = beacon_ssz::Hasher::generic().hash_pair(&chunk, &length);
    assert_eq!(balances.hash_tree_root().unwrap(), B256::from(expected));
}

fn preset_default_state_root<P: Preset>() -> B256 {
    P::BeaconState::default().hash_tree_root().unwrap()
}

fn empty_state_size<P: Preset>() -> usize {
    P::BeaconState::default().to_ssz_bytes().unwrap().len()
}

#[test]
fn preset_default_roots() {
    assert_eq!(preset_default_state_root::<Mainnet>(), BeaconState::default().hash_tree_root().unwrap());
    assert_eq!(
        preset_default_state_root::<Minimal>(),
        B256::from(hex!("695ae40675b9d2a7d4927f9725717976fedfb7c4f6e72209b3b7847361ff398e"))
    );
    assert_eq!(empty_state_size::<Mainnet>(), 2_687_377);
    assert_eq!(empty_state_size::<Minimal>(), 7_057);
}

#[test]
fn minimal_state_round_trip() {
    init_tracing();
    let mut state = minimal::BeaconState {
        slot: 64,
        ..Default::default()
    };
    assert_eq!(state.block_roots.len(), Minimal::SLOTS_PER_HISTORICAL_ROOT);
    assert_eq!(state.randao_mixes.len(), Minimal::EPOCHS_PER_HISTORICAL_VECTOR);
    state.block_roots[63] = Bytes32::from_array([0x11; 32]);
    state.randao_mixes[0] = Bytes32::from_array([0x22; 32]);
    state
        .validators
        .push(Validator {
            pubkey: Bytes48::from_array([0x01; 48]),
            withdrawal_credentials: Bytes32::from_array([0x02; 32]),
            effective_balance: 32_000_000_000,
            exit_epoch: FAR_FUTURE_EPOCH,
            withdrawable_epoch: FAR_FUTURE_EPOCH,
            ..Default::default()
        })
        .unwrap();
    state.balances.push(32_000_000_000).unwrap();
    state
        .eth1_data_votes
        .push(Eth1Data {
            deposit_count: 3,
            ..Default::default()
        })
        .unwrap();

    let bytes = state.to_ssz_bytes().unwrap();
    assert_eq!(minimal::BeaconState::deserialize(&bytes), Ok(state.clone()));
    assert_eq!(
        state.hash_tree_root().unwrap(),
        B256::from(hex!("5c2d65cde5e30b65a4a1455bc000d4ed91fbd7b18fe81770ae1193a238ddb177"))
    );

    // A minimal encoding is far too short for the mainnet layout.
    assert!(matches!(
        BeaconState::deserialize(&bytes),
        Err(SSZError::ExpectedFurtherInput { .. })
    ));
}

#[test]
fn minimal_eth1_votes_are_bounded() {
    let mut state = minimal::BeaconState::default();
    for _ in 0..Minimal::SLOTS_PER_ETH1_VOTING_PERIOD {
        state.eth1_data_votes.push(Eth1Data::default()).unwrap();
    }
    assert_eq!(
        state.eth1_data_votes.push(Eth1Data::default()),
        Err(SSZError::CapacityExceeded { limit: 32, got: 33 })
    );
}
