use super::{BLSPubkey, BLSSignature, Gwei, preset::DEPOSIT_PROOF_LENGTH};
use crate::{Bytes32, Vector, ssz_container};

ssz_container! {
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct DepositMessage {
        pub pubkey: BLSPubkey,
        pub withdrawal_credentials: Bytes32,
        pub amount: Gwei,
    }
}

ssz_container! {
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct DepositData {
        pub pubkey: BLSPubkey,
        pub withdrawal_credentials: Bytes32,
        pub amount: Gwei,
        pub signature: BLSSignature,
    }
}

ssz_container! {
    /// A deposit with its Merkle branch against the deposit contract root.
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Deposit {
        pub proof: Vector<Bytes32, DEPOSIT_PROOF_LENGTH>,
        pub data: DepositData,
    }
}
