//! Hash tree throughput for each hasher backend and for a validator registry root.

use beacon_ssz::{
    Bytes32, Bytes48, Chunk, HashTree, Hasher, Implementation, List, Merkleize,
    types::{Validator, preset::mainnet::VALIDATOR_REGISTRY_LIMIT},
};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

const LEAF_COUNTS: [usize; 3] = [1 << 10, 1 << 14, 1 << 17];

fn leaves(count: usize) -> Vec<Chunk> {
    (0..count)
        .map(|i| {
            let mut chunk = [0u8; 32];
            chunk[..8].copy_from_slice(&(i as u64).to_le_bytes());
            chunk
        })
        .collect()
}

fn hash_tree_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_tree");
    for count in LEAF_COUNTS {
        let leaves = leaves(count);
        group.throughput(Throughput::Elements(count as u64));
        for implementation in [
            Implementation::Generic,
            Implementation::Avx,
            Implementation::Avx2,
            Implementation::Sha,
        ] {
            if !implementation.is_supported() {
                continue;
            }
            let hasher = Hasher::new(implementation);
            group.bench_with_input(
                BenchmarkId::new(implementation.to_string(), count),
                &leaves,
                |b, leaves| {
                    b.iter(|| {
                        HashTree::with_hasher(hasher, black_box(leaves), 0)
                            .map(|tree| tree.hash_tree_root())
                    })
                },
            );
        }
    }
    group.finish();
}

fn validator_registry_root(c: &mut Criterion) {
    let validators: Vec<Validator> = (0..16_384u64)
        .map(|i| Validator {
            pubkey: Bytes48::from(i),
            withdrawal_credentials: Bytes32::from(i),
            effective_balance: 32_000_000_000,
            exit_epoch: u64::MAX,
            withdrawable_epoch: u64::MAX,
            ..Default::default()
        })
        .collect();
    let registry = List::<Validator, VALIDATOR_REGISTRY_LIMIT>::new(validators)
        .expect("registry is within the limit");

    c.bench_function("validator_registry_16384", |b| {
        b.iter(|| black_box(&registry).hash_tree_root())
    });
}

criterion_group!(benches, hash_tree_backends, validator_registry_root);
criterion_main!(benches);
