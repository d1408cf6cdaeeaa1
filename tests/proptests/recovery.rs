//! Property tests for compute/recover/validate workflows

use polyshare::domain::Threshold;
use polyshare::{Session, Share, ShareError};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// Secret of 0..=64 arbitrary bytes
#[derive(Clone, Debug)]
struct Secret(Vec<u8>);

impl Arbitrary for Secret {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 65;
        Secret((0..len).map(|_| u8::arbitrary(g)).collect())
    }
}

/// Non-empty secret, for properties that corrupt a byte
#[derive(Clone, Debug)]
struct NonEmptySecret(Vec<u8>);

impl Arbitrary for NonEmptySecret {
    fn arbitrary(g: &mut Gen) -> Self {
        let Secret(mut bytes) = Secret::arbitrary(g);
        if bytes.is_empty() {
            bytes.push(u8::arbitrary(g));
        }
        NonEmptySecret(bytes)
    }
}

/// Threshold in 2..=10 and a share count leaving room for redundancy
#[derive(Clone, Copy, Debug)]
struct ValidShamirParams {
    threshold: u8,
    num_shares: u8,
}

impl Arbitrary for ValidShamirParams {
    fn arbitrary(g: &mut Gen) -> Self {
        let threshold = (u8::arbitrary(g) % 9) + 2; // 2..=10
        let num_shares = threshold + 1 + (u8::arbitrary(g) % 5); // threshold+1..=threshold+5

        ValidShamirParams {
            threshold,
            num_shares,
        }
    }
}

/// Distinct x-coordinates in 1..=254, shuffled by `seed`
fn pick_indices(count: usize, seed: u64) -> Vec<u8> {
    let mut indices: Vec<u8> = (1..=254).collect();

    let mut seed = seed;
    for i in 0..count {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let range = indices.len() - i;
        let j = i + (seed >> 33) as usize % range;
        indices.swap(i, j);
    }

    indices.truncate(count);
    indices
}

fn encoder(params: ValidShamirParams, secret: &[u8]) -> Session {
    Session::with_secret(Threshold::new(params.threshold).unwrap(), secret)
}

fn decoder(params: ValidShamirParams) -> Session {
    Session::decoder(Threshold::new(params.threshold).unwrap())
}

fn compute_all(session: &Session, xs: &[u8]) -> Vec<Share> {
    xs.iter().map(|&x| session.compute(x).unwrap()).collect()
}

/// Any `threshold` distinct shares recover the secret, and every other share
/// validates against the recovered session
#[quickcheck]
fn prop_round_trip(secret: Secret, params: ValidShamirParams, seed: u64) -> bool {
    let Secret(secret) = secret;
    let session = encoder(params, &secret);

    let xs = pick_indices(params.num_shares as usize, seed);
    let shares = compute_all(&session, &xs);

    let mut recovered = decoder(params);
    let Ok(bytes) = recovered.recover(&shares[..params.threshold as usize]) else {
        return false;
    };
    if bytes != secret.as_slice() {
        return false;
    }

    shares
        .iter()
        .all(|share| recovered.is_valid(share) == Ok(true))
}

/// All computed shares together also recover the secret
#[quickcheck]
fn prop_redundant_genuine_shares_recover(
    secret: Secret,
    params: ValidShamirParams,
    seed: u64,
) -> bool {
    let Secret(secret) = secret;
    let session = encoder(params, &secret);
    let shares = compute_all(&session, &pick_indices(params.num_shares as usize, seed));

    let mut recovered = decoder(params);
    recovered.recover(&shares) == Ok(secret.as_slice())
}

/// One share fewer than the threshold is never enough
#[quickcheck]
fn prop_insufficient_shares_fail(secret: Secret, params: ValidShamirParams, seed: u64) -> bool {
    let Secret(secret) = secret;
    let session = encoder(params, &secret);
    let shares = compute_all(&session, &pick_indices(params.threshold as usize - 1, seed));

    let mut recovered = decoder(params);
    recovered.recover(&shares)
        == Err(ShareError::InsufficientShares {
            threshold: params.threshold,
            unique: params.threshold as usize - 1,
        })
}

/// Duplicated x-coordinates count once toward the threshold
#[quickcheck]
fn prop_duplicates_do_not_count(secret: Secret, params: ValidShamirParams, seed: u64) -> bool {
    let Secret(secret) = secret;
    let session = encoder(params, &secret);
    let mut shares = compute_all(&session, &pick_indices(params.threshold as usize - 1, seed));
    shares.push(shares[0].clone());

    let mut recovered = decoder(params);
    matches!(
        recovered.recover(&shares),
        Err(ShareError::InsufficientShares { unique, .. }) if unique == params.threshold as usize - 1
    )
}

/// With one redundant share, corrupting any byte is detected
#[quickcheck]
fn prop_redundant_tampering_detected(
    secret: NonEmptySecret,
    params: ValidShamirParams,
    seed: u64,
    victim: usize,
    flip: u8,
) -> bool {
    let NonEmptySecret(secret) = secret;
    let flip = flip.max(1);
    let session = encoder(params, &secret);
    let mut shares = compute_all(&session, &pick_indices(params.threshold as usize + 1, seed));

    let share = victim % shares.len();
    let position = victim % secret.len();
    shares[share].fx[position] ^= flip;

    let mut recovered = decoder(params);
    let detected = recovered.recover(&shares) == Err(ShareError::InconsistentShares);
    detected && !recovered.is_initialized()
}

/// With exactly the threshold, corruption decodes silently to a wrong secret
#[quickcheck]
fn prop_exact_threshold_tampering_undetected(
    secret: NonEmptySecret,
    params: ValidShamirParams,
    seed: u64,
    victim: usize,
    flip: u8,
) -> bool {
    let NonEmptySecret(secret) = secret;
    let flip = flip.max(1);
    let session = encoder(params, &secret);
    let mut shares = compute_all(&session, &pick_indices(params.threshold as usize, seed));

    let share = victim % shares.len();
    let position = victim % secret.len();
    shares[share].fx[position] ^= flip;

    let mut recovered = decoder(params);
    match recovered.recover(&shares) {
        Ok(bytes) => bytes != secret.as_slice(),
        Err(_) => false,
    }
}

/// A computed share validates; changing any one byte makes it invalid
#[quickcheck]
fn prop_validation_sensitivity(
    secret: NonEmptySecret,
    params: ValidShamirParams,
    x: u8,
    victim: usize,
    flip: u8,
) -> bool {
    let NonEmptySecret(secret) = secret;
    let x = (x % 254) + 1;
    let flip = flip.max(1);
    let session = encoder(params, &secret);

    let mut share = session.compute(x).unwrap();
    if session.is_valid(&share) != Ok(true) {
        return false;
    }

    let position = victim % share.fx.len();
    share.fx[position] ^= flip;
    session.is_valid(&share) == Ok(false)
}
