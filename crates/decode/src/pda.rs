use solana_sdk::pubkey::{Pubkey, MAX_SEEDS, MAX_SEED_LEN};

use crate::Error;

/// Seed of the credential authority address.
pub const AUTHORITY_SEED: &[u8] = b"authority";

/// Seed of challenge addresses.
pub const CHALLENGE_SEED: &[u8] = b"challenge";

/// Seed of receipt addresses.
pub const RECEIPT_SEED: &[u8] = b"receipt";

/// Seed of resolution addresses.
pub const RESOLUTION_SEED: &[u8] = b"resolution";

/// Find the program address for `seeds` and its canonical bump.
///
/// Bumps are tried from 255 downwards and the first off-curve address wins.
pub fn find_program_address(seeds: &[&[u8]], program_id: &Pubkey) -> crate::Result<(Pubkey, u8)> {
    // One slot is taken by the bump.
    if seeds.len() >= MAX_SEEDS {
        return Err(Error::InvalidSeeds("too many seeds"));
    }
    if seeds.iter().any(|seed| seed.len() > MAX_SEED_LEN) {
        return Err(Error::InvalidSeeds("seed longer than 32 bytes"));
    }
    Pubkey::try_find_program_address(seeds, program_id).ok_or(Error::NoBumpFound {
        program_id: *program_id,
    })
}

/// Find the credential authority address.
pub fn find_credential_authority_address(program_id: &Pubkey) -> crate::Result<(Pubkey, u8)> {
    find_program_address(&[AUTHORITY_SEED], program_id)
}

/// Find the address of the challenge named `name` created by `initiator`.
pub fn find_challenge_address(
    initiator: &Pubkey,
    name: &str,
    program_id: &Pubkey,
) -> crate::Result<(Pubkey, u8)> {
    find_program_address(
        &[CHALLENGE_SEED, initiator.as_ref(), name.as_bytes()],
        program_id,
    )
}

/// Find the receipt address of `challenger` in `challenge`.
pub fn find_receipt_address(
    challenge: &Pubkey,
    challenger: &Pubkey,
    program_id: &Pubkey,
) -> crate::Result<(Pubkey, u8)> {
    find_program_address(
        &[RECEIPT_SEED, challenge.as_ref(), challenger.as_ref()],
        program_id,
    )
}

/// Find the resolution address of `challenge`.
pub fn find_resolution_address(
    challenge: &Pubkey,
    program_id: &Pubkey,
) -> crate::Result<(Pubkey, u8)> {
    find_program_address(&[RESOLUTION_SEED, challenge.as_ref()], program_id)
}

/// Returns whether `address` is the receipt of `challenger` in `challenge`.
///
/// This is the only way to attribute a receipt: its data holds no reference
/// to either party.
pub fn is_receipt_address(
    address: &Pubkey,
    challenge: &Pubkey,
    challenger: &Pubkey,
    program_id: &Pubkey,
) -> crate::Result<bool> {
    let (expected, _) = find_receipt_address(challenge, challenger, program_id)?;
    Ok(expected == *address)
}
