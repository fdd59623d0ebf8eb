use pact_decode::{
    classify, classify_by_size, AccountDecode, AccountEncode, AccountKind, Challenge,
    Classification, CredentialAuthority, Error, FixedClock, Harvester, Provenance, RawAccount,
    Receipt, Resolution, TokenKind,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use solana_sdk::pubkey::Pubkey;

fn challenge(index: usize) -> Challenge {
    Challenge {
        name: format!("challenge-{index}"),
        initiator: Pubkey::new_unique(),
        token_kind: if index % 2 == 0 {
            TokenKind::Wsol
        } else {
            TokenKind::Usdc
        },
        stake_amount: 1_000 * index as u64,
        fee_basis_points: (index % 10_001) as u16,
        stake_end_at: 1_000 + index as i64,
        claim_start_from: 2_000 + index as i64,
        schema: Pubkey::new_unique(),
        attestor: Pubkey::new_unique(),
        bump: 255,
    }
}

fn foreign_discriminator(rng: &mut StdRng) -> [u8; 8] {
    loop {
        let disc: [u8; 8] = rng.gen();
        if classify(&disc) == Classification::Unknown {
            return disc;
        }
    }
}

fn mixed_batch(program_id: &Pubkey) -> Vec<RawAccount> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..100)
        .map(|index| {
            let data = if index % 2 == 0 {
                match index % 6 {
                    0 => challenge(index).encode().unwrap(),
                    2 => Receipt { bump: index as u8 }.encode().unwrap(),
                    _ => Resolution {
                        root_hash: [index as u8; 32],
                        winner_count: 3,
                        winner_not_claimed_count: 1,
                        winner_list_uri: format!("https://example.com/{index}").into_bytes(),
                        bump: 250,
                    }
                    .encode()
                    .unwrap(),
                }
            } else {
                let mut data = foreign_discriminator(&mut rng).to_vec();
                let len = rng.gen_range(0, 200);
                data.extend((0..len).map(|_| rng.gen::<u8>()));
                data
            };
            RawAccount::new(Pubkey::new_unique(), *program_id, 0, data)
        })
        .collect()
}

#[test]
fn unknown_accounts_are_skipped() {
    let program_id = Pubkey::new_unique();
    let accounts = mixed_batch(&program_id);

    let result = Harvester::new(program_id)
        .with_clock(FixedClock(1_050))
        .harvest(&accounts);

    assert_eq!(result.stats.total, 100);
    assert_eq!(result.stats.ignored, 50);
    assert!(result.stats.decode_failures.is_empty());
    let decoded = result.challenges.len() + result.receipts.len() + result.resolutions.len();
    assert_eq!(decoded, 50);
    assert_eq!(
        result.stats.by_kind.values().sum::<usize>(),
        50,
        "{:?}",
        result.stats.by_kind
    );

    // Input order is preserved within each collection.
    let challenge_addresses = accounts
        .iter()
        .filter(|a| classify(&a.data) == Classification::Known(AccountKind::Challenge))
        .map(|a| a.address)
        .collect::<Vec<_>>();
    assert_eq!(
        result
            .challenges
            .iter()
            .map(|c| c.address)
            .collect::<Vec<_>>(),
        challenge_addresses
    );

    for harvested in &result.challenges {
        assert_eq!(
            harvested.is_active,
            1_050 < harvested.challenge.stake_end_at
        );
    }
}

#[test]
fn harvest_is_idempotent() {
    let program_id = Pubkey::new_unique();
    let accounts = mixed_batch(&program_id);
    let harvester = Harvester::new(program_id).with_clock(FixedClock(1_000));
    assert_eq!(harvester.harvest(&accounts), harvester.harvest(&accounts));
}

#[test]
fn truncated_known_records_fail_with_buffer_too_short() {
    let records = [
        challenge(1).encode().unwrap(),
        Receipt { bump: 9 }.encode().unwrap(),
        Resolution {
            root_hash: [0; 32],
            winner_count: 0,
            winner_not_claimed_count: 0,
            winner_list_uri: Vec::new(),
            bump: 1,
        }
        .encode()
        .unwrap(),
        CredentialAuthority {
            signer: Pubkey::new_unique(),
            bump: 2,
        }
        .encode()
        .unwrap(),
    ];

    for data in &records {
        let kind = classify(data).kind().unwrap();
        for len in 8..data.len() {
            let err = pact_decode::decode_any(kind, &data[..len]).unwrap_err();
            assert!(
                matches!(err, Error::BufferTooShort { .. }),
                "{kind} truncated to {len}: {err}"
            );
        }
    }

    assert!(matches!(
        Receipt::decode(&[&records[1][..], &[0]].concat()),
        Err(Error::UnexpectedLength { .. })
    ));
}

#[test]
fn decode_failures_do_not_abort_the_batch() {
    let program_id = Pubkey::new_unique();
    let mut accounts = mixed_batch(&program_id);
    // Cut every challenge in half.
    for account in accounts.iter_mut() {
        if classify(&account.data) == Classification::Known(AccountKind::Challenge) {
            let len = account.data.len() / 2;
            account.data.truncate(len);
        }
    }

    let result = Harvester::new(program_id)
        .with_clock(FixedClock(0))
        .harvest(&accounts);
    assert!(result.challenges.is_empty());
    assert_eq!(
        result.stats.decode_failures.len(),
        result.stats.by_kind[&AccountKind::Challenge]
    );
    assert!(!result.receipts.is_empty());
    assert!(!result.resolutions.is_empty());
}

#[test]
fn size_fallback_never_touches_harvest_output() {
    let program_id = Pubkey::new_unique();
    let accounts = mixed_batch(&program_id);
    let harvester = Harvester::new(program_id).with_clock(FixedClock(1_000));

    let before = harvester.harvest(&accounts);
    let sizes = classify_by_size(&accounts);
    let after = harvester.harvest(&accounts);

    assert_eq!(before, after);
    assert_eq!(before.provenance(), Provenance::Discriminator);
    assert_eq!(sizes.provenance, Provenance::SizeHeuristic);
    assert_ne!(before.provenance(), sizes.provenance);
    assert_eq!(
        sizes.groups.iter().map(|g| g.addresses.len()).sum::<usize>(),
        accounts.len()
    );
}
