//! Integration tests for the draw engine: state order, invariants and scenarios.

use league_phase_draw::{
    audit_draw, load_participants_json, make_draw, DrawConfig, DrawEngine, DrawError, DrawResult,
    DrawState, Participant,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};

const LEAGUES: [&str; 4] = ["Premier League", "La Liga", "Serie A", "Bundesliga"];

/// 32 clubs, 4 pots of 8, each pot holding two clubs from each of 4 leagues.
fn balanced_field() -> Vec<Participant> {
    let mut participants = Vec::new();
    for pot in 1..=4u8 {
        for (l, league) in LEAGUES.iter().enumerate() {
            for k in 0..2 {
                participants.push(Participant::new(format!("P{pot}-{l}-{k}"), *league, pot));
            }
        }
    }
    participants
}

fn assert_invariants(result: &DrawResult, config: &DrawConfig) {
    let total = config.total_opponents();
    for (name, record) in result.iter() {
        let count = record.opponent_count();
        assert!(count <= total, "{name} has {count} opponents");
        if count == total {
            assert_eq!(record.home.len(), total / 2);
            assert_eq!(record.away.len(), total / 2);
        }

        let mut seen = HashSet::new();
        let mut per_league: HashMap<&str, usize> = HashMap::new();
        for o in record.opponents() {
            assert_ne!(o.association, record.association, "{name} drew {}", o.name);
            assert!(seen.insert(o.name.as_str()), "{name} drew {} twice", o.name);
            *per_league.entry(o.association.as_str()).or_insert(0) += 1;
        }
        assert!(per_league.values().all(|n| *n <= config.association_cap));
    }
}

#[test]
fn steps_must_run_in_order() {
    let mut engine = DrawEngine::new(balanced_field(), DrawConfig::default(), StdRng::seed_from_u64(1));
    assert_eq!(engine.state(), DrawState::Unstarted);
    assert_eq!(engine.shuffle(), Err(DrawError::InvalidState));
    assert!(matches!(engine.assign(), Err(DrawError::InvalidState)));

    engine.partition().unwrap();
    assert_eq!(engine.state(), DrawState::Partitioned);
    assert_eq!(engine.partition(), Err(DrawError::InvalidState));

    engine.shuffle().unwrap();
    assert_eq!(engine.state(), DrawState::Shuffled);

    let result = engine.assign().unwrap();
    assert_eq!(engine.state(), DrawState::Complete);
    assert_eq!(result.len(), 32);

    // A completed engine is not reused.
    assert!(matches!(engine.assign(), Err(DrawError::InvalidState)));
    assert_eq!(engine.partition(), Err(DrawError::InvalidState));
}

#[test]
fn shuffle_keeps_bucket_membership() {
    let mut engine = DrawEngine::new(balanced_field(), DrawConfig::default(), StdRng::seed_from_u64(9));
    engine.partition().unwrap();
    let before: Vec<HashSet<String>> = engine
        .buckets()
        .values()
        .map(|b| b.iter().map(|p| p.name.clone()).collect())
        .collect();
    engine.shuffle().unwrap();
    let after: Vec<HashSet<String>> = engine
        .buckets()
        .values()
        .map(|b| b.iter().map(|p| p.name.clone()).collect())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn configuration_errors_surface_before_assignment() {
    let config = DrawConfig::default();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(make_draw(&[], config, &mut rng), Err(DrawError::NoParticipants));

    let bad = vec![Participant::new("A", "L1", 1), Participant::new("B", "L2", 9)];
    assert!(matches!(
        make_draw(&bad, config, &mut rng),
        Err(DrawError::PotOutOfRange { pot: 9, .. })
    ));
}

#[test]
fn balanced_field_satisfies_invariants() {
    let config = DrawConfig::default();
    let participants = balanced_field();

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = make_draw(&participants, config, &mut rng).unwrap();

        assert_eq!(result.len(), 32);
        for p in &participants {
            assert!(result.get(&p.name).is_some());
        }
        assert_invariants(&result, &config);

        // Three other leagues at a cap of two: every club ends with six opponents,
        // the first four at home.
        for (_, record) in result.iter() {
            assert_eq!(record.opponent_count(), 6);
            assert_eq!(record.home.len(), 4);
            assert_eq!(record.away.len(), 2);
        }

        let audit = audit_draw(&result, &config);
        assert!(audit.is_valid());
        assert_eq!(audit.short_fixtures.len(), 32);
    }
}

#[test]
fn fixture_record_carries_owner_snapshot() {
    let config = DrawConfig::default();
    let participants = balanced_field();
    let mut rng = StdRng::seed_from_u64(4);
    let result = make_draw(&participants, config, &mut rng).unwrap();

    for p in &participants {
        let record = result.get(&p.name).unwrap();
        assert_eq!(record.pot, p.pot);
        assert_eq!(record.association, p.association);
        for o in record.opponents() {
            let source = participants.iter().find(|x| x.name == o.name).unwrap();
            assert_eq!(o.pot, source.pot);
            assert_eq!(o.association, source.association);
        }
    }
}

#[test]
fn same_seed_gives_same_draw() {
    let config = DrawConfig::default();
    let participants = balanced_field();
    let a = make_draw(&participants, config, &mut StdRng::seed_from_u64(42)).unwrap();
    let b = make_draw(&participants, config, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn single_association_pot_only_feeds_other_associations() {
    let config = DrawConfig::default();
    let others = ["Premier League", "La Liga", "Bundesliga", "Ligue 1"];
    let mut participants = Vec::new();
    for pot in [1u8, 3, 4] {
        for (l, league) in others.iter().enumerate() {
            participants.push(Participant::new(format!("P{pot}-{l}"), *league, pot));
        }
    }
    for k in 0..4 {
        participants.push(Participant::new(format!("P2-SerieA-{k}"), "Serie A", 2));
    }

    let mut rng = StdRng::seed_from_u64(17);
    let result = make_draw(&participants, config, &mut rng).unwrap();
    assert_invariants(&result, &config);

    for p in participants.iter().filter(|p| p.association == "Serie A") {
        let record = result.get(&p.name).unwrap();
        assert!(record.opponents().all(|o| o.pot != 2), "{} drew from pot 2", p.name);
        assert_eq!(record.opponent_count(), 6);
    }
    for p in participants.iter().filter(|p| p.association != "Serie A") {
        let record = result.get(&p.name).unwrap();
        assert_eq!(record.opponents().filter(|o| o.pot == 2).count(), 2);
    }
}

#[test]
fn single_participant_gets_empty_record() {
    let participants = vec![Participant::new("Lonely FC", "L1", 1)];
    let mut rng = StdRng::seed_from_u64(0);
    let result = make_draw(&participants, DrawConfig::default(), &mut rng).unwrap();

    assert_eq!(result.len(), 1);
    let record = result.get("Lonely FC").unwrap();
    assert_eq!(record.opponent_count(), 0);
    assert!(result.pairings().is_empty());
}

#[test]
fn bundled_teams_draw_cleanly() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/teams.json");
    let participants = load_participants_json(path).unwrap();
    assert_eq!(participants.len(), 32);

    let config = DrawConfig::default();
    let mut rng = StdRng::seed_from_u64(2024);
    let result = make_draw(&participants, config, &mut rng).unwrap();

    assert_eq!(result.len(), 32);
    assert_invariants(&result, &config);
    assert!(audit_draw(&result, &config).is_valid());
}

#[test]
fn pairings_are_deduplicated_home_away_pairs() {
    let config = DrawConfig::default();
    let mut rng = StdRng::seed_from_u64(8);
    let result = make_draw(&balanced_field(), config, &mut rng).unwrap();
    let pairings = result.pairings();

    let unique: HashSet<_> = pairings.iter().collect();
    assert_eq!(unique.len(), pairings.len());
    for p in &pairings {
        let listed = result.get(&p.home).map_or(false, |r| r.home.iter().any(|o| o.name == p.away))
            || result.get(&p.away).map_or(false, |r| r.away.iter().any(|o| o.name == p.home));
        assert!(listed, "{} vs {} not in any record", p.home, p.away);
    }
}
