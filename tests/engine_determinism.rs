//! Engine Determinism Tests
//!
//! - Same record and salt always give the same numeral
//! - Output is always four ASCII digits
//! - Unweighted output is the seed mod 10000
//! - Any change to the canonical form changes the seed
//! - Heavier digits are drawn more often
//! - Raising one digit's weight never lowers how often it is drawn

use mystic4d::engine::{
    canonicalize, compose_weights, derive_numeral, extract_seed, sample_digit, sample_digits,
    DerivationMode, DigitWeights, InterpretationRecord, Mulberry32, NumeralEngine,
};
use mystic4d::facts::{Shio, Zodiac};

// =============================================================================
// Helper Functions
// =============================================================================

fn record(date: &str, time: &str, signals: Option<&str>) -> InterpretationRecord {
    InterpretationRecord::from_strings(date, time, 2025, Shio::Ular, signals.map(str::to_string))
        .unwrap()
}

fn fixture() -> InterpretationRecord {
    record("2025-08-15", "23:10", None)
}

fn seed_of(record: &InterpretationRecord, salt: &str) -> u32 {
    extract_seed(canonicalize(record, salt).as_bytes())
}

// =============================================================================
// Fixtures
// =============================================================================

/// Reference record, empty salt.
#[test]
fn test_reference_derivation() {
    let derivation = NumeralEngine::new()
        .derive(&fixture(), "", DerivationMode::Weighted)
        .unwrap();

    assert_eq!(
        derivation.canonical,
        "dateISO:2025-08-15,timeHHmm:23:10,year:2025,yearRoot:9,dateRoot:5,timeRoot:6,\
         zodiac:Leo,shio:Ular,hourWeight:1.5|"
    );
    assert_eq!(derivation.seed, 3674273238);
    assert_eq!(derivation.numeral.as_str(), "2796");
}

#[test]
fn test_reference_variants() {
    let base = fixture();
    assert_eq!(
        derive_numeral(&base, "pepper", DerivationMode::Weighted).unwrap().as_str(),
        "5083"
    );
    assert_eq!(
        derive_numeral(&base, "", DerivationMode::Unweighted).unwrap().as_str(),
        "3238"
    );

    let with_signals = record("2025-08-15", "23:10", Some("sunny-flying-news-dance"));
    assert_eq!(
        derive_numeral(&with_signals, "", DerivationMode::Weighted).unwrap().as_str(),
        "3386"
    );

    let next_minute = record("2025-08-15", "23:11", None);
    assert_eq!(
        derive_numeral(&next_minute, "", DerivationMode::Weighted).unwrap().as_str(),
        "3582"
    );
}

#[test]
fn test_reference_facts() {
    let r = fixture();
    assert_eq!((r.year_root, r.date_root, r.time_root), (9, 5, 6));
    assert_eq!(r.zodiac, Zodiac::Leo);
    assert_eq!(r.hour_weight, 1.5);
}

// =============================================================================
// Determinism
// =============================================================================

/// Repeated derivations of the same input agree.
#[test]
fn test_repeatable() {
    let r = record("2024-02-29", "06:05", Some("rain"));
    let first = derive_numeral(&r, "s", DerivationMode::Weighted).unwrap();
    for _ in 0..100 {
        assert_eq!(derive_numeral(&r, "s", DerivationMode::Weighted).unwrap(), first);
    }
}

/// A record that went through JSON derives identically.
#[test]
fn test_json_transport_preserves_numeral() {
    let r = record("2025-12-31", "19:45", Some("late-news"));
    let transported: InterpretationRecord =
        serde_json::from_str(&serde_json::to_string(&r).unwrap()).unwrap();
    assert_eq!(
        derive_numeral(&r, "", DerivationMode::Weighted).unwrap(),
        derive_numeral(&transported, "", DerivationMode::Weighted).unwrap()
    );
}

// =============================================================================
// Output Shape
// =============================================================================

#[test]
fn test_always_four_digits() {
    for month in 1..=12 {
        for hour in [0, 5, 12, 17, 18, 21, 23] {
            let date = format!("2025-{:02}-14", month);
            let time = format!("{:02}:{:02}", hour, month * 4);
            let r = record(&date, &time, None);

            for mode in [DerivationMode::Weighted, DerivationMode::Unweighted] {
                let numeral = derive_numeral(&r, "", mode).unwrap();
                assert_eq!(numeral.as_str().len(), 4);
                assert!(numeral.as_str().bytes().all(|b| b.is_ascii_digit()));
            }
        }
    }
}

/// Unweighted output is the zero-padded seed mod 10000.
#[test]
fn test_unweighted_is_seed_mod() {
    for minute in 0..60 {
        let r = record("2025-03-01", &format!("08:{:02}", minute), None);
        let numeral = derive_numeral(&r, "", DerivationMode::Unweighted).unwrap();
        assert_eq!(numeral.as_str(), format!("{:04}", seed_of(&r, "") % 10_000));
    }
}

// =============================================================================
// Sensitivity
// =============================================================================

#[test]
fn test_each_input_moves_the_seed() {
    let base = fixture();
    let base_seed = seed_of(&base, "");

    let mut variants = vec![
        record("2025-08-16", "23:10", None),
        record("2025-08-15", "23:11", None),
        record("2025-08-15", "23:10", Some("x")),
    ];

    let mut other_shio = base.clone();
    other_shio.shio = Shio::Naga;
    variants.push(other_shio);

    let mut other_year = base.clone();
    other_year.year = 2026;
    variants.push(other_year);

    for variant in &variants {
        assert_ne!(seed_of(variant, ""), base_seed);
    }
    assert_ne!(seed_of(&base, "salt"), base_seed);
}

#[test]
fn test_malformed_records_rejected() {
    let mut bad_time = fixture();
    bad_time.time_hhmm = "7:05".into();
    assert!(derive_numeral(&bad_time, "", DerivationMode::Weighted).is_err());

    let mut bad_date = fixture();
    bad_date.date_iso = "2025-02-30".into();
    assert!(derive_numeral(&bad_date, "", DerivationMode::Weighted).is_err());

    let mut bad_weight = fixture();
    bad_weight.hour_weight = f64::NAN;
    assert!(derive_numeral(&bad_weight, "", DerivationMode::Unweighted).is_err());
}

// =============================================================================
// Weighted Distribution
// =============================================================================

/// Over many seeds, digit frequencies follow the composed weights.
#[test]
fn test_heavier_digits_drawn_more_often() {
    let weights = compose_weights(&fixture());
    let mut counts = [0usize; 10];

    for seed in 0..5_000u32 {
        let mut rng = Mulberry32::new(seed.wrapping_mul(2_654_435_761));
        for digit in sample_digits(&mut rng, &weights, 4) {
            counts[digit as usize] += 1;
        }
    }

    let draws: usize = counts.iter().sum();
    assert_eq!(draws, 20_000);

    // 9 carries about twice the weight of 0
    assert!(counts[9] > counts[0] * 3 / 2, "counts: {:?}", counts);
    assert!(counts[8] > counts[3], "counts: {:?}", counts);

    for digit in 0..10u8 {
        let expected = weights.probability(digit) * draws as f64;
        let observed = counts[digit as usize] as f64;
        assert!(
            (observed - expected).abs() < expected * 0.15,
            "digit {}: observed {}, expected {:.0}",
            digit,
            observed,
            expected
        );
    }
}

fn draws_of(digit: u8, weights: &DigitWeights, seeds: u32) -> usize {
    (0..seeds)
        .filter(|&seed| {
            let mut rng = Mulberry32::new(seed.wrapping_mul(2_654_435_761));
            sample_digit(&mut rng, weights) == digit
        })
        .count()
}

/// Scaling one digit's weight by 1.5 over the same seeds draws it more often.
#[test]
fn test_raising_a_weight_never_lowers_its_share() {
    let base = compose_weights(&fixture());

    for digit in 0..10u8 {
        let mut raised = [0.0; 10];
        raised.copy_from_slice(base.as_slice());
        raised[digit as usize] *= 1.5;
        let raised = DigitWeights::new(raised);

        let before = draws_of(digit, &base, 20_000);
        let after = draws_of(digit, &raised, 20_000);
        assert!(
            after > before,
            "digit {}: {} draws before, {} after",
            digit,
            before,
            after
        );
        assert!(raised.probability(digit) > base.probability(digit));
    }
}
