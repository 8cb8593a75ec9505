use rand::rngs::StdRng;
use rand::SeedableRng;
use spelling_bee::{
    Entry, LetterSet, LoadError, LoaderConfig, PuzzleError, PuzzleIndex, MAX_DISTINCT_LETTERS,
    MIN_WORD_LENGTH,
};
use std::collections::BTreeSet;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/mini_dictionary.txt");

fn load_fixture() -> PuzzleIndex {
    PuzzleIndex::load(FIXTURE).unwrap()
}

fn set(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_load_filters_words() {
    let index = load_fixture();
    assert_eq!(index.word_count(), 15);

    assert!(index.contains("TORN"));
    assert!(index.contains("MAILBOX"));
    assert!(!index.contains("CAT"), "shorter than {} letters", MIN_WORD_LENGTH);
    assert!(!index.contains("ZAX"));
    assert!(
        !index.contains("MAILBOXES"),
        "more than {} distinct letters",
        MAX_DISTINCT_LETTERS
    );
}

#[test]
fn test_pangram_letter_sets() {
    let index = load_fixture();
    let sets: Vec<&str> = index.letter_sets().collect();
    assert_eq!(sets, vec!["ABILMOX", "CDNORTU", "EGHNRST"]);
    assert_eq!(index.letter_set_count(), 3);

    for letters in sets {
        assert_eq!(letters.len(), 7);
        assert!(
            !index.pangrams(letters, false).unwrap().is_empty(),
            "no pangram backs {}",
            letters
        );
    }
}

#[test]
fn test_anagram_letter_sets_collapse() {
    let text = "h1\nh2\nABCDEFG one\nGFEDCBA two\nBADCAFEG three\n";
    let index = PuzzleIndex::from_listing(text, &LoaderConfig::default()).unwrap();
    assert_eq!(index.word_count(), 3);
    assert_eq!(index.letter_sets().collect::<Vec<_>>(), vec!["ABCDEFG"]);
}

#[test]
fn test_pangrams() {
    let index = load_fixture();
    assert_eq!(index.pangrams("DUNORCT", false).unwrap(), set(&["CONDUCTOR"]));
    assert_eq!(index.pangrams("MAILBOX", false).unwrap(), set(&["MAILBOX"]));
    assert_eq!(index.pangrams("STRENGH", false).unwrap(), set(&["STRENGTH"]));
}

#[test]
fn test_perfect_pangrams() {
    let index = load_fixture();
    assert_eq!(index.pangrams("MAILBOX", true).unwrap(), set(&["MAILBOX"]));
    assert!(index.pangrams("DUNORCT", true).unwrap().is_empty());
    assert!(index.pangrams("EGHNRST", true).unwrap().is_empty());
}

#[test]
fn test_perfect_is_subset_of_all_pangrams() {
    let index = load_fixture();
    for letters in ["ABILMOX", "CDNORTU", "EGHNRST", "NOT", "ORT"] {
        let all = index.pangrams(letters, false).unwrap();
        let perfect = index.pangrams(letters, true).unwrap();
        assert!(perfect.is_subset(&all), "{}", letters);
    }
}

#[test]
fn test_pangrams_on_smaller_sets() {
    let index = load_fixture();
    assert_eq!(
        index.pangrams("NOT", false).unwrap(),
        set(&["CONDUCT", "CONDUCTOR", "CONTOUR", "COTTON", "DONUT", "ROTUND", "TORN"])
    );
    assert_eq!(index.pangrams("TORN", true).unwrap(), set(&["TORN"]));
}

#[test]
fn test_duplicate_letters_rejected_for_perfect() {
    let index = load_fixture();
    assert!(index.pangrams("TORNN", false).is_ok());
    assert!(matches!(
        index.pangrams("TORNN", true),
        Err(PuzzleError::InvalidLetterSet { .. })
    ));
}

#[test]
fn test_invalid_letter_sets() {
    let mut index = load_fixture();
    assert!(matches!(
        index.pangrams("", false),
        Err(PuzzleError::InvalidLetterSet { .. })
    ));
    assert!(matches!(
        index.valid_words("dunorct", 'N'),
        Err(PuzzleError::InvalidLetterSet { .. })
    ));
    assert_eq!(index.cache_len(), 0);
}

#[test]
fn test_valid_words() {
    let mut index = load_fixture();
    let words = index.valid_words("DUNORCT", 'N').unwrap();
    assert_eq!(
        *words,
        set(&[
            "CONCUR", "CONDUCT", "CONDUCTOR", "CONTOUR", "CORDON", "COTTON", "DONUT", "ROTUND",
            "TORN", "UNCUT",
        ])
    );

    let allowed = LetterSet::parse("DUNORCT").unwrap();
    for word in words.iter() {
        assert!(word.contains('N'), "{} lacks the prime letter", word);
        assert!(LetterSet::from_word(word).unwrap().is_subset(allowed), "{}", word);
        assert!(word.len() >= MIN_WORD_LENGTH);
    }
}

#[test]
fn test_valid_words_with_other_primes() {
    let mut index = load_fixture();
    assert_eq!(
        *index.valid_words("ABILMOX", 'M').unwrap(),
        set(&["LIMBO", "MAILBOX"])
    );
    assert_eq!(*index.valid_words("ABILMOX", 'X').unwrap(), set(&["MAILBOX"]));
}

#[test]
fn test_prime_outside_letter_set_yields_nothing() {
    let mut index = load_fixture();
    assert!(index.valid_words("DUNORCT", 'S').unwrap().is_empty());
}

#[test]
fn test_invalid_prime_letter() {
    let mut index = load_fixture();
    for prime in ['n', '1', ' '] {
        assert!(matches!(
            index.valid_words("DUNORCT", prime),
            Err(PuzzleError::InvalidLetter { .. })
        ));
    }
}

#[test]
fn test_valid_words_repeatable_through_cache() {
    let mut index = load_fixture();
    let first = index.valid_words("DUNORCT", 'N').unwrap();
    assert_eq!(index.cache_len(), 1);

    let other = index.valid_words("NORTABC", 'N').unwrap();
    assert_eq!(*other, set(&["COTTON", "TORN"]));
    assert_eq!(index.cache_len(), 2);

    let again = index.valid_words("DUNORCT", 'N').unwrap();
    assert_eq!(first, again);
    assert_eq!(index.cache_len(), 2);

    index.clear_cache();
    assert_eq!(index.cache_len(), 0);
    assert_eq!(index.valid_words("DUNORCT", 'N').unwrap(), first);
}

#[test]
fn test_cache_shared_across_letter_order() {
    let mut index = load_fixture();
    let a = index.valid_words("DUNORCT", 'T').unwrap();
    let b = index.valid_words("CDNORTU", 'T').unwrap();
    assert_eq!(a, b);
    assert_eq!(index.cache_len(), 1);
}

#[test]
fn test_definition() {
    let index = load_fixture();
    assert_eq!(index.definition("ROTUND").unwrap(), "rounded, plump");
    assert_eq!(index.definition("TORN").unwrap(), "past participle of TEAR");

    match index.definition("CAT") {
        Err(PuzzleError::NotFound { word }) => assert_eq!(word, "CAT"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_pick_letter_set_is_member() {
    let index = load_fixture();
    let sets: BTreeSet<&str> = index.letter_sets().collect();
    let mut seen = BTreeSet::new();

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let picked = index.pick_letter_set_with(&mut rng).unwrap();
        assert!(sets.contains(picked.as_str()), "{} not a letter set", picked);
        seen.insert(picked);
    }
    assert_eq!(seen.len(), sets.len());

    assert!(sets.contains(index.pick_letter_set().unwrap().as_str()));
}

#[test]
fn test_pick_from_empty_index() {
    let index =
        PuzzleIndex::from_listing("h1\nh2\nTORN ripped\n", &LoaderConfig::default()).unwrap();
    assert!(matches!(index.pick_letter_set(), Err(PuzzleError::EmptyIndex)));
}

#[test]
fn test_load_errors_are_fatal() {
    match PuzzleIndex::from_listing("h1\nh2\nTORN ripped\nBROKEN\n", &LoaderConfig::default()) {
        Err(PuzzleError::Load(LoadError::MissingDefinition { line })) => assert_eq!(line, 4),
        other => panic!("unexpected result: {:?}", other.map(|i| i.word_count())),
    }

    assert!(matches!(
        PuzzleIndex::load("tests/fixtures/no_such_dictionary.txt"),
        Err(PuzzleError::Load(LoadError::Io { .. }))
    ));
}

#[test]
fn test_from_entries_rejects_invalid_words() {
    let entries = vec![
        Entry {
            word: "TORN".to_string(),
            definition: "ripped".to_string(),
        },
        Entry {
            word: "Torn".to_string(),
            definition: "ripped".to_string(),
        },
    ];
    match PuzzleIndex::from_entries(entries) {
        Err(LoadError::InvalidEntry { record, word }) => {
            assert_eq!(record, 2);
            assert_eq!(word, "Torn");
        }
        other => panic!("unexpected result: {:?}", other.map(|i| i.word_count())),
    }
}

#[test]
fn test_survey() {
    let index = load_fixture();
    let summaries = index.survey();
    let letters: Vec<&str> = summaries.iter().map(|s| s.letters.as_str()).collect();
    assert_eq!(letters, vec!["ABILMOX", "CDNORTU", "EGHNRST"]);

    let mailbox = &summaries[0];
    assert_eq!(mailbox.pangrams, 1);
    assert_eq!(mailbox.perfect_pangrams, 1);

    let conductor = &summaries[1];
    assert_eq!(conductor.pangrams, 1);
    assert_eq!(conductor.perfect_pangrams, 0);
    assert_eq!(
        conductor.words_per_prime,
        vec![('C', 8), ('D', 6), ('N', 10), ('O', 10), ('R', 7), ('T', 10), ('U', 9)]
    );
    assert_eq!(conductor.richest_prime(), Some(('N', 10)));
}

#[test]
fn test_survey_matches_cached_queries() {
    let mut index = load_fixture();
    for summary in index.survey() {
        for (prime, count) in summary.words_per_prime {
            assert_eq!(index.valid_words(&summary.letters, prime).unwrap().len(), count);
        }
    }
}
