#![allow(missing_docs)]

use std::{collections::BTreeSet, thread};

use bip39_words::{
    ENGLISH, MAX_WORD_LENGTH, MIN_WORD_LENGTH, WORD_COUNT, lookup,
};

const WORD_LIST: &str = include_str!("../data/english.txt");

fn words() -> impl Iterator<Item = (u16, &'static str)> {
    (0u16..).zip(WORD_LIST.lines())
}

#[test]
fn every_word_is_found_at_its_index() {
    assert_eq!(words().count(), WORD_COUNT);
    words().for_each(|(index, word)| {
        let entry = lookup(word)
            .unwrap_or_else(|| panic!("{word} should be in the word list"));
        assert_eq!(entry.word(), word);
        assert_eq!(entry.index(), index);
    });
}

#[test]
fn indices_cover_every_slot_exactly_once() {
    let indices = words()
        .filter_map(|(_, word)| ENGLISH.index_of(word))
        .collect::<Vec<_>>();
    let unique = indices.iter().copied().collect::<BTreeSet<_>>();
    assert_eq!(indices.len(), WORD_COUNT);
    assert_eq!(unique.len(), WORD_COUNT);
    assert!(unique.iter().copied().eq(0..WORD_COUNT as u16));
}

#[test]
fn scenarios() {
    let found = |word: &str| lookup(word).map(|entry| entry.index());
    assert_eq!(found("abandon"), Some(0));
    assert_eq!(found("zoo"), Some(2047));
    assert_eq!(found("satoshi"), Some(1531));
    assert_eq!(found("bitcoin"), None);
    assert_eq!(found("ab"), None);
    assert_eq!(found("abandonabandon"), None);
}

#[test]
fn unknown_strings_are_not_found() {
    assert_eq!(lookup("abandonx"), None);
    assert_eq!(lookup("zz"), None);
    assert_eq!(lookup(""), None);
    assert_eq!(lookup("aban"), None);
    assert_eq!(lookup(" zoo"), None);
    assert_eq!(lookup("zoo\0"), None);

    let blob = (0..100u8).map(|byte| byte.wrapping_mul(37)).collect::<Vec<_>>();
    assert_eq!(lookup(&blob), None);
    assert_eq!(lookup([0xffu8, 0xfe, 0xfd, 0xfc]), None);
}

#[test]
fn length_bounds_are_enforced() {
    assert_eq!(MIN_WORD_LENGTH, 3);
    assert_eq!(MAX_WORD_LENGTH, 8);
    words().for_each(|(_, word)| {
        // Prefixes of length 2 and extensions to length 9
        assert_eq!(lookup(&word[..2]), None);
        let extended = format!("{word:a<9}");
        assert_eq!(extended.len(), 9);
        assert_eq!(lookup(&extended), None);
    });
}

#[test]
fn every_three_byte_string_is_handled() {
    let three_letter_words = words()
        .filter(|(_, word)| word.len() == 3)
        .map(|(_, word)| word.as_bytes())
        .collect::<BTreeSet<_>>();
    let mut found = 0;
    for first in u8::MIN..=u8::MAX {
        for second in u8::MIN..=u8::MAX {
            for third in u8::MIN..=u8::MAX {
                let input = [first, second, third];
                if let Some(entry) = lookup(input) {
                    assert_eq!(entry.word().as_bytes(), input);
                    assert!(three_letter_words.contains(&input[..]));
                    found += 1;
                }
            }
        }
    }
    assert_eq!(found, three_letter_words.len());
}

#[test]
fn matching_is_case_sensitive() {
    assert_eq!(lookup("Abandon"), None);
    assert_eq!(lookup("ZOO"), None);
    assert_eq!(lookup("sAtoshi"), None);
}

#[test]
fn lookups_are_idempotent() {
    let first = lookup("satoshi");
    (0..10).for_each(|_| assert_eq!(lookup("satoshi"), first));
    (0..10).for_each(|_| assert_eq!(lookup("bitcoin"), None));
}

#[test]
fn reverse_lookup_agrees_with_lookup() {
    words().for_each(|(index, word)| {
        assert_eq!(ENGLISH.word(index), Some(word));
    });
    assert_eq!(ENGLISH.word(WORD_COUNT as u16), None);
}

#[test]
fn concurrent_lookups_agree() {
    thread::scope(|s| {
        let handles = (0..4)
            .map(|offset| {
                s.spawn(move || {
                    words()
                        .skip(offset)
                        .step_by(4)
                        .all(|(index, word)| {
                            ENGLISH.index_of(word) == Some(index)
                        })
                })
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .for_each(|handle| assert!(handle.join().unwrap()));
    });
}

#[test]
fn byte_and_string_inputs_agree() {
    assert_eq!(lookup(b"zoo"), lookup("zoo"));
    assert_eq!(lookup(String::from("zoo")), lookup("zoo"));
    assert_eq!(lookup(b"zoo".to_vec()), lookup("zoo"));
}
