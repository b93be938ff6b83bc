// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the Moku Trie public API.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::thread;

use moku_trie_lib::data_structures::MokuTrie;

fn set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_shared_prefix_lifecycle() {
    let mut trie: MokuTrie = MokuTrie::new();
    trie.insert("cat");
    trie.insert("car");
    trie.insert("dog");

    assert_eq!(trie.word_count(), 3);
    assert!(trie.contains_prefix("ca"));
    assert!(!trie.contains("ca"));
    assert_eq!(trie.words().into_iter().collect::<HashSet<_>>(), set(&["cat", "car", "dog"]));

    trie.remove("cat");
    assert!(!trie.contains("cat"));
    assert!(trie.contains("car"));
    assert_eq!(trie.word_count(), 2);

    trie.remove("car");
    trie.remove("dog");
    assert_eq!(trie.word_count(), 0);
    assert!(trie.is_empty());
    assert_eq!(trie.render(), "");
}

#[test]
fn test_empty_inputs_are_noops() {
    let mut trie: MokuTrie = MokuTrie::new();
    trie.insert("");
    assert_eq!(trie.word_count(), 0);
    assert!(!trie.contains(""));

    trie.remove("xyz");
    assert!(trie.is_empty());
}

#[test]
fn test_nested_words() {
    let mut trie: MokuTrie = ["a", "ab", "abc"].into_iter().collect();
    trie.remove("ab");

    assert!(trie.contains("a"));
    assert!(!trie.contains("ab"));
    assert!(trie.contains("abc"));
}

#[test]
fn test_unicode_symbols_are_chars() {
    let mut trie: MokuTrie = MokuTrie::new();
    trie.insert("naïve");
    trie.insert("naïf");

    assert!(trie.contains_prefix("naï"));
    assert_eq!(trie.words_starting_with("naï").len(), 2);
    assert_eq!(trie.render_by_level().lines().count(), 5);
}

#[test]
fn test_byte_symbols() {
    let mut trie: MokuTrie<u8> = MokuTrie::new();
    trie.insert(&b"GET"[..]);
    trie.insert(&b"GEM"[..]);

    assert!(trie.contains(&b"GET"[..]));
    assert!(trie.contains_prefix(&b"GE"[..]));
    assert_eq!(trie.word_count(), 2);
}

#[test]
fn test_shared_behind_single_lock() {
    let trie = Arc::new(Mutex::new(MokuTrie::<char>::new()));
    let handles: Vec<_> = (0..4)
        .map(|id| {
            let trie = Arc::clone(&trie);
            thread::spawn(move || {
                for j in 0..25 {
                    trie.lock().unwrap().insert(format!("key{id}x{j}").as_str());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let trie = trie.lock().unwrap();
    assert_eq!(trie.word_count(), 100);
    assert!(trie.contains("key3x24"));
}
