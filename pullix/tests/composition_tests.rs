// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Longer pipelines mixing operator families.

use pullix::prelude::*;
use pullix_test_utils::{fruits, tracked};

#[test]
fn test_group_names_by_color() {
    // Arrange
    let source = from_vec(fruits());

    // Act
    let groups = source.group_by_map(|f| f.color, |f| f.name).to_vec().unwrap();
    let mut summary = Vec::new();
    for group in &groups {
        let names = group.values().to_vec().unwrap().join(", ");
        summary.push(format!("{}: {}", group.key(), names));
    }

    // Assert
    assert_eq!(
        summary,
        vec!["red: apple, cherry", "purple: plum, grape", "green: lime"]
    );
}

#[test]
fn test_top_three_longest_names() {
    let names = from_vec(fruits())
        .map(|f| f.name)
        .sorted_by_key(|name| name.len(), Direction::Descending)
        .take(3)
        .to_vec()
        .unwrap();

    assert_eq!(names, vec!["cherry", "apple", "grape"]);
}

#[test]
fn test_running_totals_of_filtered_range() {
    let totals = range(1, 6)
        .filter(|v| v % 2 == 1)
        .scan(0i64, |acc, v| acc + v)
        .to_vec()
        .unwrap();

    assert_eq!(totals, vec![1, 4, 9]);
}

#[test]
fn test_flat_map_then_distinct() {
    let out = from_vec(vec![1i32, 2, 3])
        .flat_map(|v| from_vec(vec![v, v * 2]))
        .distinct()
        .to_vec()
        .unwrap();

    assert_eq!(out, vec![1, 2, 4, 3, 6]);
}

#[test]
fn test_replay_feeds_two_different_chains() {
    // Arrange: an upstream that must only be traversed once
    let (source, stats) = tracked(&range(1, 6));
    let shared = source.replay();

    // Act
    let sum = shared.fold(0i64, |acc, v| acc + v).unwrap();
    let peak = shared.max().unwrap();

    // Assert
    assert_eq!(sum, 21);
    assert_eq!(peak, 6);
    assert_eq!(stats.cursors(), 1);
    assert_eq!(stats.next_calls(), 6);
}

#[test]
fn test_zip_ranks_sorted_names() {
    let ranked = from_vec(fruits())
        .map(|f| f.name)
        .sorted()
        .zip_with(&range(1, 5), |name, rank| format!("{rank}. {name}"))
        .to_vec()
        .unwrap();

    assert_eq!(
        ranked,
        vec!["1. apple", "2. cherry", "3. grape", "4. lime", "5. plum"]
    );
}

#[test]
fn test_buffer_split_words_from_characters() {
    let words = characters("hi there")
        .buffer_split(|code| *code == u32::from(' '))
        .map(|codes| {
            codes
                .into_iter()
                .filter_map(char::from_u32)
                .collect::<String>()
        })
        .to_vec()
        .unwrap();

    assert_eq!(words, vec!["hi", "there"]);
}

#[test]
fn test_unfold_powers_until_limit() {
    let powers = unfold(1i64, |v| *v < 100, |v| v * 2).to_vec().unwrap();

    assert_eq!(powers, vec![1, 2, 4, 8, 16, 32, 64]);
}

#[test]
fn test_concat_array_then_aggregate() {
    let total = concat_array(vec![range(1, 3), Seq::empty(), range(10, 2)])
        .sum_long()
        .unwrap();

    assert_eq!(total, 27);
}

#[test]
fn test_wrapped_iterable_collects_into_string() {
    let joined = from_iter(|| ["lazy", "pull", "chains"])
        .collect(String::new, |acc: &mut String, word| {
            if !acc.is_empty() {
                acc.push('-');
            }
            acc.push_str(word);
        })
        .unwrap();

    assert_eq!(joined, "lazy-pull-chains");
}

#[test]
fn test_to_vec_seq_keeps_materialized_list_in_the_chain() {
    // The collected Vec stays a sequence element, so operators keep applying.
    let sizes = range(1, 7)
        .filter(|v| v % 2 == 0)
        .to_vec_seq()
        .map(|evens| evens.len())
        .to_vec()
        .unwrap();

    assert_eq!(sizes, vec![3]);
}

#[test]
fn test_window_averages() {
    let averages = range(1, 9)
        .window(3)
        .map(|window| {
            let values = window.values();
            values.sum_long().unwrap() / 3
        })
        .to_vec()
        .unwrap();

    assert_eq!(averages, vec![2, 5, 8]);
}
