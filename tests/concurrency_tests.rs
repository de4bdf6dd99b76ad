//! Concurrency and thread safety tests for replacement chains

use std::sync::Arc;
use std::thread;

use rechain::{ReplacementChain, TextConverter, shared_whitespace_normalizer, whitespace_normalizer};

#[test]
fn concurrent_normalize_same_chain() {
    let chain = Arc::new(whitespace_normalizer());

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let chain = Arc::clone(&chain);
            thread::spawn(move || {
                let input = format!("  thread \t {i}\n\nresult  ");
                chain.normalize(Some(&input)).expect("present input")
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        assert_eq!(result, format!("thread {i} result"), "thread {i} diverged");
    }
}

#[test]
fn concurrent_shared_preset_is_built_once() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| shared_whitespace_normalizer() as *const ReplacementChain as usize))
        .collect();

    let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn scoped_threads_share_borrowed_chain() {
    let chain =
        ReplacementChain::from_pairs([(r"(\w+)@(\w+)\.com", "$1 at $2")]).expect("valid chain");
    let inputs: Vec<String> = (0..16).map(|i| format!("user{i}@host.com")).collect();

    let outputs: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| {
                let chain = &chain;
                scope.spawn(move || chain.convert(Some(input)).expect("present input"))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, out) in outputs.iter().enumerate() {
        assert_eq!(out, &format!("user{i} at host"));
    }
}
