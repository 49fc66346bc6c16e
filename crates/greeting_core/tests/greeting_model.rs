use greeting_core::Greeting;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

fn hash_of(greeting: &Greeting) -> u64 {
    let mut hasher = DefaultHasher::new();
    greeting.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn new_keeps_given_fields() {
    let greeting = Greeting::new(1, "Hello, World!");

    assert_eq!(greeting.id(), 1);
    assert_eq!(greeting.content(), "Hello, World!");
    assert_eq!(greeting.to_string(), "Greetings{id=1, content='Hello, World!'}");
}

#[test]
fn empty_content_and_zero_id_are_accepted() {
    let greeting = Greeting::new(0, "");

    assert_eq!(greeting.content(), "");
    assert_eq!(greeting.to_string(), "Greetings{id=0, content=''}");
}

#[test]
fn embedded_quote_is_not_escaped() {
    let greeting = Greeting::new(-5, "a'b");
    assert_eq!(greeting.to_string(), "Greetings{id=-5, content='a'b'}");
}

#[test]
fn display_matches_literal_format_for_extreme_ids() {
    for (id, content) in [(i64::MIN, "min"), (i64::MAX, "max"), (42, "ünïcödé ✓")] {
        let greeting = Greeting::new(id, content);
        assert_eq!(
            greeting.to_string(),
            format!("Greetings{{id={id}, content='{content}'}}")
        );
    }
}

#[test]
fn accessors_are_stable_across_calls() {
    let greeting = Greeting::new(9, "same");

    assert_eq!(greeting.id(), greeting.id());
    assert_eq!(greeting.content(), greeting.content());
    assert_eq!(greeting.to_string(), greeting.to_string());
}

#[test]
fn equal_pairs_are_interchangeable() {
    let left = Greeting::new(2, "hi");
    let right = Greeting::new(2, String::from("hi"));

    assert_eq!(left, right);
    assert_eq!(hash_of(&left), hash_of(&right));
    assert_eq!(left.to_string(), right.to_string());
    assert_ne!(left, Greeting::new(3, "hi"));
    assert_ne!(left, Greeting::new(2, "Hi"));

    let set: HashSet<Greeting> = [left.clone(), right, left].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn greeting_is_shareable_across_threads() {
    let greeting = std::sync::Arc::new(Greeting::new(11, "shared"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let greeting = std::sync::Arc::clone(&greeting);
            std::thread::spawn(move || greeting.to_string())
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().expect("reader thread should not panic"),
            "Greetings{id=11, content='shared'}"
        );
    }
}

#[test]
fn into_parts_returns_owned_fields() {
    let (id, content) = Greeting::new(4, "owned").into_parts();
    assert_eq!(id, 4);
    assert_eq!(content, "owned");
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let greeting = Greeting::new(i64::MAX, "Hello, World!");

    let json = serde_json::to_value(&greeting).unwrap();
    assert_eq!(json, serde_json::json!({ "id": i64::MAX, "content": "Hello, World!" }));

    let decoded: Greeting = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, greeting);
}

#[test]
fn deserialization_accepts_negative_id_and_empty_content() {
    let decoded: Greeting = serde_json::from_str(r#"{"id":-1,"content":""}"#).unwrap();

    assert_eq!(decoded.id(), -1);
    assert_eq!(decoded.content(), "");
}

#[test]
fn min_id_and_punctuated_content_survive_json() {
    let greeting = Greeting::new(i64::MIN, "{'}\"");

    let json = serde_json::to_string(&greeting).unwrap();
    assert_eq!(json, r#"{"id":-9223372036854775808,"content":"{'}\""}"#);

    let decoded: Greeting = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, greeting);
    assert_eq!(decoded.id(), i64::MIN);
    assert_eq!(decoded.content(), "{'}\"");
    assert_eq!(
        decoded.to_string(),
        "Greetings{id=-9223372036854775808, content='{'}\"'}"
    );
}
