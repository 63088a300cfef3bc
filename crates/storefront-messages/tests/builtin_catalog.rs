//! Lookup behaviour of the built-in storefront catalog.

use std::sync::Arc;
use std::thread;

use proptest::prelude::*;
use storefront_messages::{Message, MessageCatalog, MessagePath, Missing, get};

#[test]
fn validation_messages() {
    assert_eq!(
        get("validations", "sizeRequired"),
        Ok("Please choose an available size.")
    );
    assert_eq!(
        get("validations", "emailRequired"),
        Ok("Please enter an email address.")
    );
}

#[test]
fn shopping_cart_labels() {
    assert_eq!(
        get("shoppingCart", "continueShopping"),
        Ok("Continue Shopping")
    );
    assert_eq!(get("shoppingCart", "emptyAlert"), Ok("Your cart is empty."));
}

#[test]
fn unknown_key_in_known_section_fails() {
    let err = get("shoppingCart", "doesNotExist").unwrap_err();
    assert_eq!(err.kind, Missing::Key);
    assert_eq!(err.path().to_string(), "shoppingCart.doesNotExist");
}

#[test]
fn unknown_section_fails() {
    let err = get("doesNotExist", "anyKey").unwrap_err();
    assert_eq!(err.kind, Missing::Section);
    assert_eq!(err.section, "doesNotExist");
    assert_eq!(err.key, "anyKey");
}

#[test]
fn every_path_resolves_to_non_empty_text() {
    let catalog = MessageCatalog::builtin();
    let paths = catalog.paths();
    assert_eq!(paths.len(), 4);
    for path in &paths {
        let text = catalog.get_path(path).unwrap();
        assert!(!text.is_empty(), "{path} is empty");
    }
}

#[test]
fn typed_and_string_lookups_agree() {
    for message in Message::ALL {
        let by_path = get(message.section().name(), message.key()).unwrap();
        assert_eq!(by_path, message.text());
        assert_eq!(MessageCatalog::builtin().get_path(&message.path()), Ok(by_path));
    }
}

#[test]
fn consumer_references_detect_renamed_keys() {
    let referenced: Vec<MessagePath> = [
        "validations.sizeRequired",
        "shoppingCart.emptyAlert",
        "shoppingCart.checkout",
        "validations.zipRequired",
    ]
    .iter()
    .map(|s| s.parse().unwrap())
    .collect();

    let missing = MessageCatalog::builtin().missing_paths(&referenced);
    let missing: Vec<String> = missing.iter().map(ToString::to_string).collect();
    assert_eq!(
        missing,
        vec!["shoppingCart.checkout", "validations.zipRequired"]
    );
}

#[test]
fn concurrent_readers_see_identical_values() {
    let expected: Arc<Vec<(MessagePath, &'static str)>> = Arc::new(
        Message::ALL
            .iter()
            .map(|m| (m.path(), m.text()))
            .collect(),
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                for _ in 0..100 {
                    for (path, text) in expected.iter() {
                        assert_eq!(MessageCatalog::builtin().get_path(path), Ok(*text));
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

fn known_path() -> impl Strategy<Value = MessagePath> {
    proptest::sample::select(Message::ALL.to_vec()).prop_map(Message::path)
}

proptest! {
    #[test]
    fn lookup_is_idempotent(path in known_path()) {
        let first = MessageCatalog::builtin().get_path(&path);
        let second = MessageCatalog::builtin().get_path(&path);
        prop_assert!(first.is_ok());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unknown_keys_always_fail(section in "[a-zA-Z]{1,12}", key in "[a-zA-Z]{1,16}") {
        let catalog = MessageCatalog::builtin();
        let result = catalog.get(&section, &key);
        if catalog.contains(&section, &key) {
            prop_assert!(result.is_ok());
        } else {
            let err = result.unwrap_err();
            prop_assert_eq!(err.section, section);
            prop_assert_eq!(err.key, key);
        }
    }
}
