//! Language toggle end to end: persisted choice, active fluent bundle and
//! the site language signal all move together.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use i18n_embed::LanguageLoader;

use ui::components::language::switch_language;
use ui::core::lang::Language;
use ui::core::storage::{KeyValueStore, LanguageStore, MemoryStore, LANGUAGE_KEY};
use ui::i18n::{self, LOADER};

/// What a visitor would observe right after one toggle.
#[derive(Debug, PartialEq)]
struct Snapshot {
    signal: Language,
    stored: Option<String>,
    bundle: String,
    thank_you: String,
}

#[derive(Clone, Default)]
struct Harness {
    memory: Rc<MemoryStore>,
    snapshots: Rc<RefCell<Vec<Snapshot>>>,
}

fn toggle_twice(harness: Harness) -> Element {
    let lang = use_signal(|| Language::En);
    use_hook(|| {
        let store = LanguageStore::new(&*harness.memory, LANGUAGE_KEY);
        for _ in 0..2 {
            let next = lang.peek().toggled();
            switch_language(lang, next, &store);
            harness.snapshots.borrow_mut().push(Snapshot {
                signal: *lang.peek(),
                stored: harness.memory.get(LANGUAGE_KEY),
                bundle: LOADER.current_language().to_string(),
                thank_you: LOADER.get("form-thank-you"),
            });
        }
    });
    rsx! { "{lang}" }
}

#[test]
fn toggle_persists_switches_bundle_and_updates_signal() {
    i18n::init();
    let harness = Harness::default();
    let mut dom = VirtualDom::new_with_props(toggle_twice, harness.clone());
    dom.rebuild_in_place();

    let snapshots = harness.snapshots.borrow();
    assert_eq!(
        *snapshots,
        vec![
            Snapshot {
                signal: Language::Es,
                stored: Some("es".to_string()),
                bundle: "es-ES".to_string(),
                thank_you: "¡Gracias! Tu mensaje ha sido enviado.".to_string(),
            },
            Snapshot {
                signal: Language::En,
                stored: Some("en".to_string()),
                bundle: "en-US".to_string(),
                thank_you: "Thank you! Your message has been sent.".to_string(),
            },
        ]
    );

    // A reload reads the last choice back, whatever the browser locale says.
    let store = LanguageStore::new(&*harness.memory, LANGUAGE_KEY);
    assert_eq!(store.language(Some("es-ES")), Language::Es.toggled());
}
