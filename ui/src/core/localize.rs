//! Bilingual text: compile-time copy pairs and the `data-en` / `data-es`
//! relocalization pass for markup that lives outside the component tree.
//!
//! The pass is written against [`LocalizableElement`] so the rules can be
//! exercised natively; `core::dom` implements it for `web_sys::Element`.

use crate::core::lang::Language;

/// A piece of page copy in both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub en: &'static str,
    pub es: &'static str,
}

impl LocalizedText {
    pub const fn new(en: &'static str, es: &'static str) -> Self {
        Self { en, es }
    }

    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en,
            Language::Es => self.es,
        }
    }
}

/// Minimal view of an element carrying `data-{lang}` attributes.
pub trait LocalizableElement {
    fn attribute(&self, name: &str) -> Option<String>;
    /// `input` / `textarea`: localized text goes to the placeholder.
    fn is_text_input(&self) -> bool;
    fn set_placeholder(&mut self, text: &str);
    /// Contents of the direct child text nodes, in document order.
    fn direct_text_nodes(&self) -> Vec<String>;
    fn set_direct_text_node(&mut self, index: usize, text: &str);
    fn has_icon(&self) -> bool;
    fn insert_after_icon(&mut self, text: &str);
    fn set_text_content(&mut self, text: &str);
}

/// What a localization pass did to one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Skipped,
    Placeholder,
    TextNode(usize),
    AfterIcon,
    Replaced,
}

pub fn localize_element<E: LocalizableElement + ?Sized>(el: &mut E, lang: Language) -> Applied {
    let Some(text) = el
        .attribute(lang.data_attribute())
        .filter(|value| !value.is_empty())
    else {
        return Applied::Skipped;
    };

    if el.is_text_input() {
        el.set_placeholder(&text);
        return Applied::Placeholder;
    }

    // Leading space keeps the text apart from an icon sibling.
    let spaced = format!(" {text}");
    let first_non_empty = el
        .direct_text_nodes()
        .iter()
        .position(|node| !node.trim().is_empty());

    match first_non_empty {
        Some(index) => {
            el.set_direct_text_node(index, &spaced);
            Applied::TextNode(index)
        }
        None if el.has_icon() => {
            el.insert_after_icon(&spaced);
            Applied::AfterIcon
        }
        None => {
            el.set_text_content(&text);
            Applied::Replaced
        }
    }
}

/// Relocalize every element; returns how many were touched.
pub fn localize_all<'a, E, I>(elements: I, lang: Language) -> usize
where
    E: LocalizableElement + 'a,
    I: IntoIterator<Item = &'a mut E>,
{
    elements
        .into_iter()
        .map(|el| localize_element(el, lang))
        .filter(|applied| *applied != Applied::Skipped)
        .count()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Child {
        Text(String),
        Icon,
        Markup(&'static str),
    }

    #[derive(Debug, Clone, Default)]
    pub struct FakeElement {
        pub attrs: HashMap<String, String>,
        pub input: bool,
        pub placeholder: Option<String>,
        pub children: Vec<Child>,
    }

    impl FakeElement {
        pub fn new(en: &str, es: &str) -> Self {
            let mut attrs = HashMap::new();
            attrs.insert("data-en".to_string(), en.to_string());
            attrs.insert("data-es".to_string(), es.to_string());
            Self {
                attrs,
                ..Default::default()
            }
        }

        pub fn with_children(mut self, children: Vec<Child>) -> Self {
            self.children = children;
            self
        }

        pub fn rendered(&self) -> String {
            self.children
                .iter()
                .map(|c| match c {
                    Child::Text(t) => t.clone(),
                    Child::Icon => "<i/>".to_string(),
                    Child::Markup(m) => m.to_string(),
                })
                .collect()
        }
    }

    impl LocalizableElement for FakeElement {
        fn attribute(&self, name: &str) -> Option<String> {
            self.attrs.get(name).cloned()
        }

        fn is_text_input(&self) -> bool {
            self.input
        }

        fn set_placeholder(&mut self, text: &str) {
            self.placeholder = Some(text.to_string());
        }

        fn direct_text_nodes(&self) -> Vec<String> {
            self.children
                .iter()
                .filter_map(|c| match c {
                    Child::Text(t) => Some(t.clone()),
                    _ => None,
                })
                .collect()
        }

        fn set_direct_text_node(&mut self, index: usize, text: &str) {
            if let Some(Child::Text(t)) = self
                .children
                .iter_mut()
                .filter(|c| matches!(c, Child::Text(_)))
                .nth(index)
            {
                *t = text.to_string();
            }
        }

        fn has_icon(&self) -> bool {
            self.children.iter().any(|c| *c == Child::Icon)
        }

        fn insert_after_icon(&mut self, text: &str) {
            if let Some(pos) = self.children.iter().position(|c| *c == Child::Icon) {
                self.children.insert(pos + 1, Child::Text(text.to_string()));
            }
        }

        fn set_text_content(&mut self, text: &str) {
            self.children = vec![Child::Text(text.to_string())];
        }
    }

    #[test]
    fn localized_text_picks_language() {
        let copy = LocalizedText::new("Services", "Servicios");
        assert_eq!(copy.get(Language::En), "Services");
        assert_eq!(copy.get(Language::Es), "Servicios");
    }

    #[test]
    fn inputs_receive_placeholder() {
        let mut el = FakeElement::new("Your name", "Tu nombre");
        el.input = true;
        assert_eq!(localize_element(&mut el, Language::Es), Applied::Placeholder);
        assert_eq!(el.placeholder.as_deref(), Some("Tu nombre"));
        assert!(el.children.is_empty());
    }

    #[test]
    fn first_non_empty_text_node_is_replaced_and_icon_kept() {
        let mut el = FakeElement::new("Contact", "Contacto").with_children(vec![
            Child::Text("\n   ".into()),
            Child::Icon,
            Child::Text(" Contact".into()),
            Child::Text(" trailing".into()),
        ]);
        assert_eq!(localize_element(&mut el, Language::Es), Applied::TextNode(1));
        assert_eq!(el.rendered(), "\n   <i/> Contacto trailing");
    }

    #[test]
    fn icon_only_element_gets_text_after_icon() {
        let mut el = FakeElement::new("Call", "Llamar").with_children(vec![Child::Icon]);
        assert_eq!(localize_element(&mut el, Language::Es), Applied::AfterIcon);
        assert_eq!(el.rendered(), "<i/> Llamar");
    }

    #[test]
    fn element_without_text_nodes_is_replaced_wholesale() {
        let mut el =
            FakeElement::new("Plans", "Planes").with_children(vec![Child::Markup("<span></span>")]);
        assert_eq!(localize_element(&mut el, Language::Es), Applied::Replaced);
        assert_eq!(el.rendered(), "Planes");
    }

    #[test]
    fn missing_or_empty_attribute_leaves_element_untouched() {
        let mut el = FakeElement::new("Only English", "")
            .with_children(vec![Child::Text("Only English".into())]);
        assert_eq!(localize_element(&mut el, Language::Es), Applied::Skipped);
        assert_eq!(el.rendered(), "Only English");
    }

    #[test]
    fn switching_language_updates_every_element() {
        let mut elements = vec![
            FakeElement::new("Home", "Inicio").with_children(vec![Child::Text("Home".into())]),
            FakeElement::new("About", "Nosotros").with_children(vec![Child::Text("About".into())]),
        ];
        for lang in Language::ALL {
            assert_eq!(localize_all(elements.iter_mut(), lang), 2);
            for el in &elements {
                let expected = el.attrs[lang.data_attribute()].clone();
                assert_eq!(el.rendered().trim(), expected);
            }
        }
    }
}
