//! Built-in question banks and the library catalog.

use lazy_static::lazy_static;
use std::sync::Arc;

use crate::models::library::{LibraryItem, LIBRARY_PRICE};
use crate::models::question::{MultipleChoiceItem, QuestionBank, TrueFalseItem};

mod classic;
mod novels;
mod true_false;

pub use classic::build_classic_bank;
pub use true_false::build_true_false_bank;

lazy_static! {
    static ref CLASSIC_BANK: Arc<QuestionBank<MultipleChoiceItem>> =
        Arc::new(build_classic_bank().expect("built-in classic bank is valid"));

    static ref TRUE_FALSE_BANK: Arc<QuestionBank<TrueFalseItem>> =
        Arc::new(build_true_false_bank().expect("built-in true/false bank is valid"));

    static ref LIBRARY: Vec<LibraryItem> = novels::NOVELS
        .iter()
        .map(|(id, title, text)| LibraryItem {
            id: *id,
            title: title.to_string(),
            text: text.to_string(),
            price: LIBRARY_PRICE,
        })
        .collect();
}

pub fn classic_bank() -> Arc<QuestionBank<MultipleChoiceItem>> {
    CLASSIC_BANK.clone()
}

pub fn true_false_bank() -> Arc<QuestionBank<TrueFalseItem>> {
    TRUE_FALSE_BANK.clone()
}

pub fn library() -> &'static [LibraryItem] {
    &LIBRARY
}

pub fn find_library_item(id: u32) -> Option<&'static LibraryItem> {
    LIBRARY.iter().find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::QuizItem;
    use std::collections::HashSet;

    #[test]
    fn built_in_banks_are_valid() {
        assert_eq!(classic_bank().len(), 20);
        assert_eq!(true_false_bank().len(), 40);
    }

    #[test]
    fn classic_answers_point_at_known_options() {
        let bank = classic_bank();
        let gatsby = bank.get(2).unwrap();
        assert_eq!(gatsby.options()[gatsby.correct_index()], "The Great Gatsby");
        assert!(gatsby.is_correct(&1));
    }

    #[test]
    fn true_false_notes_are_preserved() {
        let bank = true_false_bank();
        assert_eq!(bank.get(2).unwrap().note(), Some("Nick Carraway is the narrator."));
        assert_eq!(bank.get(1).unwrap().note(), None);
    }

    #[test]
    fn library_has_unique_ids_and_flat_price() {
        let ids: HashSet<u32> = library().iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), 10);
        assert!(library().iter().all(|item| item.price == LIBRARY_PRICE));
        assert_eq!(find_library_item(3).unwrap().title, "The Captain’s Last Song");
        assert!(find_library_item(11).is_none());
    }
}
