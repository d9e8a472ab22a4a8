use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Debug;

/// Number of options every multiple-choice item carries.
pub const OPTION_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Classic,
    TrueFalse,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
            GameMode::TrueFalse => "true_false",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("item id must be positive")]
    InvalidId,
    #[error("duplicate item id {0} in bank")]
    DuplicateId(u32),
    #[error("correct index {0} is out of range")]
    CorrectIndexOutOfRange(usize),
    #[error("options of item {0} are not distinct")]
    DuplicateOption(u32),
}

/// A single question that can be sampled into a pack and answered.
pub trait QuizItem: Clone + Debug + Send + Sync + 'static {
    /// What the player picks while the item is active.
    type Choice: Copy + PartialEq + Debug + Serialize + Send + Sync + 'static;

    const MODE: GameMode;

    fn id(&self) -> u32;

    /// Whether `choice` is a legal pick for this item at all.
    fn accepts(&self, choice: &Self::Choice) -> bool;

    fn is_correct(&self, choice: &Self::Choice) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipleChoiceItem {
    id: u32,
    prompt: String,
    options: [String; OPTION_COUNT],
    correct_index: usize,
}

impl MultipleChoiceItem {
    pub fn new(
        id: u32,
        prompt: impl Into<String>,
        options: [&str; OPTION_COUNT],
        correct_index: usize,
    ) -> Result<Self, CatalogError> {
        if id == 0 {
            return Err(CatalogError::InvalidId);
        }
        if correct_index >= OPTION_COUNT {
            return Err(CatalogError::CorrectIndexOutOfRange(correct_index));
        }
        let distinct: HashSet<&str> = options.iter().copied().collect();
        if distinct.len() != OPTION_COUNT {
            return Err(CatalogError::DuplicateOption(id));
        }

        Ok(Self {
            id,
            prompt: prompt.into(),
            options: options.map(str::to_string),
            correct_index,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }
}

impl QuizItem for MultipleChoiceItem {
    type Choice = usize;

    const MODE: GameMode = GameMode::Classic;

    fn id(&self) -> u32 {
        self.id
    }

    fn accepts(&self, choice: &usize) -> bool {
        *choice < OPTION_COUNT
    }

    fn is_correct(&self, choice: &usize) -> bool {
        *choice == self.correct_index
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrueFalseItem {
    id: u32,
    statement: String,
    answer: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

impl TrueFalseItem {
    pub fn new(id: u32, statement: impl Into<String>, answer: bool) -> Result<Self, CatalogError> {
        if id == 0 {
            return Err(CatalogError::InvalidId);
        }
        Ok(Self {
            id,
            statement: statement.into(),
            answer,
            note: None,
        })
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn statement(&self) -> &str {
        &self.statement
    }

    pub fn answer(&self) -> bool {
        self.answer
    }

    /// Flavor text shown after answering; never consulted by scoring.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

impl QuizItem for TrueFalseItem {
    type Choice = bool;

    const MODE: GameMode = GameMode::TrueFalse;

    fn id(&self) -> u32 {
        self.id
    }

    fn accepts(&self, _choice: &bool) -> bool {
        true
    }

    fn is_correct(&self, choice: &bool) -> bool {
        *choice == self.answer
    }
}

/// Immutable catalog of items for one mode. Ids are unique within a bank.
#[derive(Debug, Clone)]
pub struct QuestionBank<I: QuizItem> {
    items: Vec<I>,
}

impl<I: QuizItem> QuestionBank<I> {
    pub fn new(items: Vec<I>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id() == 0 {
                return Err(CatalogError::InvalidId);
            }
            if !seen.insert(item.id()) {
                return Err(CatalogError::DuplicateId(item.id()));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[I] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&I> {
        self.items.iter().find(|item| item.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiple_choice_rejects_bad_correct_index() {
        let err = MultipleChoiceItem::new(1, "Q?", ["a", "b", "c"], 3).unwrap_err();
        assert_eq!(err, CatalogError::CorrectIndexOutOfRange(3));
    }

    #[test]
    fn multiple_choice_rejects_repeated_options() {
        let err = MultipleChoiceItem::new(7, "Q?", ["a", "a", "c"], 0).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateOption(7));
    }

    #[test]
    fn multiple_choice_checks_choices() {
        let item = MultipleChoiceItem::new(1, "Q?", ["a", "b", "c"], 2).unwrap();
        assert!(item.accepts(&0));
        assert!(!item.accepts(&3));
        assert!(item.is_correct(&2));
        assert!(!item.is_correct(&1));
    }

    #[test]
    fn true_false_note_is_optional() {
        let item = TrueFalseItem::new(2, "Sky is green.", false)
            .unwrap()
            .with_note("It is blue.");
        assert_eq!(item.note(), Some("It is blue."));
        assert!(item.is_correct(&false));
        assert!(!item.is_correct(&true));
    }

    #[test]
    fn bank_rejects_duplicate_ids() {
        let items = vec![
            TrueFalseItem::new(1, "a", true).unwrap(),
            TrueFalseItem::new(1, "b", false).unwrap(),
        ];
        assert_eq!(
            QuestionBank::new(items).unwrap_err(),
            CatalogError::DuplicateId(1)
        );
    }

    #[test]
    fn bank_rejects_zero_id() {
        assert_eq!(
            TrueFalseItem::new(0, "a", true).unwrap_err(),
            CatalogError::InvalidId
        );
    }

    #[test]
    fn empty_bank_is_constructible() {
        let bank: QuestionBank<TrueFalseItem> = QuestionBank::new(vec![]).unwrap();
        assert!(bank.is_empty());
    }
}
