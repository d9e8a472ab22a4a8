pub mod economy;
pub mod library;
pub mod question;
pub mod session;

pub use economy::{PurchaseError, PurchaseReceipt};
pub use library::{LibraryItem, ShelfEntry, LIBRARY_PRICE};
pub use question::{
    CatalogError, GameMode, MultipleChoiceItem, QuestionBank, QuizItem, TrueFalseItem,
};
pub use session::{
    ExitSummary, Phase, RewardReceipt, RulesError, SessionRules, SessionSnapshot, Transition,
    MAX_PACK_SIZE, QUIZ_COUNT, STARTING_LIVES, WIN_MULTIPLIER,
};
