use crate::models::question::{CatalogError, MultipleChoiceItem, QuestionBank};

/// Literature questions for the classic three-option mode.
const CLASSIC_QUESTIONS: &[(u32, &str, [&str; 3], usize)] = &[
    (1, "Who wrote “Pride and Prejudice”?", ["Charlotte Brontë", "Jane Austen", "Mary Shelley"], 1),
    (2, "In which novel does the character Jay Gatsby appear?", ["The Sun Also Rises", "The Great Gatsby", "Of Mice and Men"], 1),
    (3, "Who is the author of “Crime and Punishment”?", ["Leo Tolstoy", "Fyodor Dostoevsky", "Anton Chekhov"], 1),
    (4, "“1984” was written by which author?", ["Aldous Huxley", "Ray Bradbury", "George Orwell"], 2),
    (5, "Which novel begins with the line “Call me Ishmael”?", ["Robinson Crusoe", "Moby-Dick", "Treasure Island"], 1),
    (6, "Who wrote “The Picture of Dorian Gray”?", ["Charles Dickens", "Oscar Wilde", "Thomas Hardy"], 1),
    (7, "In “Romeo and Juliet”, the two families are the Montagues and the…", ["Medicis", "Capulets", "Borgias"], 1),
    (8, "Which author created the detective Sherlock Holmes?", ["Agatha Christie", "Arthur Conan Doyle", "Edgar Allan Poe"], 1),
    (9, "“Brave New World” explores a dystopian future written by…", ["George Orwell", "Aldous Huxley", "H.G. Wells"], 1),
    (10, "Who wrote “Anna Karenina”?", ["Leo Tolstoy", "Ivan Turgenev", "Nikolai Gogol"], 0),
    (11, "Which novel features the character Atticus Finch?", ["The Catcher in the Rye", "To Kill a Mockingbird", "East of Eden"], 1),
    (12, "“The Old Man and the Sea” was written by…", ["John Steinbeck", "Ernest Hemingway", "William Faulkner"], 1),
    (13, "In which novel does Winston Smith appear?", ["Fahrenheit 451", "Brave New World", "1984"], 2),
    (14, "Who is the author of “Jane Eyre”?", ["Emily Brontë", "Charlotte Brontë", "Anne Brontë"], 1),
    (15, "“The Catcher in the Rye” was written by…", ["J.D. Salinger", "Jack Kerouac", "Kurt Vonnegut"], 0),
    (16, "Which novel tells the story of Victor Frankenstein?", ["Dracula", "Frankenstein", "Dr. Jekyll and Mr. Hyde"], 1),
    (17, "Who wrote “The Trial”?", ["Thomas Mann", "Franz Kafka", "Hermann Hesse"], 1),
    (18, "In “The Lord of the Rings”, who is the author?", ["C.S. Lewis", "J.R.R. Tolkien", "George R.R. Martin"], 1),
    (19, "Which novel is set largely on the Yorkshire moors?", ["Jane Eyre", "Wuthering Heights", "Great Expectations"], 1),
    (20, "Who wrote “Fahrenheit 451”?", ["Ray Bradbury", "Isaac Asimov", "Philip K. Dick"], 0),
];

pub fn build_classic_bank() -> Result<QuestionBank<MultipleChoiceItem>, CatalogError> {
    let items = CLASSIC_QUESTIONS
        .iter()
        .map(|(id, prompt, options, correct)| {
            MultipleChoiceItem::new(*id, *prompt, *options, *correct)
        })
        .collect::<Result<Vec<_>, _>>()?;
    QuestionBank::new(items)
}
