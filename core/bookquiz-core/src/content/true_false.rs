use crate::models::question::{CatalogError, QuestionBank, TrueFalseItem};

const STATEMENTS: &[(u32, &str, bool, Option<&str>)] = &[
    (1, "“Pride and Prejudice” was written by Jane Austen.", true, None),
    (2, "Jay Gatsby is the narrator of “The Great Gatsby.”", false, Some("Nick Carraway is the narrator.")),
    (3, "“Crime and Punishment” takes place in St. Petersburg.", true, None),
    (4, "George Orwell also wrote “Animal Farm.”", true, None),
    (5, "“Moby-Dick” is primarily a novel about a shipwreck.", false, Some("It is about Captain Ahab’s obsession.")),
    (6, "Oscar Wilde wrote “The Picture of Dorian Gray.”", true, None),
    (7, "Romeo and Juliet are members of rival noble families.", true, None),
    (8, "Sherlock Holmes lives at 221B Baker Street.", true, None),
    (9, "“Brave New World” presents a utopian society without conflict.", false, Some("It is a dystopia.")),
    (10, "Leo Tolstoy wrote both “War and Peace” and “Anna Karenina.”", true, None),
    (11, "Atticus Finch is a lawyer in “To Kill a Mockingbird.”", true, None),
    (12, "“The Old Man and the Sea” is set mostly in a city environment.", false, Some("It takes place at sea.")),
    (13, "Winston Smith rebels against a totalitarian government in “1984.”", true, None),
    (14, "“Jane Eyre” was written by Emily Brontë.", false, Some("It was written by Charlotte Brontë.")),
    (15, "Holden Caulfield is the main character of “The Catcher in the Rye.”", true, None),
    (16, "“Frankenstein” was written in the 20th century.", false, Some("It was published in 1818.")),
    (17, "Franz Kafka wrote “The Trial.”", true, None),
    (18, "Middle-earth is the fictional setting of “The Lord of the Rings.”", true, None),
    (19, "“Wuthering Heights” was written by Charlotte Brontë.", false, Some("It was written by Emily Brontë.")),
    (20, "Charles Dickens wrote “Great Expectations.”", true, None),
    (21, "Heathcliff is a central character in “Wuthering Heights.”", true, None),
    (22, "“The Stranger” was written by Jean-Paul Sartre.", false, Some("It was written by Albert Camus.")),
    (23, "Dracula is a novel by Bram Stoker.", true, None),
    (24, "Gregor Samsa turns into an animal in “The Metamorphosis.”", true, None),
    (25, "“War and Peace” focuses exclusively on one family.", false, Some("It follows multiple families.")),
    (26, "John Steinbeck wrote “The Grapes of Wrath.”", true, None),
    (27, "Elizabeth Bennet appears in “Sense and Sensibility.”", false, Some("She appears in “Pride and Prejudice”.")),
    (28, "“Don Quixote” is considered one of the first modern novels.", true, None),
    (29, "Ernest Hemingway wrote “The Sun Also Rises.”", true, None),
    (30, "Raskolnikov is the main character in “Crime and Punishment.”", true, None),
    (31, "“The Brothers Karamazov” explores themes of faith, doubt, and morality.", true, None),
    (32, "Gabriel García Márquez wrote “One Hundred Years of Solitude.”", true, None),
    (33, "In “Animal Farm,” the pigs represent the working class.", false, Some("They represent the ruling elite.")),
    (34, "“The Name of the Rose” is set in a medieval monastery.", true, None),
    (35, "Victor Hugo wrote “Les Misérables.”", true, None),
    (36, "Hester Prynne is punished for adultery in “The Scarlet Letter.”", true, None),
    (37, "“Of Mice and Men” is set during the Great Depression.", true, None),
    (38, "William Faulkner wrote “The Sound and the Fury.”", true, None),
    (39, "Meursault is emotionally detached in “The Stranger.”", true, None),
    (40, "“Fahrenheit 451” depicts a society where books are protected.", false, Some("Books are banned and burned.")),
];

pub fn build_true_false_bank() -> Result<QuestionBank<TrueFalseItem>, CatalogError> {
    let items = STATEMENTS
        .iter()
        .map(|(id, statement, answer, note)| {
            let item = TrueFalseItem::new(*id, *statement, *answer)?;
            Ok(match note {
                Some(note) => item.with_note(*note),
                None => item,
            })
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;
    QuestionBank::new(items)
}
