//! Unit test modules.

mod pseudonym_test;
mod recipe_card_test;
