use expense_repo::expense_repo::NewExpense;
use fake::faker::lorem::en::{Sentence, Words};
use fake::{Fake, Faker};
use rand::seq::SliceRandom;

const TAGS: [&str; 5] = ["food", "beverage", "transport", "rent", "gift"];

#[derive(Default)]
pub struct NewExpenseGenerator;

impl NewExpenseGenerator {
    pub fn generate(&mut self) -> NewExpense {
        let words: Vec<String> = Words(1..4).fake();
        let tags = TAGS
            .choose_multiple(&mut rand::thread_rng(), (0..3).fake::<usize>())
            .map(|t| t.to_string())
            .collect();

        NewExpense::new(
            words.join(" "),
            // quarters are exact in binary so they survive a round trip through FLOAT
            Faker.fake::<i16>() as f64 * 0.25,
            Sentence(2..6).fake(),
            tags,
        )
    }

    pub fn generate_with_tags(&mut self, tags: Vec<String>) -> NewExpense {
        NewExpense {
            tags,
            ..self.generate()
        }
    }
}
