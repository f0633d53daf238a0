use analysis::{aggregate, QuestionId};

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| analysis::DEFAULT_SOURCE.to_string());
    let table = analysis::load(&path).unwrap();

    for question in QuestionId::ALL {
        match aggregate(&table, question) {
            Ok(derived) => println!("{}\n{}", question.title(), derived.frame()),
            Err(e) => println!("{}: {}", question.title(), e),
        }
    }
}
