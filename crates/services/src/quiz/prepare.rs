use rand::Rng;
use tracing::warn;
use trivia_core::{PreparedQuestion, RawQuestion};

/// Shuffle each record's answers, dropping records that cannot be played.
///
/// Order of the surviving questions follows the source.
pub fn prepare_questions<R: Rng + ?Sized>(
    raw: Vec<RawQuestion>,
    rng: &mut R,
) -> Vec<PreparedQuestion> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(position, question)| {
            match PreparedQuestion::prepare(question, rng) {
                Ok(prepared) => Some(prepared),
                Err(err) => {
                    warn!(position, error = %err, "skipping unplayable question");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn keeps_order_and_drops_invalid_records() {
        let raw = vec![
            RawQuestion::new("First?", "a", ["b", "c", "d"]),
            RawQuestion::new("   ", "a", ["b"]),
            RawQuestion::new("Second?", "", ["b"]),
            RawQuestion::new("Third?", "yes", Vec::<String>::new()),
            RawQuestion::new("Fourth?", "True", ["False"]),
        ];
        let mut rng = StdRng::seed_from_u64(11);

        let prepared = prepare_questions(raw, &mut rng);

        let texts: Vec<&str> = prepared.iter().map(PreparedQuestion::text).collect();
        assert_eq!(texts, ["First?", "Fourth?"]);
        assert_eq!(prepared[0].answers().len(), 4);
        assert_eq!(prepared[1].answers().len(), 2);
    }

    #[test]
    fn empty_input_prepares_nothing() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(prepare_questions(Vec::new(), &mut rng).is_empty());
    }
}
