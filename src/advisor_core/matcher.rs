#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Gpt4,
    Claude3Opus,
    Gemini15Pro,
    Llama3,
    NoMatch,
}

impl Recommendation {
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::Gpt4 => {
                "Recommended LLM: GPT-4 (for its analytical and structured output)"
            }
            Recommendation::Claude3Opus => {
                "Recommended LLM: Claude 3 Opus (strong evaluation and reasoning)"
            }
            Recommendation::Gemini15Pro => {
                "Recommended LLM: Gemini 1.5 Pro (great for logical reasoning)"
            }
            Recommendation::Llama3 => {
                "Recommended LLM: LLaMA 3 (fine-tuned for human-centric NLP tasks)"
            }
            Recommendation::NoMatch => "No suitable LLM found. Please provide more details.",
        }
    }
}

/// Keyword sets in priority order.
///
/// "eval" in the last set is also a substring of "evaluation" in the second,
/// so any input mentioning "evaluation" resolves to Claude 3 Opus before the
/// LLaMA 3 rule is ever tested.
const RULES: [(&[&str], Recommendation); 4] = [
    (&["cost", "comparison", "pricing"], Recommendation::Gpt4),
    (
        &["performance", "accuracy", "evaluation"],
        Recommendation::Claude3Opus,
    ),
    (&["reasoning", "inference", "logic"], Recommendation::Gemini15Pro),
    (&["human", "natural language", "eval"], Recommendation::Llama3),
];

/// Classifies free text by case-insensitive substring match. First matching
/// rule wins.
pub fn recommend(input: &str) -> Recommendation {
    let lower = input.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, rec)| *rec)
        .unwrap_or(Recommendation::NoMatch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_always_gpt4() {
        for input in [
            "pricing",
            "What is the PRICING like?",
            "pricing for evaluation and logic",
            "human pricing reasoning",
        ] {
            assert_eq!(recommend(input), Recommendation::Gpt4, "{input}");
        }
    }

    #[test]
    fn test_logic_without_higher_keywords() {
        assert_eq!(recommend("I need strong logic"), Recommendation::Gemini15Pro);
        assert_eq!(
            recommend("logic for human conversations"),
            Recommendation::Gemini15Pro
        );
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(recommend("performance and eval"), Recommendation::Claude3Opus);
        assert_eq!(recommend("model evaluation"), Recommendation::Claude3Opus);
        assert_eq!(recommend("quick eval please"), Recommendation::Llama3);
        assert_eq!(
            recommend("Natural Language understanding"),
            Recommendation::Llama3
        );
    }

    #[test]
    fn test_fallback() {
        assert_eq!(recommend("hello there"), Recommendation::NoMatch);
        assert_eq!(recommend(""), Recommendation::NoMatch);
        assert_eq!(
            Recommendation::NoMatch.message(),
            "No suitable LLM found. Please provide more details."
        );
    }

    #[test]
    fn test_messages() {
        assert!(Recommendation::Gpt4.message().contains("GPT-4"));
        assert!(Recommendation::Claude3Opus.message().contains("Claude 3 Opus"));
        assert!(Recommendation::Gemini15Pro.message().contains("Gemini 1.5 Pro"));
        assert!(Recommendation::Llama3.message().contains("LLaMA 3"));
    }
}
