use indoc::indoc;
use lazy_static::lazy_static;

use super::types::{Message, Role, SampleHistory};

lazy_static! {
    pub static ref SAMPLE_HISTORIES: Vec<SampleHistory> = vec![
        SampleHistory {
            id: "1",
            title: "GPT-4 vs Claude 3",
            preview: "Based on your requirements, I recommend...",
            timestamp: "Yesterday, 3:45 PM",
            messages: vec![
                Message::at(
                    Role::User,
                    "I need to compare GPT-4 and Claude 3 for my enterprise application. \
                     Which one would be better for handling complex reasoning tasks?",
                    "3:42 PM",
                ),
                Message::at(
                    Role::Agent,
                    indoc! {"
                        Based on your requirements for complex reasoning tasks in an enterprise setting, here's my comparison:

                        **GPT-4**:
                        - Excellent at complex reasoning and problem-solving
                        - Strong at following nuanced instructions
                        - Better integration with Microsoft products
                        - Higher cost structure

                        **Claude 3**:
                        - Comparable reasoning capabilities
                        - Excellent at understanding context and nuance
                        - More transparent in its reasoning process
                        - Generally lower cost than GPT-4

                        For complex reasoning specifically, both models perform at a high level, but GPT-4 might have a slight edge in certain domains. However, Claude 3 offers better value and is more transparent about its reasoning process.

                        I recommend starting with Claude 3 Opus and only switching to GPT-4 if you find specific reasoning tasks where it underperforms."},
                    "3:45 PM",
                ),
            ],
        },
        SampleHistory {
            id: "2",
            title: "Budget LLMs for Startups",
            preview: "For your budget constraints, I suggest...",
            timestamp: "Aug 15, 2024",
            messages: vec![
                Message::at(
                    Role::User,
                    "We're a small startup with limited budget. \
                     What are the best LLMs we can use that won't break the bank?",
                    "2:30 PM",
                ),
                Message::at(
                    Role::Agent,
                    indoc! {"
                        For startups with budget constraints, here are my recommendations:

                        1. **Mistral Large** - Excellent performance-to-cost ratio, suitable for most general tasks

                        2. **Claude Instant** - Fast, affordable, and good for customer service applications

                        3. **Llama 3 (8B or 70B)** - Can be self-hosted to reduce costs, good for various applications

                        4. **GPT-3.5 Turbo** - Still powerful enough for many applications at a fraction of GPT-4's cost

                        5. **Cohere Command** - Good for text generation and classification tasks

                        For most startups, I'd recommend starting with GPT-3.5 Turbo or Mistral Small for general use cases, and only upgrading to more expensive models for specific features you need."},
                    "2:35 PM",
                ),
            ],
        },
    ];
}

pub fn find_sample(id: &str) -> Option<&'static SampleHistory> {
    SAMPLE_HISTORIES.iter().find(|sample| sample.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ids() {
        let ids: Vec<_> = SAMPLE_HISTORIES.iter().map(|s| s.id).collect();
        assert_eq!(ids, ["1", "2"]);
        assert!(find_sample("3").is_none());
    }

    #[test]
    fn test_sample_contents() {
        let sample = find_sample("1").unwrap();
        assert_eq!(sample.title, "GPT-4 vs Claude 3");
        assert_eq!(sample.messages.len(), 2);
        assert_eq!(sample.messages[0].role(), Role::User);
        assert!(sample.messages[0]
            .content()
            .starts_with("I need to compare GPT-4 and Claude 3 for my enterprise application. Which"));
        assert_eq!(sample.messages[1].role(), Role::Agent);
        assert!(sample.messages[1]
            .content()
            .starts_with("Based on your requirements for complex reasoning tasks"));
        assert!(sample.messages[1]
            .content()
            .contains("comparison:\n\n**GPT-4**:\n- Excellent"));
        assert!(sample.messages[1].content().ends_with("underperforms."));

        let sample = find_sample("2").unwrap();
        assert_eq!(sample.timestamp, "Aug 15, 2024");
        assert_eq!(sample.messages[0].timestamp(), "2:30 PM");
        assert_eq!(sample.messages[1].timestamp(), "2:35 PM");
        assert!(sample.messages[1]
            .content()
            .contains("1. **Mistral Large**"));
    }
}
