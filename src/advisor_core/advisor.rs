use std::time::Duration;

use tracing::debug;

use super::matcher::recommend;
use super::types::{Message, Role};

/// Produces the simulated assistant reply after a fixed pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisor {
    delay: Duration,
}

impl Advisor {
    pub fn new(delay: Duration) -> Advisor {
        Advisor { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn reply(&self, draft: &str) -> Message {
        let recommendation = recommend(draft);
        debug!(?recommendation, "matched draft");
        tokio::time::sleep(self.delay).await;
        Message::new(Role::Agent, recommendation.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor_core::matcher::Recommendation;

    #[tokio::test(start_paused = true)]
    async fn test_reply_waits_for_delay() {
        let advisor = Advisor::new(Duration::from_secs(1));
        let start = tokio::time::Instant::now();

        let reply = advisor.reply("cost comparison").await;

        assert!(start.elapsed() >= Duration::from_secs(1));
        assert_eq!(reply.role(), Role::Agent);
        assert_eq!(reply.content(), Recommendation::Gpt4.message());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_not_ready_early() {
        let advisor = Advisor::new(Duration::from_millis(1000));
        let pending = advisor.reply("anything");
        let early = tokio::time::timeout(Duration::from_millis(999), pending).await;
        assert!(early.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_fallback() {
        let reply = Advisor::new(Duration::ZERO).reply("hello").await;
        assert_eq!(reply.content(), Recommendation::NoMatch.message());
    }
}
