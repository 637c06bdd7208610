mod advisor;
mod composer;
mod conversation;
mod matcher;
mod samples;
pub mod settings;
mod types;

pub use advisor::Advisor;
pub use composer::Composer;
pub use conversation::Conversation;
pub use matcher::{recommend, Recommendation};
pub use samples::{find_sample, SAMPLE_HISTORIES};
pub use types::{Message, Role, SampleHistory};
