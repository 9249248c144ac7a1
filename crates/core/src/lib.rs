pub mod decider;
pub mod questioner;
pub mod rules;
pub mod speaker;

pub use decider::decide_next_step;
pub use questioner::{OpenAiQuestioner, Questioner};
pub use rules::InterviewRules;
pub use speaker::{OpenAiSpeaker, Speaker};
