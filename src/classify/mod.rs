mod duration;
mod mood;

pub use duration::{classify_duration, DurationBucket};
pub use mood::{classify_mood, Mood, MOOD_KEYWORDS};
