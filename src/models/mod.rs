pub mod question;
pub mod settings;

pub use question::{Difficulty, Question, QuestionKind, QuestionRecord, QuestionType};
pub use settings::{DifficultyLevels, GenerationSettings};
