pub mod loaders;
pub mod question;
pub mod session;

pub use loaders::{load_question_bank, parse_question_bank};
pub use question::{Question, QuestionAssetType};
pub use session::{PreTestResult, QuizInfo, StudentAnswer};
