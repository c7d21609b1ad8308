pub mod instructor_question;

pub use instructor_question::InstructorQuestionView;
