//! Question bank adapters

mod json_bank;

pub use json_bank::JsonQuestionBank;
