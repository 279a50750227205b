//! Lessons module - educational content, quizzes and per-lesson progress.

mod lessons_catalog;
mod lessons_model;

#[cfg(test)]
mod lessons_model_tests;

pub use lessons_catalog::default_lessons;
pub use lessons_model::{
    is_passing, quiz_percentage, Lesson, LessonCategory, LessonProgress, LessonStatus,
    LessonStep, QuizOption, QuizQuestion,
};
