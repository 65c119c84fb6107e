//! Business logic services

pub mod question_service;

pub use question_service::QuestionService;
