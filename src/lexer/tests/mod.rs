//! Тесты для лексического анализатора MySQL

pub mod lexer_tests;
