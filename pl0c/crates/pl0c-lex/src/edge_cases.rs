//! Edge case tests for pl0c-lex
