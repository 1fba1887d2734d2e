//! Unit tests, grouped by module.

mod fanout;
