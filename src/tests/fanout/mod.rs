//! FanoutWriter module tests.
