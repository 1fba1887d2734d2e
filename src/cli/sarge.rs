use std::convert::Infallible;

use sarge::ArgumentType;

use crate::cli::{SinkArgs, normalize};

impl ArgumentType for SinkArgs {
    type Error = Infallible;

    const REPEATABLE: bool = true;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        let mut sinks = Vec::new();
        match val {
            None => sinks.push("-".to_string()),
            Some(v) => {
                for token in v.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                    sinks.push(normalize(token));
                }
            }
        }

        Some(Ok(SinkArgs(sinks)))
    }

    fn default_value() -> Option<Self> {
        Some(SinkArgs::default())
    }
}
