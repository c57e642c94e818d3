//! Reader for `n m t` followed by `m` edge pairs.
//!
//! Tokens may be split across lines in any way. Anything after the last
//! edge pair is ignored.

use std::io::Read;
use std::str::SplitWhitespace;

use crate::config::SpreadConfig;
use crate::types::{GraphError, GraphResult};

/// Parse the plain-text stream into a config record.
pub fn parse_text_input(input: &str) -> GraphResult<SpreadConfig> {
    let mut tokens = Tokens {
        inner: input.split_whitespace(),
        position: 0,
    };

    let vertex_count = tokens.next_int("vertex count")?;
    let edge_count = tokens.next_int("edge count")?;
    let time_limit = tokens.next_int("time limit")?;

    if edge_count < 0 {
        return Err(GraphError::Parse(format!(
            "edge count must be non-negative, got {}",
            edge_count
        )));
    }

    let mut config = SpreadConfig::new(vertex_count, time_limit);
    for i in 0..edge_count {
        let a = tokens.next_int(&format!("endpoint a of edge {}", i))?;
        let b = tokens.next_int(&format!("endpoint b of edge {}", i))?;
        config.edges.push((a, b));
    }

    Ok(config)
}

/// Read the whole stream from `reader` and parse it.
pub fn read_text_input<R: Read>(mut reader: R) -> GraphResult<SpreadConfig> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_text_input(&input)
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    position: usize,
}

impl Tokens<'_> {
    fn next_int(&mut self, field: &str) -> GraphResult<i64> {
        let token = self.inner.next().ok_or_else(|| {
            GraphError::Parse(format!("missing {} (token {})", field, self.position))
        })?;
        let value = token.parse::<i64>().map_err(|_| {
            GraphError::Parse(format!(
                "expected integer for {} at token {}, got {:?}",
                field, self.position, token
            ))
        })?;
        self.position += 1;
        Ok(value)
    }
}
