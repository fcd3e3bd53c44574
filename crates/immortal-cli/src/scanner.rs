use std::{error::Error, io::BufRead, str::FromStr};

use anyhow::Context;

/// Whitespace-separated tokens from a line-oriented reader.
pub struct Scanner<R> {
    reader: R,
    buffer: Vec<String>,
    line: usize,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Scanner {
            reader,
            buffer: Vec::new(),
            line: 0,
        }
    }

    /// Line number of the most recently read token, starting at 1.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Next token, or `None` once the reader is exhausted.
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> anyhow::Result<Option<T>>
    where
        T: FromStr,
        T::Err: Error + Send + Sync + 'static,
    {
        loop {
            if let Some(token) = self.buffer.pop() {
                return token
                    .parse()
                    .map(Some)
                    .with_context(|| format!("invalid token `{token}` on line {}", self.line));
            }
            let mut input = String::new();
            if self.reader.read_line(&mut input)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            self.buffer = input.split_whitespace().rev().map(String::from).collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_across_lines() {
        let mut scanner = Scanner::new("1 2\n\n  3\n".as_bytes());
        assert_eq!(scanner.next::<u64>().unwrap(), Some(1));
        assert_eq!(scanner.next::<u64>().unwrap(), Some(2));
        assert_eq!(scanner.line(), 1);
        assert_eq!(scanner.next::<u64>().unwrap(), Some(3));
        assert_eq!(scanner.line(), 3);
        assert_eq!(scanner.next::<u64>().unwrap(), None);
    }

    #[test]
    fn test_invalid_token() {
        let mut scanner = Scanner::new("7 x".as_bytes());
        assert_eq!(scanner.next::<u64>().unwrap(), Some(7));
        let error = scanner.next::<u64>().unwrap_err();
        assert_eq!(error.to_string(), "invalid token `x` on line 1");
    }
}
