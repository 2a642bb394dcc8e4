use std::fmt;
use std::fmt::Formatter;
use crate::codec::codec::LINE_SEPARATOR;
use crate::codec::structs::reply::Reply;

impl Reply {
    pub fn empty() -> Reply
    {
        Reply { lines: Vec::new() }
    }

    pub fn single(message: &str) -> Reply
    {
        Reply { lines: vec![message.to_string()] }
    }

    pub fn from_lines<I, S>(lines: I) -> Reply
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Reply { lines: lines.into_iter().map(Into::into).collect() }
    }

    pub fn len(&self) -> usize
    {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.lines.is_empty()
    }

    /// Body lines joined with the line separator, without the count prefix.
    pub fn body(&self) -> String
    {
        self.lines.join(LINE_SEPARATOR)
    }

    /// Wire form: `<count>\n` followed by every body line, each newline-terminated.
    pub fn encode(&self) -> String
    {
        let mut encoded = String::with_capacity(16 + self.lines.iter().map(|l| l.len() + 1).sum::<usize>());
        encoded.push_str(&self.lines.len().to_string());
        encoded.push_str(LINE_SEPARATOR);
        for line in &self.lines {
            encoded.push_str(line);
            encoded.push_str(LINE_SEPARATOR);
        }
        encoded
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.body())
    }
}
