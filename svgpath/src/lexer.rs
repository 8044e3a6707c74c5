use log::{debug, trace};

use crate::command::Command;
use crate::token::Token;

/// Splits path data into command letters and numeric literals.
///
/// Anything that is neither (whitespace, commas, stray letters) is skipped.
/// Each item carries the byte offset of the token in the input.
pub struct Tokenizer<'a> {
    input: &'a str,
    offset: usize,
}

fn is_white(c: &u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | b'\x0C')
}

fn is_separator(c: &u8) -> bool {
    is_white(c) || *c == b','
}

fn is_sign(c: Option<&u8>) -> bool {
    matches!(c, Some(b'+' | b'-'))
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).map_or(false, u8::is_ascii_digit) {
        i += 1;
    }
    i
}

// [-+]?[0-9]*\.?[0-9]+(?:[eE][-+]?[0-9]+)?
fn number_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start;
    if is_sign(bytes.get(i)) {
        i += 1;
    }
    let int_end = skip_digits(bytes, i);
    let fraction = bytes.get(int_end) == Some(&b'.')
        && bytes.get(int_end + 1).map_or(false, u8::is_ascii_digit);
    let mut end = if fraction {
        skip_digits(bytes, int_end + 1)
    } else if int_end > i {
        int_end
    } else {
        return None;
    };

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut j = end + 1;
        if is_sign(bytes.get(j)) {
            j += 1;
        }
        let exp_end = skip_digits(bytes, j);
        if exp_end > j {
            end = exp_end;
        }
    }
    Some(end)
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Tokenizer { input, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = (usize, Token<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.input.as_bytes();
        while let Some(byte) = bytes.get(self.offset) {
            let pos = self.offset;
            if let Some((command, absolute)) = Command::from_letter(*byte as char) {
                self.offset += 1;
                trace!("command {:?} at {}", *byte as char, pos);
                return Some((pos, Token::Command(command, absolute)));
            }
            if let Some(end) = number_end(bytes, pos) {
                self.offset = end;
                let literal = &self.input[pos..end];
                trace!("number {:?} at {}", literal, pos);
                return Some((pos, Token::Number(literal)));
            }
            if !is_separator(byte) {
                debug!("skip unexpected byte {:#04x} at {}", byte, pos);
            }
            self.offset += 1;
        }
        None
    }
}
