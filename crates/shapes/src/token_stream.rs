use std::io::{self, BufRead};
use std::str::FromStr;

use crate::ShapeError;

/// Reads the next whitespace-delimited token.
///
/// Only the token and the whitespace in front of it are consumed, so whatever
/// follows stays in `source` for the next reader. Returns `None` once the
/// input is exhausted.
pub fn read_token(source: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut token = Vec::new();
    loop {
        let buffer = match source.fill_buf() {
            Ok(buffer) => buffer,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buffer.is_empty() {
            break;
        }
        let mut used = 0;
        let mut finished = false;
        for &byte in buffer {
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    finished = true;
                    break;
                }
            } else {
                token.push(byte);
            }
            used += 1;
        }
        source.consume(used);
        if finished {
            break;
        }
    }
    if token.is_empty() {
        Ok(None)
    } else {
        Ok(Some(String::from_utf8_lossy(&token).into_owned()))
    }
}

pub fn read_number<N: FromStr>(source: &mut dyn BufRead) -> Result<N, ShapeError> {
    let token = read_token(source)?.ok_or(ShapeError::UnexpectedEndOfInput)?;
    token
        .parse()
        .map_err(|_| ShapeError::InvalidNumber { token })
}

/// Reads exactly `COUNT` numbers, or nothing usable at all.
pub fn read_numbers<N, const COUNT: usize>(source: &mut dyn BufRead) -> Result<[N; COUNT], ShapeError>
where
    N: FromStr + Copy + Default,
{
    let mut numbers = [N::default(); COUNT];
    for number in numbers.iter_mut() {
        *number = read_number(source)?;
    }
    Ok(numbers)
}
