#![allow(dead_code)]

use embedded_io::{ErrorKind, Read};

/// Hands out one byte per `read` call.
pub struct OneByteReader<I>
where
    I: Iterator<Item = u8>,
{
    iter: I,
}

impl<I> OneByteReader<I>
where
    I: Iterator<Item = u8>,
{
    pub fn new(iter: I) -> Self {
        OneByteReader { iter }
    }
}

impl<I> embedded_io::ErrorType for OneByteReader<I>
where
    I: Iterator<Item = u8>,
{
    type Error = ErrorKind;
}

impl<I> Read for OneByteReader<I>
where
    I: Iterator<Item = u8>,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() {
            return Ok(0);
        }
        if let Some(next_byte) = self.iter.next() {
            buf[0] = next_byte;
            Ok(1)
        } else {
            Ok(0)
        }
    }
}

/// Plays back a script of bytes and errors, then reports end of input.
pub struct ScriptedReader {
    script: Vec<Result<u8, ErrorKind>>,
    position: usize,
}

impl ScriptedReader {
    pub fn new(script: Vec<Result<u8, ErrorKind>>) -> Self {
        ScriptedReader {
            script,
            position: 0,
        }
    }

    pub fn bytes_then_error(bytes: &[u8], kind: ErrorKind) -> Self {
        let mut script: Vec<_> = bytes.iter().copied().map(Ok).collect();
        script.push(Err(kind));
        Self::new(script)
    }
}

impl embedded_io::ErrorType for ScriptedReader {
    type Error = ErrorKind;
}

impl Read for ScriptedReader {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() {
            return Ok(0);
        }
        let Some(step) = self.script.get(self.position).copied() else {
            return Ok(0);
        };
        self.position += 1;
        let byte = step?;
        buf[0] = byte;
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_byte_reader() {
        let mut reader = OneByteReader::new(b"ab".iter().copied());
        let mut buf = [0u8; 4];

        assert_eq!(reader.read(&mut buf).unwrap(), 1);
        assert_eq!(buf[0], b'a');
        assert_eq!(reader.read(&mut buf).unwrap(), 1);
        assert_eq!(buf[0], b'b');
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_scripted_reader() {
        let mut reader = ScriptedReader::bytes_then_error(b"x", ErrorKind::Other);
        let mut buf = [0u8; 1];

        assert_eq!(reader.read(&mut buf).unwrap(), 1);
        assert_eq!(reader.read(&mut buf), Err(ErrorKind::Other));
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
    }
}
