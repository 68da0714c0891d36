use embedded_io::{Error as _, ErrorKind, Read};

use crate::buffer::ByteString;
use crate::error::ByteStringError;

/// Reads newline-terminated lines into [`ByteString`]s, one byte at a time.
///
/// The newline is not part of the returned line. A last line that ends at
/// end of input without a newline is still returned.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    position: usize,
    exhausted: bool,
}

impl<R: Read> LineReader<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            position: 0,
            exhausted: false,
        }
    }

    /// Number of bytes consumed from the reader so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Returns `None` at end of input.
    fn read_byte(&mut self) -> Result<Option<u8>, ByteStringError> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.position += 1;
                    let [value] = byte;
                    return Ok(Some(value));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => {
                    return Err(ByteStringError::ReadError {
                        kind: e.kind(),
                        position: self.position,
                    })
                }
            }
        }
    }

    fn read_into(&mut self, line: &mut ByteString) -> Result<bool, ByteStringError> {
        let mut any = false;
        while let Some(byte) = self.read_byte()? {
            any = true;
            if byte == b'\n' {
                return Ok(true);
            }
            line.push(byte)?;
        }
        self.exhausted = true;
        Ok(any)
    }

    /// Reads the next line.
    ///
    /// Returns `Ok(None)` once the input is exhausted and no byte was read for
    /// this line. An empty line between two newlines is `Some` of an empty string.
    ///
    /// # Errors
    ///
    /// Returns `ByteStringError::ReadError` if the reader fails, or
    /// `ByteStringError::AllocationError` if the line cannot grow. Bytes of
    /// the line read before the failure are discarded; the error's `position`
    /// locates it. After an error the reader reports end of input.
    pub fn next_line(&mut self) -> Result<Option<ByteString>, ByteStringError> {
        if self.exhausted {
            return Ok(None);
        }

        let mut line = ByteString::new()?;
        match self.read_into(&mut line) {
            Ok(true) => Ok(Some(line)),
            Ok(false) => Ok(None),
            Err(e) => {
                self.exhausted = true;
                Err(e)
            }
        }
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = Result<ByteString, ByteStringError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

/// Reads one line from `reader`, without its newline.
///
/// End of input before a newline returns the bytes read so far, which is an
/// empty string if the input was already exhausted.
///
/// # Errors
///
/// Returns `ByteStringError::ReadError` if the reader fails, or
/// `ByteStringError::AllocationError` if the line cannot grow. Bytes consumed
/// before a failure are discarded along with the partial line; the error's
/// `position` counts them.
pub fn read_line<R: Read + ?Sized>(reader: &mut R) -> Result<ByteString, ByteStringError> {
    match LineReader::new(reader).next_line()? {
        Some(line) => Ok(line),
        None => ByteString::new(),
    }
}
