//! Random-access byte cursor
//!
//! A [`ByteCursor`] is a read/seek/tell view over one immutable byte buffer.
//! Reads hand out slices of the underlying storage; the buffer is never copied.

use super::{ParseError, ParseResult};
use std::borrow::Cow;
use std::io::{Read, Seek, SeekFrom};

/// Random-access cursor over an immutable byte buffer
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: Cow<'a, [u8]>,
    position: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor borrowing `data`, positioned at offset 0
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data: Cow::Borrowed(data),
            position: 0,
        }
    }

    /// Load a seekable source into a cursor that owns its bytes.
    ///
    /// The length is measured by seeking to the end of the source, and the
    /// source position is restored before its content is read. The resulting
    /// cursor starts at the position the source had on entry.
    pub fn from_reader<R: Read + Seek>(mut reader: R) -> ParseResult<ByteCursor<'static>> {
        let start = reader
            .stream_position()
            .map_err(|e| ParseError::InvalidSource(format!("cannot query position: {e}")))?;
        let length = reader
            .seek(SeekFrom::End(0))
            .map_err(|e| ParseError::InvalidSource(format!("cannot measure length: {e}")))?;
        let length = usize::try_from(length).map_err(|_| {
            ParseError::InvalidSource(format!("source of {length} bytes does not fit in memory"))
        })?;

        reader
            .seek(SeekFrom::Start(0))
            .map_err(|e| ParseError::InvalidSource(format!("cannot rewind source: {e}")))?;
        let mut data = Vec::with_capacity(length);
        reader
            .read_to_end(&mut data)
            .map_err(|e| ParseError::InvalidSource(format!("cannot read source: {e}")))?;

        let mut cursor = ByteCursor {
            data: Cow::Owned(data),
            position: 0,
        };
        cursor.seek(SeekFrom::Start(start));
        Ok(cursor)
    }

    /// Read a single byte and advance past it
    #[inline]
    pub fn read_byte(&mut self) -> Option<u8> {
        let byte = self.data.get(self.position).copied()?;
        self.position += 1;
        Some(byte)
    }

    /// Read up to `n` bytes, advancing by the number of bytes returned.
    ///
    /// Returns an empty slice at the end of the buffer.
    pub fn read(&mut self, n: usize) -> &[u8] {
        let start = self.position;
        let end = start.saturating_add(n).min(self.data.len());
        self.position = end;
        &self.data[start..end]
    }

    /// Reposition the cursor and return the new absolute position.
    ///
    /// Targets outside the buffer are clamped into `[0, len]`.
    pub fn seek(&mut self, pos: SeekFrom) -> usize {
        let len = self.data.len() as i128;
        let target = match pos {
            SeekFrom::Start(offset) => offset as i128,
            SeekFrom::Current(delta) => self.position as i128 + delta as i128,
            SeekFrom::End(delta) => len + delta as i128,
        };
        self.position = target.clamp(0, len) as usize;
        self.position
    }

    /// Current absolute position
    #[inline]
    pub fn tell(&self) -> usize {
        self.position
    }

    /// Byte at an absolute offset, without moving the cursor
    #[inline]
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.data.get(offset).copied()
    }

    /// Total length of the buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The whole underlying buffer
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<'a> From<&'a [u8]> for ByteCursor<'a> {
    fn from(data: &'a [u8]) -> Self {
        ByteCursor::new(data)
    }
}

impl From<Vec<u8>> for ByteCursor<'static> {
    fn from(data: Vec<u8>) -> Self {
        ByteCursor {
            data: Cow::Owned(data),
            position: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Error, ErrorKind};

    const SAMPLE: &[u8] = b"This is a sequence of bytes.";

    #[test]
    fn test_seek_to_end_measures_length() {
        let mut cursor = ByteCursor::new(SAMPLE);
        assert_eq!(cursor.seek(SeekFrom::End(0)), SAMPLE.len());
        assert_eq!(cursor.tell(), SAMPLE.len());
    }

    #[test]
    fn test_read_single_byte() {
        let mut cursor = ByteCursor::new(SAMPLE);
        cursor.seek(SeekFrom::Start(3));
        assert_eq!(cursor.read_byte(), Some(SAMPLE[3]));
        assert_eq!(cursor.tell(), 4);
    }

    #[test]
    fn test_read_past_end_is_truncated() {
        let mut cursor = ByteCursor::new(SAMPLE);
        cursor.seek(SeekFrom::End(-3));
        assert_eq!(cursor.read(4), &SAMPLE[SAMPLE.len() - 3..]);
        assert_eq!(cursor.tell(), SAMPLE.len());
        assert!(cursor.read(10).is_empty());
        assert_eq!(cursor.read_byte(), None);
    }

    #[test]
    fn test_seek_is_clamped() {
        let mut cursor = ByteCursor::new(SAMPLE);
        assert_eq!(cursor.seek(SeekFrom::Current(-10)), 0);
        assert_eq!(cursor.seek(SeekFrom::Start(1000)), SAMPLE.len());
        assert_eq!(cursor.seek(SeekFrom::End(5)), SAMPLE.len());
        assert_eq!(cursor.seek(SeekFrom::End(-1000)), 0);
        cursor.seek(SeekFrom::Start(5));
        assert_eq!(cursor.seek(SeekFrom::Current(2)), 7);
    }

    #[test]
    fn test_read_returns_view_into_source() {
        let mut cursor = ByteCursor::new(SAMPLE);
        let slice = cursor.read(4);
        assert_eq!(slice.as_ptr(), SAMPLE.as_ptr());
    }

    #[test]
    fn test_from_reader_keeps_start_position() {
        let mut source = Cursor::new(SAMPLE.to_vec());
        source.set_position(5);
        let mut cursor = ByteCursor::from_reader(source).unwrap();
        assert_eq!(cursor.len(), SAMPLE.len());
        assert_eq!(cursor.tell(), 5);
        assert_eq!(cursor.read(2), b"is");
    }

    struct BrokenSource;

    impl Read for BrokenSource {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(Error::new(ErrorKind::Other, "device gone"))
        }
    }

    impl Seek for BrokenSource {
        fn seek(&mut self, _pos: SeekFrom) -> std::io::Result<u64> {
            Err(Error::new(ErrorKind::Unsupported, "not seekable"))
        }
    }

    #[test]
    fn test_from_reader_rejects_unseekable_source() {
        let err = ByteCursor::from_reader(BrokenSource).unwrap_err();
        assert!(matches!(err, ParseError::InvalidSource(_)));
    }
}
