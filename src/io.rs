//! Byte-sink support for `SimpleVector<u8>` behind the `std` feature.

use std::io;

use crate::SimpleVector;

/// Appends written bytes to the back of the sequence.
///
/// Writing never fails; the sequence grows as needed.
///
/// # Examples
///
/// ```
/// use std::io::Write;
///
/// use simple_vector::SimpleVector;
///
/// let mut buffer = SimpleVector::new();
/// write!(buffer, "{}-{}", 4, 2).unwrap();
/// assert_eq!(buffer, *b"4-2");
/// ```
impl io::Write for SimpleVector<u8> {
    #[inline]
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.extend(bytes);
        Ok(bytes.len())
    }

    #[inline]
    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.extend(bytes);
        Ok(())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::SimpleVector;

    #[test]
    fn test_write_appends() {
        let mut buffer = SimpleVector::new();
        buffer.write_all(b"ab").unwrap();
        assert_eq!(buffer.write(b"cd").unwrap(), 2);
        buffer.flush().unwrap();
        assert_eq!(buffer, *b"abcd");
    }
}
