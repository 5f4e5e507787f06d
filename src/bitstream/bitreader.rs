//! BitReader: Reads back a bitstream packed by BitPacker.
//!
//! Bits come out most significant bit first. Only the first `bit_len` bits are returned, so the
//! zero padding in the last byte is never seen by the caller.
//!

const BIT_MASK: u8 = 0xff;

/// Reads bits from a packed buffer.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
    remaining: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader over the first bit_len bits of the buffer.
    pub fn new(buffer: &'a [u8], bit_len: usize) -> Self {
        assert!(
            bit_len <= buffer.len() * 8,
            "{} bits do not fit in {} bytes",
            bit_len,
            buffer.len()
        );
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
            remaining: bit_len,
        }
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        if self.remaining == 0 {
            return None;
        }
        let bit =
            (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        self.remaining -= 1;
        Some(bit == 1)
    }

    /// Bits still to be read.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.bool_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for BitReader<'_> {}

#[cfg(test)]
mod test {
    use super::BitReader;

    #[test]
    fn basic_test() {
        let x = [0b10000001_u8];
        let mut br = BitReader::new(&x, 8);
        assert_eq!(br.bool_bit(), Some(true));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(true));
        assert_eq!(br.bool_bit(), None);
    }

    #[test]
    fn padding_is_hidden_test() {
        let x = [0xff, 0b1010_0000];
        let br = BitReader::new(&x, 11);
        assert_eq!(br.len(), 11);
        let bits: Vec<bool> = br.collect();
        assert_eq!(bits.len(), 11);
        assert!(bits[..9].iter().all(|&b| b));
        assert_eq!(&bits[9..], &[false, true]);
    }

    #[test]
    fn loc_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = BitReader::new(x, x.len() * 8);
        (0..41).for_each(|_| {
            br.bool_bit();
        });
        assert_eq!(br.loc(), "[5.1]");
        assert_eq!(br.remaining(), 13 * 8 - 41);
    }

    #[test]
    fn bool_bit_test() {
        let x = [0b01010000];
        let mut br = BitReader::new(&x, 5);
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(true));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(true));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), None);
    }

    #[test]
    #[should_panic]
    fn too_many_bits_test() {
        BitReader::new(&[0], 9);
    }
}
