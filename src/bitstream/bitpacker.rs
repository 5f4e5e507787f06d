use log::error;

/// Packs bits, most significant bit first, into a byte buffer.
pub struct BitPacker {
    pub output: Vec<u8>,
    queue: u64,
    q_bits: u8,
    bit_count: usize,
}

impl BitPacker {
    /// Create a new BitPacker with room for the number of bits specified. Call flush() to
    /// flush the bit queue to the buffer before taking the output.
    pub fn new(bits: usize) -> Self {
        Self {
            output: Vec::with_capacity((bits + 7) / 8),
            queue: 0,
            q_bits: 0,
            bit_count: 0,
        }
    }

    /// Internal bitstream write function common to all out.XX functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Puts a single bit on the stream.
    pub fn out_bit(&mut self, bit: bool) {
        self.queue <<= 1;
        self.queue |= bit as u64;
        self.q_bits += 1;
        self.bit_count += 1;
        self.write_stream();
    }

    /// Puts a run of bits on the stream, first bit first.
    pub fn out_bits(&mut self, bits: &[bool]) {
        bits.iter().for_each(|&bit| self.out_bit(bit));
    }

    /// Flushes the remaining bits (1-7) from the buffer, padding with 0s in the least
    /// signficant bits
    pub fn flush(&mut self) {
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits += 8 - self.q_bits;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
    }

    /// Number of bits put on the stream, not counting flush padding.
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.bit_count / 8, self.bit_count % 8)
    }
}
