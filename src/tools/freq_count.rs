use rayon::prelude::*;

use super::options::HuffOpts;

/// Returns a frequency count of the input data. Uses parallelism when data set is over 64k.
pub fn freqs(data: &[u8]) -> [usize; 256] {
    freqs_with(data, &HuffOpts::default())
}

/// Returns a frequency count of the input data, going parallel when the options say the data is big enough.
pub fn freqs_with(data: &[u8], opts: &HuffOpts) -> [usize; 256] {
    if opts.use_parallel(data.len()) {
        data.par_chunks(opts.chunk_size)
            .fold(
                || [0_usize; 256],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || [0_usize; 256],
                |mut s, f| {
                    s.iter_mut().zip(&f).for_each(|(a, b)| *a += b);
                    s
                },
            )
    } else {
        let mut freqs = [0_usize; 256];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        freqs
    }
}
