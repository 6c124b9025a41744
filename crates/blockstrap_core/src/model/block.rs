/// One contiguous, circularly wrapped window over a source series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// First source position, in `[0, n)`
    pub start_index: usize,
    /// Number of values taken, at least 1
    pub length: usize,
}

impl Block {
    /// Source positions covered by this block, wrapping past the end of a
    /// series of length `n`.
    pub fn indices(&self, n: usize) -> impl Iterator<Item = usize> {
        let start = self.start_index;
        (0..self.length).map(move |offset| (start + offset) % n)
    }

    /// Append this block's values from `series` to `out`.
    pub fn extend_into(&self, series: &[f64], out: &mut Vec<f64>) {
        out.extend(self.indices(series.len()).map(|idx| series[idx]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_wrap_around() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut out = Vec::new();

        Block {
            start_index: 2,
            length: 3,
        }
        .extend_into(&series, &mut out);
        Block {
            start_index: 0,
            length: 2,
        }
        .extend_into(&series, &mut out);
        assert_eq!(out, vec![3.0, 4.0, 5.0, 1.0, 2.0]);

        let wrapped: Vec<usize> = Block {
            start_index: 5,
            length: 3,
        }
        .indices(series.len())
        .collect();
        assert_eq!(wrapped, vec![5, 0, 1]);
    }
}
