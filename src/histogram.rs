//! Dense per-symbol occurrence counts.
//!
//! For words of $n$ bits the histogram has exactly $2^n$ bins, one per
//! possible symbol, including the empty ones. Memory is therefore
//! exponential in the word length; callers bound it.

/// Occurrence counts indexed by symbol value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<u64>,
}

impl Histogram {
    /// Count `symbols` into `bins` zero-initialized bins.
    ///
    /// Symbols outside `0..bins` are ignored.
    pub fn from_symbols<I: IntoIterator<Item = u64>>(bins: usize, symbols: I) -> Self {
        Self::tally(vec![0u64; bins], symbols)
    }

    /// Count `symbols` into pre-allocated, zeroed `counts`.
    pub(crate) fn tally<I: IntoIterator<Item = u64>>(mut counts: Vec<u64>, symbols: I) -> Self {
        for symbol in symbols {
            if let Some(slot) = usize::try_from(symbol)
                .ok()
                .and_then(|i| counts.get_mut(i))
            {
                *slot += 1;
            }
        }
        Self { counts }
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Return true if there are no bins.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count for `symbol`, zero when out of range.
    pub fn get(&self, symbol: u64) -> u64 {
        usize::try_from(symbol)
            .ok()
            .and_then(|i| self.counts.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all bins.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Raw counts, indexed by symbol.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// `(symbol, count)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(symbol, &count)| (symbol as u64, count))
    }

    /// The symbol with the highest count; ties go to the smallest symbol.
    ///
    /// Returns `None` when every bin is empty.
    pub fn most_frequent(&self) -> Option<(u64, u64)> {
        self.iter()
            .filter(|&(_, count)| count > 0)
            .fold(None, |best, (symbol, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((symbol, count)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_counts() {
        let h = Histogram::from_symbols(4, [1, 3, 1, 0, 1]);
        assert_eq!(h.len(), 4);
        assert_eq!(h.counts(), &[1, 3, 0, 1]);
        assert_eq!(h.get(1), 3);
        assert_eq!(h.get(2), 0);
        assert_eq!(h.get(99), 0);
        assert_eq!(h.total(), 5);
        assert_eq!(h.most_frequent(), Some((1, 3)));
    }

    #[test]
    fn test_histogram_empty_bins_present() {
        let h = Histogram::from_symbols(8, std::iter::empty());
        assert_eq!(h.len(), 8);
        assert_eq!(h.total(), 0);
        assert_eq!(h.most_frequent(), None);
        assert!(h.iter().all(|(_, c)| c == 0));
    }

    #[test]
    fn test_histogram_tie_prefers_smaller_symbol() {
        let h = Histogram::from_symbols(4, [3, 2, 3, 2]);
        assert_eq!(h.most_frequent(), Some((2, 2)));
    }
}
