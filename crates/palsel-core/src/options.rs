//! Selection options and configuration.

use crate::constants::DEFAULT_PARALLEL_THRESHOLD;

/// Options for palindrome selection.
#[derive(Debug, Clone)]
pub struct Options {
    /// Worker threads for the concurrent selector (0 = global rayon pool).
    pub threads: usize,
    /// Inputs shorter than this are filtered on the calling thread.
    pub parallel_threshold: usize,
    /// Sort concurrent output ascending before presenting it.
    pub sort_output: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            threads: 0,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            sort_output: false,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.parallel_threshold == 0 {
            self.parallel_threshold = DEFAULT_PARALLEL_THRESHOLD;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(opts.threads, 0);
        assert_eq!(opts.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert!(!opts.sort_output);
    }

    #[test]
    fn normalize_zero_threshold() {
        let opts = Options {
            parallel_threshold: 0,
            ..Default::default()
        };
        assert_eq!(opts.normalize().parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn normalize_keeps_explicit_values() {
        let opts = Options {
            threads: 3,
            parallel_threshold: 16,
            sort_output: true,
        }
        .normalize();
        assert_eq!(opts.threads, 3);
        assert_eq!(opts.parallel_threshold, 16);
        assert!(opts.sort_output);
    }
}
