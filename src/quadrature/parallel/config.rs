//! Configuration for parallel integration.

/// How segments are assigned when the segment count is not a multiple of the
/// thread count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemainderPolicy {
    /// Give one extra segment to each of the first `n % tn` workers.
    #[default]
    Distribute,
    /// Refuse to integrate.
    Reject,
    /// Give every worker `n / tn` segments and drop the remainder.
    Truncate,
}

impl std::fmt::Display for RemainderPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemainderPolicy::Distribute => write!(f, "distribute"),
            RemainderPolicy::Reject => write!(f, "reject"),
            RemainderPolicy::Truncate => write!(f, "truncate"),
        }
    }
}

impl std::str::FromStr for RemainderPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "distribute" | "spread" => Ok(RemainderPolicy::Distribute),
            "reject" | "strict" => Ok(RemainderPolicy::Reject),
            "truncate" | "drop" => Ok(RemainderPolicy::Truncate),
            _ => Err(format!(
                "Unknown remainder policy: '{}'. Valid options: distribute, reject, truncate",
                s
            )),
        }
    }
}

/// Configuration for parallel integration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Number of worker threads to spawn. Zero means nothing is computed.
    pub thread_count: usize,
    /// What to do with segments that do not divide evenly.
    pub remainder: RemainderPolicy,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            thread_count: 1,
            remainder: RemainderPolicy::default(),
        }
    }
}

impl ParallelConfig {
    /// Set the number of worker threads. Not capped by hardware parallelism.
    pub fn with_threads(mut self, thread_count: usize) -> Self {
        self.thread_count = thread_count;
        self
    }

    /// Set the remainder policy.
    pub fn with_remainder(mut self, remainder: RemainderPolicy) -> Self {
        self.remainder = remainder;
        self
    }
}
