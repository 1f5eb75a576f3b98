//! Fixtures and assertions shared by the tests.

use std::cell::Cell;
use std::fmt;
use std::time::Duration;

/// How far above the requested delay a measured duration may land by default.
pub(crate) const SLACK: Duration = Duration::from_millis(100);

/// Asserts `secs` is a real duration of at least `at_least`, and not much more.
#[track_caller]
pub(crate) fn check_secs(secs: f64, at_least: Duration) {
  check_secs_within(secs, at_least, SLACK);
}

/// Asserts `secs` is a real duration in `[at_least, at_least + slack)`.
#[track_caller]
pub(crate) fn check_secs_within(secs: f64, at_least: Duration, slack: Duration) {
  assert!(secs.is_finite(), "{secs} is not finite");
  let lo = at_least.as_secs_f64();
  assert!(secs >= lo, "{secs}s is shorter than {lo}s");
  let hi = (at_least + slack).as_secs_f64();
  assert!(secs < hi, "{secs}s is not shorter than {hi}s");
}

pub(crate) fn square(x: u64) -> u64 {
  x * x
}

pub(crate) fn nap(d: Duration) -> Duration {
  std::thread::sleep(d);
  d
}

/// A small container, for timing methods on.
#[derive(Debug, Default)]
pub(crate) struct Bag(Vec<u32>);

impl Bag {
  pub(crate) fn new<I>(xs: I) -> Self
  where
    I: IntoIterator<Item = u32>,
  {
    Self(xs.into_iter().collect())
  }

  pub(crate) fn size(&self) -> usize {
    self.0.len()
  }

  pub(crate) fn push(&mut self, x: u32) -> usize {
    self.0.push(x);
    self.0.len()
  }

  pub(crate) fn get(&self, idx: usize) -> Result<u32, OutOfBounds> {
    self.0.get(idx).copied().ok_or(OutOfBounds { idx, len: self.0.len() })
  }

  pub(crate) fn sum_range(&self, start: usize, end: usize) -> u32 {
    self.0[start..end].iter().sum()
  }

  pub(crate) fn into_sorted(mut self) -> Vec<u32> {
    self.0.sort_unstable();
    self.0
  }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct OutOfBounds {
  pub(crate) idx: usize,
  pub(crate) len: usize,
}

impl fmt::Display for OutOfBounds {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "index {} out of bounds for length {}", self.idx, self.len)
  }
}

/// Counts how many times it was called.
#[derive(Debug, Default)]
pub(crate) struct Tally(Cell<u32>);

impl Tally {
  pub(crate) fn bump(&self) -> u32 {
    let n = self.0.get() + 1;
    self.0.set(n);
    n
  }

  pub(crate) fn count(&self) -> u32 {
    self.0.get()
  }
}
