//! Time how long a single call takes.
//!
//! Each helper runs the given callable exactly once, synchronously, and pairs its result with the
//! wall-clock time the call took. See [`time_free_call`] and [`time_member_call`] for the two call
//! shapes, and [`time`] for the closure-based core they share.
//!
//! Arguments are passed as a tuple: `()`, `(a,)`, `(a, b)`, and so on. See [`Call`] and
//! [`CallOn`].

#![deny(clippy::pedantic, missing_debug_implementations, missing_docs, rust_2018_idioms)]

mod call;

pub use call::{Call, CallOn};

use std::time::{Duration, Instant};

/// Calls `f` and logs the time it took to do so at the Info level.
pub fn log<F, T>(msg: &str, f: F) -> T
where
  F: FnOnce() -> T,
{
  let (ret, elapsed) = time(f);
  log::info!("{msg}: {elapsed:?}");
  ret
}

/// Calls `f` and returns the result and the duration it took to do the call.
pub fn time<F, T>(f: F) -> (T, Duration)
where
  F: FnOnce() -> T,
{
  let start = Instant::now();
  let res = f();
  let elapsed = Instant::now().saturating_duration_since(start);
  (res, elapsed)
}

/// Like [`time`], but for a call that may fail.
///
/// # Errors
///
/// If `f` returns an error. The error is returned unchanged and the duration is dropped.
pub fn try_time<F, T, E>(f: F) -> Result<(T, Duration), E>
where
  F: FnOnce() -> Result<T, E>,
{
  let (res, elapsed) = time(f);
  res.map(|x| (x, elapsed))
}

/// Calls `func` with `args` and returns the result and the seconds it took to do the call.
///
/// ```
/// fn square(x: u64) -> u64 {
///   x * x
/// }
///
/// let (res, secs) = run_time::time_free_call(square, (7,));
/// assert_eq!(res, 49);
/// assert!(secs >= 0.0);
/// ```
pub fn time_free_call<F, Args>(func: F, args: Args) -> (F::Output, f64)
where
  F: Call<Args>,
{
  let (res, elapsed) = time(|| func.call_with(args));
  (res, elapsed.as_secs_f64())
}

/// Calls the method `func` on `recv` with `args` and returns the result and the seconds it took to
/// do the call.
///
/// `recv` is passed as the method's `self`, so it is `&x` for a `&self` method and `&mut x` for a
/// `&mut self` one.
///
/// ```
/// struct Bag(Vec<u8>);
///
/// impl Bag {
///   fn size(&self) -> usize {
///     self.0.len()
///   }
/// }
///
/// let bag = Bag(vec![1, 2, 3]);
/// let (res, secs) = run_time::time_member_call(Bag::size, &bag, ());
/// assert_eq!(res, 3);
/// assert!(secs >= 0.0);
/// ```
pub fn time_member_call<F, Recv, Args>(func: F, recv: Recv, args: Args) -> (F::Output, f64)
where
  F: CallOn<Recv, Args>,
{
  let (res, elapsed) = time(|| func.call_on(recv, args));
  (res, elapsed.as_secs_f64())
}

/// Like [`time_free_call`], but for a function that returns a `Result`.
///
/// # Errors
///
/// If `func` returns an error. The error is returned unchanged and no time is reported.
pub fn try_time_free_call<F, Args, T, E>(func: F, args: Args) -> Result<(T, f64), E>
where
  F: Call<Args, Output = Result<T, E>>,
{
  let (res, elapsed) = try_time(|| func.call_with(args))?;
  Ok((res, elapsed.as_secs_f64()))
}

/// Like [`time_member_call`], but for a method that returns a `Result`.
///
/// # Errors
///
/// If `func` returns an error. The error is returned unchanged and no time is reported.
pub fn try_time_member_call<F, Recv, Args, T, E>(
  func: F,
  recv: Recv,
  args: Args,
) -> Result<(T, f64), E>
where
  F: CallOn<Recv, Args, Output = Result<T, E>>,
{
  let (res, elapsed) = try_time(|| func.call_on(recv, args))?;
  Ok((res, elapsed.as_secs_f64()))
}
