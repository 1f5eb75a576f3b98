//! Calling functions with their arguments packed into a tuple.


/// A function that can be called with the argument tuple `Args`.
///
/// Implemented for every `FnOnce` taking up to eight arguments.
pub trait Call<Args> {
  /// What the function returns.
  type Output;

  /// Calls the function once with `args`.
  fn call_with(self, args: Args) -> Self::Output;
}

/// A method that can be called on a receiver of type `Recv` with the argument tuple `Args`.
///
/// `Recv` is the type of the method's `self`, usually `&R` or `&mut R`. Implemented for every
/// `FnOnce` taking the receiver plus up to eight arguments.
pub trait CallOn<Recv, Args> {
  /// What the method returns.
  type Output;

  /// Calls the method once on `recv` with `args`.
  fn call_on(self, recv: Recv, args: Args) -> Self::Output;
}

macro_rules! impl_call {
  ($($ty:ident $arg:ident),*) => {
    impl<F, T, $($ty,)*> Call<($($ty,)*)> for F
    where
      F: FnOnce($($ty),*) -> T,
    {
      type Output = T;

      fn call_with(self, ($($arg,)*): ($($ty,)*)) -> T {
        self($($arg),*)
      }
    }

    impl<F, Recv, T, $($ty,)*> CallOn<Recv, ($($ty,)*)> for F
    where
      F: FnOnce(Recv, $($ty),*) -> T,
    {
      type Output = T;

      fn call_on(self, recv: Recv, ($($arg,)*): ($($ty,)*)) -> T {
        self(recv, $($arg),*)
      }
    }
  };
}

impl_call!();
impl_call!(A1 a1);
impl_call!(A1 a1, A2 a2);
impl_call!(A1 a1, A2 a2, A3 a3);
impl_call!(A1 a1, A2 a2, A3 a3, A4 a4);
impl_call!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
impl_call!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
impl_call!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7);
impl_call!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8);
