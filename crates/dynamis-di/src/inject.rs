//! Parameter resolution and callable injection

use crate::errors::DiResult;
use crate::library::DependencyLibrary;
use std::any::Any;

/// Resolution of a single callable parameter from the library.
///
/// `&T` is a required parameter: resolution fails when `T` is not
/// registered. `Option<&T>` is optional and resolves to `None` instead —
/// the explicit rendition of a parameter with a default.
pub trait FromLibrary<'a>: Sized {
	fn from_library(library: &'a DependencyLibrary) -> DiResult<Self>;
}

impl<'a, T: Any> FromLibrary<'a> for &'a T {
	fn from_library(library: &'a DependencyLibrary) -> DiResult<Self> {
		library.get::<T>()
	}
}

impl<'a, T: Any> FromLibrary<'a> for Option<&'a T> {
	fn from_library(library: &'a DependencyLibrary) -> DiResult<Self> {
		Ok(library.get::<T>().ok())
	}
}

/// A callable whose parameters can all be resolved from a
/// [`DependencyLibrary`].
///
/// Implemented for `FnOnce` of zero to eight parameters, each
/// implementing [`FromLibrary`]. Used through
/// [`DependencyLibrary::inject`].
pub trait InjectFn<'a, Args> {
	type Output;

	fn invoke(self, library: &'a DependencyLibrary) -> DiResult<Self::Output>;
}

macro_rules! impl_inject_fn {
	($($arg:ident),*) => {
		impl<'a, Fun, Out $(, $arg)*> InjectFn<'a, ($($arg,)*)> for Fun
		where
			Fun: FnOnce($($arg),*) -> Out,
			$($arg: FromLibrary<'a>,)*
		{
			type Output = Out;

			#[allow(unused_variables)]
			fn invoke(self, library: &'a DependencyLibrary) -> DiResult<Self::Output> {
				Ok((self)($($arg::from_library(library)?),*))
			}
		}
	};
}

impl_inject_fn!();
impl_inject_fn!(A1);
impl_inject_fn!(A1, A2);
impl_inject_fn!(A1, A2, A3);
impl_inject_fn!(A1, A2, A3, A4);
impl_inject_fn!(A1, A2, A3, A4, A5);
impl_inject_fn!(A1, A2, A3, A4, A5, A6);
impl_inject_fn!(A1, A2, A3, A4, A5, A6, A7);
impl_inject_fn!(A1, A2, A3, A4, A5, A6, A7, A8);
