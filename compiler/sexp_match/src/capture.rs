//! Typed captures.
//!
//! A captured value is always a `&Expr` tagged with its runtime [`Kind`].
//! Callback parameters declare which kind they accept through
//! [`FromCapture::SLOT`]; the binder checks the kind when the wildcard is
//! captured and converts to the parameter type once the whole pattern has
//! matched.
//!
//! | parameter type         | accepts      |
//! |------------------------|--------------|
//! | `&Expr`, `Expr`        | any node     |
//! | `&str`, `String`       | atoms        |
//! | `i64`, `i32`           | integers     |
//! | `&[Expr]`, `Vec<Expr>` | lists        |

use sexp_ir::{Expr, Kind};

/// What a callback parameter accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Any node, whatever its kind.
    Any,
    /// Only nodes of this kind.
    Exactly(Kind),
}

impl Slot {
    pub fn accepts(self, kind: Kind) -> bool {
        match self {
            Slot::Any => true,
            Slot::Exactly(expected) => expected == kind,
        }
    }
}

/// A type a wildcard capture can be converted into.
pub trait FromCapture<'e>: Sized {
    /// Kind check applied when the wildcard is captured.
    const SLOT: Slot;

    /// Convert a capture that already passed the [`Self::SLOT`] check.
    ///
    /// Returning `None` abandons the match attempt.
    fn from_capture(expr: &'e Expr) -> Option<Self>;
}

impl<'e> FromCapture<'e> for &'e Expr {
    const SLOT: Slot = Slot::Any;

    fn from_capture(expr: &'e Expr) -> Option<Self> {
        Some(expr)
    }
}

impl FromCapture<'_> for Expr {
    const SLOT: Slot = Slot::Any;

    fn from_capture(expr: &Expr) -> Option<Self> {
        Some(expr.clone())
    }
}

impl<'e> FromCapture<'e> for &'e str {
    const SLOT: Slot = Slot::Exactly(Kind::Atom);

    fn from_capture(expr: &'e Expr) -> Option<Self> {
        expr.as_atom()
    }
}

impl FromCapture<'_> for String {
    const SLOT: Slot = Slot::Exactly(Kind::Atom);

    fn from_capture(expr: &Expr) -> Option<Self> {
        expr.as_atom().map(str::to_owned)
    }
}

impl FromCapture<'_> for i64 {
    const SLOT: Slot = Slot::Exactly(Kind::Int);

    fn from_capture(expr: &Expr) -> Option<Self> {
        expr.as_int()
    }
}

impl FromCapture<'_> for i32 {
    const SLOT: Slot = Slot::Exactly(Kind::Int);

    fn from_capture(expr: &Expr) -> Option<Self> {
        expr.as_int().and_then(|value| i32::try_from(value).ok())
    }
}

impl<'e> FromCapture<'e> for &'e [Expr] {
    const SLOT: Slot = Slot::Exactly(Kind::List);

    fn from_capture(expr: &'e Expr) -> Option<Self> {
        expr.as_list()
    }
}

impl FromCapture<'_> for Vec<Expr> {
    const SLOT: Slot = Slot::Exactly(Kind::List);

    fn from_capture(expr: &Expr) -> Option<Self> {
        expr.as_list().map(<[Expr]>::to_vec)
    }
}

/// A callback that can receive the captures of a match.
///
/// Implemented for every `FnMut` of up to eight parameters whose types
/// implement [`FromCapture`]. `Args` is the parameter tuple; it only exists
/// to keep the per-arity implementations apart and is always inferred.
pub trait Callback<'e, Args> {
    /// Return type of the callback.
    type Output;

    /// One entry per parameter, in declaration order.
    const SLOTS: &'static [Slot];

    /// Convert `captures` and invoke the callback.
    ///
    /// `captures` must hold exactly one value per slot. On a refused
    /// conversion the callback is not invoked and the index of the refusing
    /// parameter is returned.
    fn call(&mut self, captures: &[&'e Expr]) -> Result<Self::Output, usize>;
}

macro_rules! impl_callback {
    ($($arg:ident),*) => {
        impl<'e, Func, Out, $($arg),*> Callback<'e, ($($arg,)*)> for Func
        where
            Func: FnMut($($arg),*) -> Out,
            $($arg: FromCapture<'e>,)*
        {
            type Output = Out;

            const SLOTS: &'static [Slot] = &[$(<$arg as FromCapture<'e>>::SLOT),*];

            #[allow(non_snake_case, unused_mut, unused_variables, unused_assignments)]
            fn call(&mut self, captures: &[&'e Expr]) -> Result<Out, usize> {
                let mut slot = 0;
                $(
                    let $arg = captures
                        .get(slot)
                        .copied()
                        .and_then(<$arg as FromCapture<'e>>::from_capture)
                        .ok_or(slot)?;
                    slot += 1;
                )*
                Ok((self)($($arg),*))
            }
        }
    };
}

impl_callback!();
impl_callback!(A);
impl_callback!(A, B);
impl_callback!(A, B, C);
impl_callback!(A, B, C, D);
impl_callback!(A, B, C, D, E);
impl_callback!(A, B, C, D, E, F);
impl_callback!(A, B, C, D, E, F, G);
impl_callback!(A, B, C, D, E, F, G, H);
