//! Runtime currying against a declared arity.
//!
//! [`Curry`] accumulates arguments until their count reaches the arity it was
//! built with, then invokes the wrapped function with all of them. Unlike the
//! `curry!` macro, which fixes one argument per call, `Curry::apply` accepts
//! any number of arguments per step, so `f(a)(b, c)`, `f(a, b)(c)` and
//! `f(a, b, c)` all reach the same call.
//!
//! Supplying more arguments than remain is rejected with
//! [`CurryError::OverApplied`] and leaves the receiver usable.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

/// Argument buffer; most curried functions take a handful of arguments.
type Arguments<A> = SmallVec<[A; 4]>;

/// A function of fixed arity awaiting the rest of its arguments.
///
/// The function receives the accumulated arguments as a slice, in the order
/// they were supplied. Applying arguments never mutates a `Curry`; each
/// partial application is a new value sharing the function through an
/// `Rc`, so a partial application may be reused with different continuations.
///
/// # Examples
///
/// ```
/// use fpkit::compose::{Application, Curry};
///
/// let volume = Curry::new(3, |sides: &[f64]| sides.iter().product::<f64>());
///
/// let Ok(Application::Partial(base)) = volume.apply([2.0, 3.0]) else {
///     panic!("expected a partial application");
/// };
///
/// assert_eq!(base.remaining(), 1);
/// assert_eq!(base.apply([4.0]).ok().and_then(Application::complete), Some(24.0));
/// assert_eq!(base.apply([5.0]).ok().and_then(Application::complete), Some(30.0));
/// ```
pub struct Curry<A, R> {
    function: Rc<dyn Fn(&[A]) -> R>,
    arity: usize,
    arguments: Arguments<A>,
}

/// The outcome of applying arguments to a [`Curry`].
pub enum Application<A, R> {
    /// The arity was reached and the function returned this value.
    Complete(R),
    /// More arguments are needed.
    Partial(Curry<A, R>),
}

/// Errors raised by [`Curry::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurryError {
    /// More arguments were supplied than the function declares.
    OverApplied {
        /// The declared arity of the curried function.
        arity: usize,
        /// Arguments counted before the application was rejected. Counting
        /// stops at the first surplus argument, so this is `arity + 1`.
        supplied: usize,
    },
}

impl fmt::Display for CurryError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverApplied { arity, supplied } => write!(
                formatter,
                "curried function of arity {arity} was applied to {supplied} arguments"
            ),
        }
    }
}

impl std::error::Error for CurryError {}

impl<A, R> Curry<A, R> {
    /// Wraps `function` so that it runs once `arity` arguments have been
    /// supplied.
    ///
    /// An arity of zero completes on the first application with no
    /// arguments.
    pub fn new<F>(arity: usize, function: F) -> Self
    where
        F: Fn(&[A]) -> R + 'static,
    {
        Self {
            function: Rc::new(function),
            arity,
            arguments: SmallVec::new(),
        }
    }

    /// The declared number of arguments.
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// How many arguments have been accumulated so far.
    pub fn supplied(&self) -> usize {
        self.arguments.len()
    }

    /// How many arguments are still missing.
    pub fn remaining(&self) -> usize {
        self.arity - self.arguments.len()
    }
}

impl<A: Clone, R> Curry<A, R> {
    /// Appends `arguments` to those already accumulated.
    ///
    /// Returns [`Application::Complete`] with the function's result once the
    /// arity is reached, [`Application::Partial`] while arguments are still
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::OverApplied`] if the accumulated count would
    /// exceed the arity. `self` is unaffected, and `arguments` is not read
    /// past the first surplus element.
    ///
    /// # Examples
    ///
    /// ```
    /// use fpkit::compose::{Curry, CurryError};
    ///
    /// let pair = Curry::new(2, |items: &[char]| (items[0], items[1]));
    ///
    /// assert_eq!(
    ///     pair.apply(['a', 'b', 'c']).err(),
    ///     Some(CurryError::OverApplied { arity: 2, supplied: 3 })
    /// );
    /// ```
    pub fn apply<I>(&self, arguments: I) -> Result<Application<A, R>, CurryError>
    where
        I: IntoIterator<Item = A>,
    {
        let mut accumulated = self.arguments.clone();
        accumulated.extend(arguments.into_iter().take(self.remaining() + 1));
        let supplied = accumulated.len();

        match supplied.cmp(&self.arity) {
            Ordering::Less => {
                #[cfg(feature = "tracing")]
                tracing::trace!(arity = self.arity, supplied, "curried function still partial");
                Ok(Application::Partial(Self {
                    function: Rc::clone(&self.function),
                    arity: self.arity,
                    arguments: accumulated,
                }))
            }
            Ordering::Equal => {
                #[cfg(feature = "tracing")]
                tracing::trace!(arity = self.arity, "curried function saturated");
                Ok(Application::Complete((self.function)(&accumulated)))
            }
            Ordering::Greater => {
                #[cfg(feature = "tracing")]
                tracing::debug!(arity = self.arity, supplied, "curried function over-applied");
                Err(CurryError::OverApplied {
                    arity: self.arity,
                    supplied,
                })
            }
        }
    }

    /// Applies a single argument.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::OverApplied`] if no argument is missing.
    pub fn apply_one(&self, argument: A) -> Result<Application<A, R>, CurryError> {
        self.apply(std::iter::once(argument))
    }
}

impl<A: Clone, R> Clone for Curry<A, R> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            arity: self.arity,
            arguments: self.arguments.clone(),
        }
    }
}

impl<A, R> fmt::Debug for Curry<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curry")
            .field("arity", &self.arity)
            .field("supplied", &self.arguments.len())
            .finish_non_exhaustive()
    }
}

impl<A, R> Application<A, R> {
    /// Returns `true` if the function has run.
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// The function's result, if the arity was reached.
    pub fn complete(self) -> Option<R> {
        match self {
            Self::Complete(result) => Some(result),
            Self::Partial(_) => None,
        }
    }

    /// The pending partial application, if arguments are still missing.
    pub fn partial(self) -> Option<Curry<A, R>> {
        match self {
            Self::Complete(_) => None,
            Self::Partial(curry) => Some(curry),
        }
    }
}

impl<A, R: fmt::Debug> fmt::Debug for Application<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete(result) => formatter.debug_tuple("Complete").field(result).finish(),
            Self::Partial(curry) => formatter.debug_tuple("Partial").field(curry).finish(),
        }
    }
}

// Rc-shared function: a Curry never crosses threads.
static_assertions::assert_not_impl_any!(Curry<i32, i32>: Send, Sync);
