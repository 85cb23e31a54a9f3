//! Error types
use core::{fmt, mem::transmute};

/// The macro to define [`ResultCode`].
macro_rules! define_result_code {
    (
        $( #[$meta:meta] )*
        pub enum ResultCode {
            $(
                $( #[$vmeta:meta] )*
                $vname:ident = $vd:expr
            ),* $(,)*
        }
    ) => {
        $( #[$meta] )*
        pub enum ResultCode {
            $(
                $( #[$vmeta] )*
                $vname = $vd
            ),*
        }

        impl ResultCode {
            /// Get the short name of the result code.
            ///
            /// # Examples
            ///
            /// ```
            /// use slice_heap::ResultCode;
            /// assert_eq!(ResultCode::StorageTooShort.as_str(), "StorageTooShort");
            /// ```
            pub fn as_str(self) -> &'static str {
                match self {
                    $(
                        Self::$vname => stringify!($vname),
                    )*
                }
            }
        }

        impl fmt::Debug for ResultCode {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl fmt::Display for ResultCode {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_result_code! {
    /// All result codes (including success) that heap operations can produce.
    ///
    /// Each operation-specific error type ([`CreateError`], [`RemoveError`],
    /// [`Full`]) converts into this type for free, which is convenient when a
    /// single status value has to be stored or handed across a C-like
    /// boundary.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    #[repr(i8)]
    pub enum ResultCode {
        /// The operation was successful.
        Success = 0,
        /// The heap has no live elements.
        Empty = -1,
        /// The heap has no spare capacity.
        Full = -2,
        /// The specified index does not refer to a live element.
        OutOfRange = -3,
        /// The initial element count exceeds the capacity.
        BadLen = -4,
        /// The backing storage is shorter than the requested capacity.
        StorageTooShort = -5,
    }
}

impl ResultCode {
    /// Get a flag indicating whether the code represents a failure.
    ///
    /// Failure codes have negative values.
    #[inline]
    pub fn is_err(self) -> bool {
        (self as i8) < 0
    }

    /// Get a flag indicating whether the code represents a success.
    ///
    /// Success codes have non-negative values.
    #[inline]
    pub fn is_ok(self) -> bool {
        !self.is_err()
    }
}

macro_rules! define_error {
    (
        mod $mod_name:ident {}
        $( #[$meta:meta] )*
        $vis:vis enum $name:ident {
            $(
                $( #[$vmeta:meta] )*
                $vname:ident
            ),* $(,)*
        }
    ) => {
        $( #[$meta] )*
        ///
        /// See [`ResultCode`] for all result codes.
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(i8)]
        $vis enum $name {
            $(
                $( #[$vmeta] )*
                // Use the same discriminants as `ResultCode` for cost-free
                // conversion
                $vname = ResultCode::$vname as i8
            ),*
        }

        impl $name {
            /// Get the short name of the error.
            #[inline]
            pub fn as_str(self) -> &'static str {
                ResultCode::from(self).as_str()
            }
        }

        impl fmt::Debug for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl<T> From<Result<T, $name>> for ResultCode {
            #[inline]
            fn from(x: Result<T, $name>) -> Self {
                match x {
                    Ok(_) => Self::Success,
                    Err(e) => Self::from(e),
                }
            }
        }

        impl From<$name> for ResultCode {
            #[inline]
            fn from(x: $name) -> Self {
                // Safety: `ResultCode` and `$name` has the same representation
                //         type, and the representation of `ResultCode` is a
                //         superset of `x`.
                unsafe { transmute(x) }
            }
        }

        #[cfg(test)]
        mod $mod_name {
            use super::*;

            #[test]
            fn to_result_code() {
                $(
                    assert_eq!(
                        ResultCode::$vname,
                        ResultCode::from($name::$vname),
                    );
                )*
            }

            #[test]
            fn result_to_result_code() {
                $(
                    assert_eq!(
                        ResultCode::$vname,
                        ResultCode::from(Result::<(), _>::Err($name::$vname)),
                    );
                    assert!(ResultCode::from($name::$vname).is_err());
                )*
                assert_eq!(
                    ResultCode::Success,
                    ResultCode::from(Result::<(), $name>::Ok(())),
                );
            }
        }
    };
}

define_error! {
    mod create_error {}
    /// Error type for [`Heap::new`].
    ///
    /// [`Heap::new`]: crate::Heap::new
    pub enum CreateError {
        /// The initial element count is greater than the capacity.
        BadLen,
        /// The storage has fewer slots than the requested capacity.
        StorageTooShort,
    }
}

define_error! {
    mod remove_error {}
    /// Error type for [`Heap::remove`] and [`Heap::remove_at`].
    ///
    /// [`Heap::remove`]: crate::Heap::remove
    /// [`Heap::remove_at`]: crate::Heap::remove_at
    pub enum RemoveError {
        /// The heap is empty.
        Empty,
        /// The index is not less than [`Heap::len`].
        ///
        /// [`Heap::len`]: crate::Heap::len
        OutOfRange,
    }
}

/// Error type for [`Heap::add`]. Carries the element that could not be added.
///
/// [`Heap::add`]: crate::Heap::add
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the element that could not be added.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Full(..)")
    }
}

impl<T> fmt::Display for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("heap is full")
    }
}

impl<T> From<Full<T>> for ResultCode {
    #[inline]
    fn from(_: Full<T>) -> Self {
        Self::Full
    }
}

impl<T, U> From<Result<U, Full<T>>> for ResultCode {
    #[inline]
    fn from(x: Result<U, Full<T>>) -> Self {
        match x {
            Ok(_) => Self::Success,
            Err(e) => Self::from(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_code_sign() {
        assert!(ResultCode::Success.is_ok());
        for code in [
            ResultCode::Empty,
            ResultCode::Full,
            ResultCode::OutOfRange,
            ResultCode::BadLen,
            ResultCode::StorageTooShort,
        ] {
            assert!(code.is_err(), "{code:?}");
        }
    }

    #[test]
    fn full_to_result_code() {
        assert_eq!(ResultCode::from(Full(42u32)), ResultCode::Full);
        assert_eq!(
            ResultCode::from(Result::<usize, _>::Err(Full("x"))),
            ResultCode::Full
        );
        assert_eq!(
            ResultCode::from(Result::<usize, Full<()>>::Ok(3)),
            ResultCode::Success
        );
        assert_eq!(Full(7).into_inner(), 7);
    }

    #[test]
    fn display() {
        assert_eq!(RemoveError::Empty.to_string(), "Empty");
        assert_eq!(CreateError::BadLen.to_string(), "BadLen");
        assert_eq!(Full(1).to_string(), "heap is full");
    }
}
