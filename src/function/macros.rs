//! Shared boilerplate for the callable wrappers.

/// Implements the empty-state constructors, `Clone`, `Default` and `Debug`
/// for a wrapper whose only field is `function: Option<Arc<...>>`.
macro_rules! impl_callable_wrapper {
    ($name:ident < $($param:ident),+ >) => {
        impl<$($param),+> $name<$($param),+> {
            /// Creates a wrapper in the empty state.
            #[inline]
            pub const fn empty() -> Self {
                Self { function: None }
            }

            /// Returns `true` if the wrapper holds no behavior.
            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.function.is_none()
            }
        }

        impl<$($param),+> Clone for $name<$($param),+> {
            fn clone(&self) -> Self {
                Self {
                    function: self.function.clone(),
                }
            }
        }

        impl<$($param),+> Default for $name<$($param),+> {
            fn default() -> Self {
                Self::empty()
            }
        }

        impl<$($param),+> ::std::fmt::Debug for $name<$($param),+> {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                formatter
                    .debug_struct(stringify!($name))
                    .field("empty", &self.is_empty())
                    .finish()
            }
        }
    };
}

pub(crate) use impl_callable_wrapper;
