//! Roots
//!
//! A root is the record a resolution call fills in. Its fields name the
//! requested types; the resolver seeds its worklist from them and assembles
//! the root from the resolved values.
//!
//! Tuples of up to eight [`Dependency`] types are roots, and the [`root!`]
//! macro declares a named struct that is one:
//!
//! ```ignore
//! wireup_application::root! {
//!     pub struct App {
//!         pub foo: Arc<Foo>,
//!         pub greeters: Vec<Arc<dyn Greeter>>,
//!     }
//! }
//!
//! let app: App = container.resolve()?;
//! let (foo, bar): (Arc<Foo>, Arc<Bar>) = container.resolve()?;
//! ```
//!
//! [`root!`]: crate::root

use wireup_domain::{Result, TypeDescriptor};

use super::dependency::{Argument, ArgumentList, Dependency};

/// Record populated by a resolution call
pub trait Root: Sized {
    /// Requested types, one per field, in field order
    fn requests() -> Vec<TypeDescriptor>;

    /// Build the record from one bound argument per request
    fn assemble(arguments: Vec<Argument>) -> Result<Self>;
}

macro_rules! impl_tuple_root {
    ($($field:ident),+) => {
        impl<$($field: Dependency),+> Root for ($($field,)+) {
            fn requests() -> Vec<TypeDescriptor> {
                vec![$($field::descriptor()),+]
            }

            fn assemble(arguments: Vec<Argument>) -> Result<Self> {
                let mut arguments = ArgumentList::new(arguments);
                Ok(($(arguments.take::<$field>()?,)+))
            }
        }
    };
}

impl_tuple_root!(F1);
impl_tuple_root!(F1, F2);
impl_tuple_root!(F1, F2, F3);
impl_tuple_root!(F1, F2, F3, F4);
impl_tuple_root!(F1, F2, F3, F4, F5);
impl_tuple_root!(F1, F2, F3, F4, F5, F6);
impl_tuple_root!(F1, F2, F3, F4, F5, F6, F7);
impl_tuple_root!(F1, F2, F3, F4, F5, F6, F7, F8);

/// Declare a struct whose fields are dependencies and implement [`Root`] for it
///
/// [`Root`]: crate::injection::Root
#[macro_export]
macro_rules! root {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::injection::Root for $name {
            fn requests() -> ::std::vec::Vec<$crate::wireup_domain::TypeDescriptor> {
                ::std::vec![
                    $(<$ty as $crate::injection::Dependency>::descriptor()),*
                ]
            }

            #[allow(unused_mut)]
            fn assemble(
                arguments: ::std::vec::Vec<$crate::injection::Argument>,
            ) -> $crate::wireup_domain::Result<Self> {
                let mut arguments = $crate::injection::ArgumentList::new(arguments);
                ::std::result::Result::Ok(Self {
                    $(
                        $field: arguments.take::<$ty>()?,
                    )*
                })
            }
        }
    };
}

/// Declare capability implementations on a registry or container
///
/// ```ignore
/// capability!(container, dyn Greeter => English, Spanish)?;
/// ```
///
/// Expands to one `implements` call per implementor with the unsizing cast
/// spelled out, and evaluates to the first error, if any.
#[macro_export]
macro_rules! capability {
    ($target:expr, $capability:ty => $($implementor:ty),+ $(,)?) => {{
        let result: $crate::wireup_domain::Result<()> = ::std::result::Result::Ok(());
        $(
            let result = result.and_then(|()| {
                $target
                    .implements::<$capability, $implementor, _>(
                        |value: ::std::sync::Arc<$implementor>| -> ::std::sync::Arc<$capability> {
                            value
                        },
                    )
                    .map(|_| ())
            });
        )+
        result
    }};
}
