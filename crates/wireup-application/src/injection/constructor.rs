//! Constructors
//!
//! Any `Fn(A1, .., An) -> R` whose parameters are [`Dependency`] types is a
//! constructor for `R`. Its parameter list and produced type come from its
//! static signature, so a typed constructor can never be "not invocable" or
//! declare the wrong number of outputs.
//!
//! [`ConstructorSpec`] is the dynamic counterpart for constructors whose shape
//! is assembled at runtime; the registry validates it on registration.

use std::sync::Arc;

use wireup_domain::constants::ANONYMOUS_CONSTRUCTOR;
use wireup_domain::{Instance, Result, TypeDescriptor};

use super::dependency::{Argument, ArgumentList, Dependency};

/// Type-erased constructor body
pub type Invoker = Box<dyn Fn(Vec<Argument>) -> Result<Instance> + Send + Sync>;

/// Shape and body of a constructor before registration
pub struct ConstructorSpec {
    pub(crate) name: String,
    pub(crate) parameters: Vec<TypeDescriptor>,
    pub(crate) produces: Option<TypeDescriptor>,
    pub(crate) invoker: Option<Invoker>,
}

impl ConstructorSpec {
    /// Start an empty spec with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            produces: None,
            invoker: None,
        }
    }

    /// Replace the name used in logs, reports and errors
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Append a parameter
    pub fn param(mut self, parameter: TypeDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Set the produced type
    pub fn produces(mut self, produces: TypeDescriptor) -> Self {
        self.produces = Some(produces);
        self
    }

    /// Set the body. It receives one argument per parameter, in order.
    pub fn invoker<F>(mut self, invoker: F) -> Self
    where
        F: Fn(Vec<Argument>) -> Result<Instance> + Send + Sync + 'static,
    {
        self.invoker = Some(Box::new(invoker));
        self
    }

    /// Name of the constructor
    pub fn name(&self) -> &str {
        if self.name.is_empty() {
            ANONYMOUS_CONSTRUCTOR
        } else {
            &self.name
        }
    }
}

impl std::fmt::Debug for ConstructorSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstructorSpec")
            .field("name", &self.name())
            .field("parameters", &self.parameters)
            .field("produces", &self.produces)
            .field("invocable", &self.invoker.is_some())
            .finish()
    }
}

/// Conversion of a typed callable into a [`ConstructorSpec`].
///
/// `Args` is the tuple of parameter types; it only exists to keep the
/// implementations for different arities apart.
pub trait IntoConstructor<Args>: Send + Sync + 'static {
    /// Describe the callable
    fn into_spec(self) -> ConstructorSpec;
}

impl IntoConstructor<ConstructorSpec> for ConstructorSpec {
    fn into_spec(self) -> ConstructorSpec {
        self
    }
}

macro_rules! impl_into_constructor {
    ($($param:ident),*) => {
        impl<Func, Output, $($param,)*> IntoConstructor<($($param,)*)> for Func
        where
            Func: Fn($($param),*) -> Output + Send + Sync + 'static,
            Output: Send + Sync + 'static,
            $($param: Dependency,)*
        {
            #[allow(non_snake_case, unused_mut, unused_variables)]
            fn into_spec(self) -> ConstructorSpec {
                let invoker = move |arguments: Vec<Argument>| -> Result<Instance> {
                    let mut arguments = ArgumentList::new(arguments);
                    $(
                        let $param = arguments.take::<$param>()?;
                    )*
                    Ok(Instance::new(Arc::new((self)($($param),*))))
                };

                ConstructorSpec::new(std::any::type_name::<Func>())
                    $(.param($param::descriptor()))*
                    .produces(TypeDescriptor::of::<Output>())
                    .invoker(invoker)
            }
        }
    };
}

impl_into_constructor!();
impl_into_constructor!(A1);
impl_into_constructor!(A1, A2);
impl_into_constructor!(A1, A2, A3);
impl_into_constructor!(A1, A2, A3, A4);
impl_into_constructor!(A1, A2, A3, A4, A5);
impl_into_constructor!(A1, A2, A3, A4, A5, A6);
impl_into_constructor!(A1, A2, A3, A4, A5, A6, A7);
impl_into_constructor!(A1, A2, A3, A4, A5, A6, A7, A8);
