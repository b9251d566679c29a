use std::any::type_name;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::error::Error;
use std::rc::Rc;
use std::sync::Arc;

use super::{Identity, Value, ValueKind};

/// Turns a value into its reflected [`Value`] form.
///
/// Implemented for the standard scalar, text, collection and smart-pointer
/// types. User structs get an implementation through
/// [`reflect_struct!`](crate::reflect_struct).
pub trait Reflect {
    fn reflect(&self) -> Value;

    /// Reflects `Option<Self>`.
    ///
    /// By default an option behaves as a pointer to `Self`. Types with a nil
    /// slot of their own (slices, maps, pointers, funcs, channels) override
    /// this so that `None` maps onto that slot.
    fn reflect_option(value: Option<&Self>) -> Value
    where
        Self: Sized,
    {
        Value::new(
            type_name::<Option<Self>>(),
            ValueKind::Ptr(value.map(|v| Box::new(v.reflect()))),
        )
    }
}

/// The untyped absent value, for comparisons against "nothing at all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nil;

impl Reflect for Nil {
    fn reflect(&self) -> Value {
        Value::nil()
    }
}

impl Reflect for Value {
    fn reflect(&self) -> Value {
        self.clone()
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn reflect(&self) -> Value {
        T::reflect_option(self.as_ref())
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn reflect(&self) -> Value {
        (**self).reflect()
    }
}

impl<T: Reflect + ?Sized> Reflect for &mut T {
    fn reflect(&self) -> Value {
        (**self).reflect()
    }
}

//
// Scalars
//

macro_rules! impl_reflect_scalar {
    ($variant:ident as $wide:ty: $($t:ty),*) => {
        $(
            impl Reflect for $t {
                fn reflect(&self) -> Value {
                    Value::new(type_name::<$t>(), ValueKind::$variant(*self as $wide))
                }
            }
        )*
    };
}

impl_reflect_scalar!(Int as i128: i8, i16, i32, i64, i128, isize);
impl_reflect_scalar!(Uint as u128: u8, u16, u32, u64, u128, usize);
impl_reflect_scalar!(Float as f64: f32, f64);

impl Reflect for bool {
    fn reflect(&self) -> Value {
        Value::new(type_name::<bool>(), ValueKind::Bool(*self))
    }
}

impl Reflect for char {
    fn reflect(&self) -> Value {
        Value::new(type_name::<char>(), ValueKind::Char(*self))
    }
}

//
// Text
//

impl Reflect for str {
    fn reflect(&self) -> Value {
        Value::string(self)
    }
}

impl Reflect for String {
    fn reflect(&self) -> Value {
        Value::string(self.as_str())
    }
}

impl Reflect for Cow<'_, str> {
    fn reflect(&self) -> Value {
        Value::string(self.as_ref())
    }
}

//
// Sequences
//

fn slice_of<'a, T: Reflect + 'a>(items: impl IntoIterator<Item = &'a T>) -> Value {
    let items = items.into_iter().map(Reflect::reflect).collect();
    Value::new(type_name::<[T]>(), ValueKind::Slice(Some(items)))
}

fn nil_slice<T>() -> Value {
    Value::new(type_name::<[T]>(), ValueKind::Slice(None))
}

impl<T: Reflect> Reflect for [T] {
    fn reflect(&self) -> Value {
        slice_of(self)
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn reflect(&self) -> Value {
        slice_of(self)
    }

    fn reflect_option(value: Option<&Self>) -> Value {
        value.map_or_else(nil_slice::<T>, Self::reflect)
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn reflect(&self) -> Value {
        slice_of(self)
    }

    fn reflect_option(value: Option<&Self>) -> Value {
        value.map_or_else(nil_slice::<T>, Self::reflect)
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn reflect(&self) -> Value {
        let items = self.iter().map(Reflect::reflect).collect();
        Value::new(type_name::<[T; N]>(), ValueKind::Array(items))
    }
}

//
// Maps and sets
//

fn map_of<'a, K, V>(
    ty: &'static str,
    entries: impl IntoIterator<Item = (&'a K, &'a V)>,
) -> Value
where
    K: Reflect + 'a,
    V: Reflect + 'a,
{
    let entries = entries
        .into_iter()
        .map(|(k, v)| (k.reflect(), v.reflect()))
        .collect();
    Value::new(ty, ValueKind::Map(Some(entries)))
}

macro_rules! impl_reflect_map {
    ($map:ident<K, V $(, $s:ident)?>) => {
        impl<K: Reflect, V: Reflect $(, $s)?> Reflect for $map<K, V $(, $s)?> {
            fn reflect(&self) -> Value {
                map_of(type_name::<Self>(), self.iter())
            }

            fn reflect_option(value: Option<&Self>) -> Value {
                value.map_or_else(
                    || Value::new(type_name::<Self>(), ValueKind::Map(None)),
                    Self::reflect,
                )
            }
        }
    };
    ($set:ident<K $(, $s:ident)?>) => {
        impl<K: Reflect $(, $s)?> Reflect for $set<K $(, $s)?> {
            fn reflect(&self) -> Value {
                map_of(type_name::<Self>(), self.iter().map(|k| (k, &())))
            }

            fn reflect_option(value: Option<&Self>) -> Value {
                value.map_or_else(
                    || Value::new(type_name::<Self>(), ValueKind::Map(None)),
                    Self::reflect,
                )
            }
        }
    };
}

impl_reflect_map!(HashMap<K, V, S>);
impl_reflect_map!(BTreeMap<K, V>);
impl_reflect_map!(HashSet<K, S>);
impl_reflect_map!(BTreeSet<K>);

//
// Pointers
//

macro_rules! impl_reflect_pointer {
    ($($ptr:ident),*) => {
        $(
            impl<T: Reflect + ?Sized> Reflect for $ptr<T> {
                fn reflect(&self) -> Value {
                    Value::new(
                        type_name::<Self>(),
                        ValueKind::Ptr(Some(Box::new((**self).reflect()))),
                    )
                }

                fn reflect_option(value: Option<&Self>) -> Value {
                    value.map_or_else(
                        || Value::new(type_name::<Self>(), ValueKind::Ptr(None)),
                        Self::reflect,
                    )
                }
            }
        )*
    };
}

impl_reflect_pointer!(Box, Rc, Arc);

//
// Errors
//

/// Type identity of every reflected error.
const ERROR_TYPE: &str = "error";

fn reflect_error(err: &(dyn Error + 'static)) -> Value {
    let dynamic = Value::new(
        ERROR_TYPE,
        ValueKind::Opaque {
            id: Identity::of(err),
            repr: err.to_string(),
        },
    );
    Value::new(ERROR_TYPE, ValueKind::Interface(Some(Box::new(dynamic))))
}

impl Reflect for dyn Error + 'static {
    fn reflect(&self) -> Value {
        reflect_error(self)
    }
}

impl Reflect for dyn Error + Send + 'static {
    fn reflect(&self) -> Value {
        reflect_error(self)
    }
}

impl Reflect for dyn Error + Send + Sync + 'static {
    fn reflect(&self) -> Value {
        reflect_error(self)
    }
}

//
// Tuples
//

impl Reflect for () {
    fn reflect(&self) -> Value {
        Value::new(type_name::<()>(), ValueKind::Struct(Vec::new()))
    }
}

macro_rules! impl_reflect_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: Reflect),+> Reflect for ($($t,)+) {
            fn reflect(&self) -> Value {
                Value::structure::<Self>()
                    $(.field(stringify!($idx), &self.$idx))+
                    .build()
            }
        }
    };
}

impl_reflect_tuple!(0 A);
impl_reflect_tuple!(0 A, 1 B);
impl_reflect_tuple!(0 A, 1 B, 2 C);
impl_reflect_tuple!(0 A, 1 B, 2 C, 3 D);
impl_reflect_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_reflect_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);

//
// Function pointers
//

macro_rules! impl_reflect_fn {
    ($($arg:ident),*) => {
        impl<Ret $(, $arg)*> Reflect for fn($($arg),*) -> Ret {
            fn reflect(&self) -> Value {
                Value::new(type_name::<Self>(), ValueKind::Func(Some(*self as usize)))
            }

            fn reflect_option(value: Option<&Self>) -> Value {
                value.map_or_else(
                    || Value::new(type_name::<Self>(), ValueKind::Func(None)),
                    Self::reflect,
                )
            }
        }
    };
}

impl_reflect_fn!();
impl_reflect_fn!(A);
impl_reflect_fn!(A, B);
impl_reflect_fn!(A, B, C);
impl_reflect_fn!(A, B, C, D);
impl_reflect_fn!(A, B, C, D, E);
impl_reflect_fn!(A, B, C, D, E, F);

//
// Channels
//

#[cfg(feature = "tokio")]
mod channels {
    use super::*;
    use crate::value::ChanState;
    use tokio::sync::mpsc::{Receiver, Sender};

    fn chan<T>(handle: &T, len: usize, cap: usize) -> Value {
        let id = handle as *const T as usize;
        Value::new(type_name::<T>(), ValueKind::Chan(Some(ChanState { id, len, cap })))
    }

    impl<T> Reflect for Receiver<T> {
        fn reflect(&self) -> Value {
            chan(self, self.len(), self.max_capacity())
        }

        fn reflect_option(value: Option<&Self>) -> Value {
            value.map_or_else(
                || Value::new(type_name::<Self>(), ValueKind::Chan(None)),
                Self::reflect,
            )
        }
    }

    impl<T> Reflect for Sender<T> {
        fn reflect(&self) -> Value {
            let cap = self.max_capacity();
            chan(self, cap - self.capacity(), cap)
        }

        fn reflect_option(value: Option<&Self>) -> Value {
            value.map_or_else(
                || Value::new(type_name::<Self>(), ValueKind::Chan(None)),
                Self::reflect,
            )
        }
    }
}

/// Implements [`Reflect`] for a struct by listing its fields.
///
/// Generic type parameters are accepted and each one must itself implement
/// [`Reflect`]. Structs with lifetime parameters need a hand-written impl.
///
/// ```
/// use attest_core::{reflect_struct, Reflect};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// reflect_struct!(Point { x, y });
///
/// struct Tagged<T> {
///     tag: String,
///     value: T,
/// }
///
/// reflect_struct!(Tagged<T> { tag, value });
///
/// assert_eq!(Point { x: 1, y: 2 }.reflect().to_string(), "{x:1 y:2}");
/// assert_eq!(Tagged { tag: "n".into(), value: 3 }.reflect().to_string(), "{tag:n value:3}");
/// ```
#[macro_export]
macro_rules! reflect_struct {
    ($ty:ident $(<$($param:ident),+ $(,)?>)? { $($field:ident),* $(,)? }) => {
        impl $(<$($param: $crate::Reflect),+>)? $crate::Reflect for $ty $(<$($param),+>)? {
            fn reflect(&self) -> $crate::Value {
                $crate::Value::structure::<Self>()
                    $(.field(stringify!($field), &self.$field))*
                    .build()
            }
        }
    };
}
