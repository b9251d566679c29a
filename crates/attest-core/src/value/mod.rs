//! A reflected view of test operands.
//!
//! Checks never look at operands directly. Each operand is first turned into a
//! [`Value`] through the [`Reflect`] trait, which records its type identity and
//! sorts it into one of a closed set of categories ([`Kind`]). Nil detection,
//! length and deep equality are all defined over that tree.

mod deep_equal;
mod reflect;

use std::fmt;

pub use deep_equal::deep_equal;
pub use reflect::{Nil, Reflect};

/// Type identity shared by every text type.
pub const STRING_TYPE: &str = "string";

/// Type identity of the untyped absent value.
pub const NIL_TYPE: &str = "nil";

/// A reflected operand: a type identity plus its categorised contents.
#[derive(Debug, Clone)]
pub struct Value {
    type_name: &'static str,
    kind: ValueKind,
}

/// The contents of a [`Value`], one variant per category.
///
/// Variants holding an `Option` are the nillable categories; `None` is the
/// unset slot.
#[derive(Debug, Clone)]
pub enum ValueKind {
    Invalid,
    Bool(bool),
    Int(i128),
    Uint(u128),
    Float(f64),
    Char(char),
    String(String),
    Array(Vec<Value>),
    Slice(Option<Vec<Value>>),
    Map(Option<Vec<(Value, Value)>>),
    Ptr(Option<Box<Value>>),
    Interface(Option<Box<Value>>),
    /// Function pointer, identified by address
    Func(Option<usize>),
    Chan(Option<ChanState>),
    Struct(Vec<Field>),
    /// A value only comparable by identity, with its rendered form
    Opaque { id: Identity, repr: String },
}

/// Identifies one live instance of a value.
///
/// The address alone is not enough: a struct and its first field share an
/// address, as does every zero-sized value. Two identities only match when
/// they also agree on the size and `Debug` rendering of the value, which
/// tells a wrapper apart from the value it wraps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    addr: usize,
    size: usize,
    debug: String,
}

impl Identity {
    pub fn of<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Self {
            addr: value as *const T as *const () as usize,
            size: std::mem::size_of_val(value),
            debug: format!("{:?}", value),
        }
    }
}

/// Snapshot of a channel handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChanState {
    /// Address of the handle the snapshot was taken from
    pub id: usize,
    /// Messages currently buffered
    pub len: usize,
    pub cap: usize,
}

/// A named struct field.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub value: Value,
}

/// The category tag of a [`ValueKind`], without its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Invalid,
    Bool,
    Int,
    Uint,
    Float,
    Char,
    String,
    Array,
    Slice,
    Map,
    Ptr,
    Interface,
    Func,
    Chan,
    Struct,
    Opaque,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Invalid => "invalid",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Char => "char",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Slice => "slice",
            Kind::Map => "map",
            Kind::Ptr => "ptr",
            Kind::Interface => "interface",
            Kind::Func => "func",
            Kind::Chan => "chan",
            Kind::Struct => "struct",
            Kind::Opaque => "opaque",
        };
        f.write_str(name)
    }
}

impl ValueKind {
    /// Returns the category tag of this payload.
    pub fn kind(&self) -> Kind {
        match self {
            ValueKind::Invalid => Kind::Invalid,
            ValueKind::Bool(_) => Kind::Bool,
            ValueKind::Int(_) => Kind::Int,
            ValueKind::Uint(_) => Kind::Uint,
            ValueKind::Float(_) => Kind::Float,
            ValueKind::Char(_) => Kind::Char,
            ValueKind::String(_) => Kind::String,
            ValueKind::Array(_) => Kind::Array,
            ValueKind::Slice(_) => Kind::Slice,
            ValueKind::Map(_) => Kind::Map,
            ValueKind::Ptr(_) => Kind::Ptr,
            ValueKind::Interface(_) => Kind::Interface,
            ValueKind::Func(_) => Kind::Func,
            ValueKind::Chan(_) => Kind::Chan,
            ValueKind::Struct(_) => Kind::Struct,
            ValueKind::Opaque { .. } => Kind::Opaque,
        }
    }
}

impl Value {
    /// Creates a value with an explicit type identity.
    pub fn new(type_name: &'static str, kind: ValueKind) -> Self {
        Self { type_name, kind }
    }

    /// The untyped absent value.
    pub fn nil() -> Self {
        Self::new(NIL_TYPE, ValueKind::Invalid)
    }

    /// Creates a text value under the shared text identity.
    pub fn string(text: impl Into<String>) -> Self {
        Self::new(STRING_TYPE, ValueKind::String(text.into()))
    }

    /// Starts building a struct value for type `T`.
    pub fn structure<T: ?Sized>() -> StructBuilder {
        StructBuilder {
            type_name: std::any::type_name::<T>(),
            fields: Vec::new(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn value_kind(&self) -> &ValueKind {
        &self.kind
    }

    pub fn kind(&self) -> Kind {
        self.kind.kind()
    }

    /// Reports whether this value counts as nil.
    ///
    /// Only the untyped absent value and the nillable categories (pointers,
    /// interfaces, funcs, channels, slices, maps) with an unset slot are nil.
    /// Zero-valued scalars and structs never are.
    pub fn is_nil(&self) -> bool {
        match &self.kind {
            ValueKind::Invalid => true,
            ValueKind::Ptr(slot) | ValueKind::Interface(slot) => slot.is_none(),
            ValueKind::Func(slot) => slot.is_none(),
            ValueKind::Chan(slot) => slot.is_none(),
            ValueKind::Slice(slot) => slot.is_none(),
            ValueKind::Map(slot) => slot.is_none(),
            _ => false,
        }
    }

    /// Returns the length of arrays, slices, maps, channels and strings.
    ///
    /// Channels report their buffered count, strings their number of chars.
    /// Unset slices, maps and channels have length zero. Every other category
    /// has no length and yields `None`.
    pub fn len(&self) -> Option<usize> {
        match &self.kind {
            ValueKind::Array(items) => Some(items.len()),
            ValueKind::Slice(items) => Some(items.as_ref().map_or(0, Vec::len)),
            ValueKind::Map(entries) => Some(entries.as_ref().map_or(0, Vec::len)),
            ValueKind::Chan(state) => Some(state.map_or(0, |s| s.len)),
            ValueKind::String(text) => Some(text.chars().count()),
            _ => None,
        }
    }
}

/// Collects the fields of a struct value.
#[derive(Debug)]
pub struct StructBuilder {
    type_name: &'static str,
    fields: Vec<Field>,
}

impl StructBuilder {
    /// Appends a field in declaration order.
    pub fn field<T: Reflect + ?Sized>(mut self, name: &'static str, value: &T) -> Self {
        self.fields.push(Field {
            name,
            value: value.reflect(),
        });
        self
    }

    pub fn build(self) -> Value {
        Value::new(self.type_name, ValueKind::Struct(self.fields))
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValueKind::Invalid => f.write_str("<nil>"),
            ValueKind::Bool(b) => write!(f, "{}", b),
            ValueKind::Int(i) => write!(f, "{}", i),
            ValueKind::Uint(u) => write!(f, "{}", u),
            ValueKind::Float(x) => write!(f, "{}", x),
            ValueKind::Char(c) => write!(f, "{}", c),
            ValueKind::String(s) => f.write_str(s),
            ValueKind::Array(items) => write_seq(f, items),
            ValueKind::Slice(items) => write_seq(f, items.as_deref().unwrap_or_default()),
            ValueKind::Map(entries) => {
                f.write_str("map[")?;
                for (i, (key, value)) in entries.iter().flatten().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}:{}", key, value)?;
                }
                f.write_str("]")
            }
            ValueKind::Ptr(Some(target)) => write!(f, "&{}", target),
            ValueKind::Interface(Some(inner)) => write!(f, "{}", inner),
            ValueKind::Ptr(None) | ValueKind::Interface(None) => f.write_str("<nil>"),
            ValueKind::Func(addr) => match addr {
                Some(addr) => write!(f, "{:#x}", addr),
                None => f.write_str("<nil>"),
            },
            ValueKind::Chan(state) => match state {
                Some(state) => write!(f, "{:#x}", state.id),
                None => f.write_str("<nil>"),
            },
            ValueKind::Struct(fields) => {
                f.write_str("{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}:{}", field.name, field.value)?;
                }
                f.write_str("}")
            }
            ValueKind::Opaque { repr, .. } => f.write_str(repr),
        }
    }
}
