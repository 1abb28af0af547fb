//! Scalar encoding rules.
//!
//! KML has its own textual conventions for scalar values: booleans are `1`
//! and `0`, colors are written alpha first in `aabbggrr` order, floats use
//! the shortest decimal form that parses back to the same `f64`, and times
//! are RFC 3339. Every leaf constructor goes through these functions.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, SecondsFormat, TimeZone};

use crate::error::{Error, Result};

/// Encode a boolean as `1` or `0`.
pub fn format_bool(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Encode a float with the fewest digits that round-trip, never in
/// scientific notation. Non-finite values are `+Inf`, `-Inf` and `NaN`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "+Inf" } else { "-Inf" }.to_string()
    } else {
        value.to_string()
    }
}

fn format_f32(value: f32) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        format_float(f64::from(value))
    }
}

/// Encode a signed integer in base 10.
pub fn format_int(value: i64) -> String {
    value.to_string()
}

/// Encode a timestamp as RFC 3339 with whole seconds, `Z` for UTC.
pub fn format_time<Tz>(value: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from red, green and blue.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }
}

/// Colors are written as `aabbggrr`, lower-case hex.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}{:02x}", self.a, self.b, self.g, self.r)
    }
}

/// A value that has a canonical KML text form.
///
/// Implemented for every type a leaf constructor accepts.
pub trait Scalar {
    fn encode(&self) -> Cow<'_, str>;
}

impl Scalar for bool {
    fn encode(&self) -> Cow<'_, str> {
        Cow::Borrowed(format_bool(*self))
    }
}

impl Scalar for f64 {
    fn encode(&self) -> Cow<'_, str> {
        Cow::Owned(format_float(*self))
    }
}

impl Scalar for i32 {
    fn encode(&self) -> Cow<'_, str> {
        Cow::Owned(format_int(i64::from(*self)))
    }
}

impl Scalar for i64 {
    fn encode(&self) -> Cow<'_, str> {
        Cow::Owned(format_int(*self))
    }
}

impl Scalar for str {
    fn encode(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Scalar for String {
    fn encode(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Scalar for Color {
    fn encode(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl<Tz> Scalar for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn encode(&self) -> Cow<'_, str> {
        Cow::Owned(format_time(self))
    }
}

impl<T: Scalar + ?Sized> Scalar for &T {
    fn encode(&self) -> Cow<'_, str> {
        (**self).encode()
    }
}

/// A dynamically typed value for `<value>` elements in extended data.
///
/// Unlike leaf booleans, booleans here use their natural form (`true` /
/// `false`).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Complex64 { re: f32, im: f32 },
    Complex128 { re: f64, im: f64 },
    Bytes(Vec<u8>),
    String(String),
    /// Character data, escaped on output like [`Value::String`].
    CharData(String),
}

impl Value {
    /// Convert an arbitrary value by dispatching on its concrete type.
    ///
    /// Returns [`Error::UnsupportedType`] naming `T` when `T` is not one of
    /// the supported scalar types.
    pub fn from_any<T: Any>(value: T) -> Result<Value> {
        let any: Box<dyn Any> = Box::new(value);
        macro_rules! dispatch {
            ($any:ident; $($ty:ty => $convert:expr),* $(,)?) => {
                $(
                    let $any = match $any.downcast::<$ty>() {
                        Ok(v) => return Ok($convert(*v)),
                        Err(other) => other,
                    };
                )*
            };
        }
        dispatch! { any;
            Value => |v| v,
            () => |_| Value::Nil,
            bool => Value::Bool,
            i8 => Value::I8,
            i16 => Value::I16,
            i32 => Value::I32,
            i64 => Value::I64,
            isize => Value::Isize,
            u8 => Value::U8,
            u16 => Value::U16,
            u32 => Value::U32,
            u64 => Value::U64,
            usize => Value::Usize,
            f32 => Value::F32,
            f64 => Value::F64,
            Vec<u8> => Value::Bytes,
            &'static [u8] => |v: &[u8]| Value::Bytes(v.to_vec()),
            String => Value::String,
            &'static str => |v: &str| Value::String(v.to_string()),
        }
        drop(any);
        Err(Error::unsupported::<T>())
    }
}

fn format_complex(re: String, im: String) -> String {
    let sign = if im.starts_with('-') { "" } else { "+" };
    format!("({re}{sign}{im}i)")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => Ok(()),
            Value::Bool(v) => write!(f, "{v}"),
            Value::I8(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::Isize(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::Usize(v) => write!(f, "{v}"),
            Value::F32(v) => f.write_str(&format_float(f64::from(*v))),
            Value::F64(v) => f.write_str(&format_float(*v)),
            Value::Complex64 { re, im } => {
                f.write_str(&format_complex(format_f32(*re), format_f32(*im)))
            }
            Value::Complex128 { re, im } => {
                f.write_str(&format_complex(format_float(*re), format_float(*im)))
            }
            Value::Bytes(v) => f.write_str(&String::from_utf8_lossy(v)),
            Value::String(v) | Value::CharData(v) => f.write_str(v),
        }
    }
}

macro_rules! value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

value_from! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    Vec<u8> => Bytes,
    String => String,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}
