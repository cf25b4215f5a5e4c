use std::fmt::{Display, Formatter, Result as FmtResult, Write};
use std::ops::Neg;

use crate::types::Complex;

use super::{Data, Kind, Value};

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.data {
            Data::Nil => write!(f, "nil"),
            Data::Bool(x) => write!(f, "{x}"),
            Data::Char(x) => write!(f, "{x:?}"),
            Data::Int(x) => write!(f, "{x}"),
            Data::Uint(x) => write!(f, "{x}"),
            Data::F32(x) => f.write_str(&format_f32(*x)),
            Data::F64(x) => f.write_str(&format_f64(*x)),
            Data::C64(x) => f.write_str(&format_complex(x, format_f32)),
            Data::C128(x) => f.write_str(&format_complex(x, format_f64)),
            Data::String(x) => f.write_str(&quote(x)),
            Data::Address(x) => write!(f, "{x:#x}"),
            Data::Seq { items, .. } if self.kind() == Kind::Tuple => {
                write!(f, "(")?;
                write_list(f, items)?;
                write!(f, ")")
            }
            Data::Seq { items, .. } => {
                write!(f, "[")?;
                write_list(f, items)?;
                write!(f, "]")
            }
            Data::Map { entries, .. } => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            Data::Struct { variant, fields } => {
                write!(f, "{}", self.ty)?;
                if let Some(variant) = variant {
                    write!(f, "::{variant}")?;
                }

                match fields.first() {
                    None => Ok(()),
                    Some((name, _)) if name.starts_with(|c: char| c.is_ascii_digit()) => {
                        write!(f, "(")?;
                        for (i, (_, value)) in fields.iter().enumerate() {
                            if i > 0 {
                                write!(f, ", ")?;
                            }
                            write!(f, "{value}")?;
                        }
                        write!(f, ")")
                    }
                    Some(_) => {
                        write!(f, " {{ ")?;
                        for (i, (name, value)) in fields.iter().enumerate() {
                            if i > 0 {
                                write!(f, ", ")?;
                            }
                            write!(f, "{name}: {value}")?;
                        }
                        write!(f, " }}")
                    }
                }
            }
            Data::Pointer { addr, pointee } => write!(f, "{addr:#x} -> {pointee}"),
            Data::Function(x) => write!(f, "fn@{:#x}", x.addr()),
            Data::Error(x) | Data::Opaque(x) => f.write_str(x),
        }
    }
}

fn write_list(f: &mut Formatter<'_>, items: &[Value]) -> FmtResult {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }

    Ok(())
}

/// Quote the passed string, escaping non printable characters.
pub(crate) fn quote(s: &str) -> String {
    let mut ret = String::with_capacity(s.len() + 2);

    ret.push('"');
    for c in s.chars() {
        match c {
            '"' => ret.push_str("\\\""),
            '\\' => ret.push_str("\\\\"),
            '\u{07}' => ret.push_str("\\a"),
            '\u{08}' => ret.push_str("\\b"),
            '\u{0c}' => ret.push_str("\\f"),
            '\n' => ret.push_str("\\n"),
            '\r' => ret.push_str("\\r"),
            '\t' => ret.push_str("\\t"),
            '\u{0b}' => ret.push_str("\\v"),
            c if u32::from(c) < 0x80 && c.is_ascii_control() => {
                let _ = write!(ret, "\\x{:02x}", u32::from(c));
            }
            c if c.is_control() => {
                let _ = write!(ret, "\\u{:04x}", u32::from(c));
            }
            c => ret.push(c),
        }
    }
    ret.push('"');

    ret
}

pub(crate) fn format_f32(value: f32) -> String {
    if !value.is_finite() {
        return format_non_finite(value.is_nan(), value.is_sign_negative());
    }

    format_finite(&format!("{value:e}"), &format!("{value}"))
}

pub(crate) fn format_f64(value: f64) -> String {
    if !value.is_finite() {
        return format_non_finite(value.is_nan(), value.is_sign_negative());
    }

    format_finite(&format!("{value:e}"), &format!("{value}"))
}

fn format_non_finite(nan: bool, negative: bool) -> String {
    match (nan, negative) {
        (true, _) => "NaN".into(),
        (false, false) => "+Inf".into(),
        (false, true) => "-Inf".into(),
    }
}

/// Renders a finite float from its shortest scientific (`sci`) and plain
/// (`plain`) representation.
///
/// Values with a decimal exponent below -4 or above 5 use scientific notation
/// with a signed two digit exponent, all others use the plain representation
/// with a `.0` suffix if the value is integral.
fn format_finite(sci: &str, plain: &str) -> String {
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return plain.into();
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return plain.into();
    };

    if !(-4..6).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };

        format!("{mantissa}e{sign}{:02}", exp.abs())
    } else if plain.contains('.') {
        plain.into()
    } else {
        format!("{plain}.0")
    }
}

pub(crate) fn format_complex<T, F>(value: &Complex<T>, format: F) -> String
where
    T: Copy + Default + PartialOrd + Neg<Output = T>,
    F: Fn(T) -> String,
{
    let zero = T::default();

    if value.im == zero {
        format(value.re)
    } else if value.im < zero {
        format!("{} - {}i", format(value.re), format(-value.im))
    } else {
        format!("{} + {}i", format(value.re), format(value.im))
    }
}
