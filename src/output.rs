/// JSON text formatting for fixture payloads.
///
/// Compact layout with a space after every `,` and `:` (`[{"el": 3, "la": 0}]`),
/// the shape the fixture consumers were written against. Non-ASCII text is
/// written as literal UTF-8; only `"`, `\` and control characters are escaped.
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io::{self, Write};

/// serde_json formatter emitting `", "` and `": "` separators.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    #[inline]
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    #[inline]
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    #[inline]
    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

/// Serialize `value` to `out` using [`SpacedFormatter`].
pub fn write_json<W, T>(out: W, value: &T) -> serde_json::Result<()>
where
    W: Write,
    T: ?Sized + Serialize,
{
    let mut ser = Serializer::with_formatter(out, SpacedFormatter);
    value.serialize(&mut ser)
}

pub fn to_json_string<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(128);
    write_json(&mut buf, value)?;
    String::from_utf8(buf).map_err(serde::ser::Error::custom)
}
