//! Strongly typed, zero-cost identifier wrappers.
//!
//! Bar-Gera files number nodes and zones from 1.  The wrappers keep the file
//! value verbatim; [`NodeId::ordinal`] gives the 0-based row position a
//! dense, sorted node table would store it at.

use std::fmt;

use crate::{TnError, TnResult};

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize`.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// 0-based row position for a 1-indexed id; `None` for id 0.
            #[inline]
            pub fn ordinal(self) -> Option<usize> {
                self.index().checked_sub(1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }

        impl std::str::FromStr for $name {
            type Err = TnError;
            fn from_str(s: &str) -> TnResult<$name> {
                parse_id(s).map($name)
            }
        }
    };
}

typed_id! {
    /// Network node id as written in the node and net files.
    pub struct NodeId(u32);
}

typed_id! {
    /// Link id: 0-based position of the link in its net file.
    pub struct LinkId(u32);
}

typed_id! {
    /// Origin or destination zone id.  Zones are the first nodes of the
    /// network, so a zone id is also a valid node id.
    pub struct ZoneId(u32);
}

impl From<ZoneId> for NodeId {
    #[inline]
    fn from(z: ZoneId) -> NodeId {
        NodeId(z.0)
    }
}

impl From<NodeId> for ZoneId {
    #[inline]
    fn from(n: NodeId) -> ZoneId {
        ZoneId(n.0)
    }
}

/// Parse an integer id from a text field.
///
/// Accepts plain integers (`"7"`) and integral floats (`"7.0"`, `"7."`),
/// since numeric tables written by array tools carry float ids.
pub fn parse_id(s: &str) -> TnResult<u32> {
    let s = s.trim();
    if let Ok(n) = s.parse::<u32>() {
        return Ok(n);
    }
    let v: f64 = s
        .parse()
        .map_err(|_| TnError::Parse(format!("{s:?} is not a number")))?;
    id_from_f64(v)
}

/// Convert a numeric-table cell to an id.
///
/// Rejects non-finite, negative, fractional, and out-of-range values.
pub fn id_from_f64(v: f64) -> TnResult<u32> {
    if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 {
        Ok(v as u32)
    } else {
        Err(TnError::InvalidId(v.to_string()))
    }
}
