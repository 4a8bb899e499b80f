//! Collection-or-scalar parameters.
//!
//! [`split::split`](crate::split::split) and the `strip_*` family accept
//! either one pattern or an ordered list of patterns. Rather than two code
//! paths per function, callers hand over a tagged variant; `From`
//! conversions keep call sites as terse as passing a literal.

/// Delimiter argument for [`split`](crate::split::split): a single delimiter
/// or an ordered list applied in successive passes.
#[derive(Debug, Clone, Copy)]
pub enum Delimiters<'a> {
    One(&'a [u8]),
    Many(&'a [&'a [u8]]),
}

impl<'a> From<&'a [u8]> for Delimiters<'a> {
    fn from(d: &'a [u8]) -> Self {
        Delimiters::One(d)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Delimiters<'a> {
    fn from(d: &'a [u8; N]) -> Self {
        Delimiters::One(d.as_slice())
    }
}

impl<'a> From<&'a str> for Delimiters<'a> {
    fn from(d: &'a str) -> Self {
        Delimiters::One(d.as_bytes())
    }
}

impl<'a> From<&'a [&'a [u8]]> for Delimiters<'a> {
    fn from(ds: &'a [&'a [u8]]) -> Self {
        Delimiters::Many(ds)
    }
}

impl<'a, const N: usize> From<&'a [&'a [u8]; N]> for Delimiters<'a> {
    fn from(ds: &'a [&'a [u8]; N]) -> Self {
        Delimiters::Many(ds.as_slice())
    }
}

/// Affix argument for the `strip_*` functions: one prefix/suffix or an
/// ordered list, tried in order.
#[derive(Debug, Clone, Copy)]
pub enum Affixes<'a> {
    One(&'a [u8]),
    Many(&'a [&'a [u8]]),
}

impl<'a> Affixes<'a> {
    pub(crate) fn iter(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        match self {
            Affixes::One(affix) => core::slice::from_ref(affix).iter().copied(),
            Affixes::Many(affixes) => affixes.iter().copied(),
        }
    }
}

impl<'a> From<&'a [u8]> for Affixes<'a> {
    fn from(a: &'a [u8]) -> Self {
        Affixes::One(a)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Affixes<'a> {
    fn from(a: &'a [u8; N]) -> Self {
        Affixes::One(a.as_slice())
    }
}

impl<'a> From<&'a str> for Affixes<'a> {
    fn from(a: &'a str) -> Self {
        Affixes::One(a.as_bytes())
    }
}

impl<'a> From<&'a [&'a [u8]]> for Affixes<'a> {
    fn from(affixes: &'a [&'a [u8]]) -> Self {
        Affixes::Many(affixes)
    }
}

impl<'a, const N: usize> From<&'a [&'a [u8]; N]> for Affixes<'a> {
    fn from(affixes: &'a [&'a [u8]; N]) -> Self {
        Affixes::Many(affixes.as_slice())
    }
}
