use crate::naming::HeaderNames;
use std::io::{Result, Write};

/// Include guard, optional `<vector>` include and the array opening line.
pub fn write_preamble<W: Write>(
    out: &mut W,
    names: &HeaderNames,
    eol: &str,
    std_vector: bool,
) -> Result<()> {
    let guard = &names.guard;
    write!(out, "#ifndef {guard}{eol}#define {guard}{eol}")?;
    if std_vector {
        write!(out, "{eol}#ifdef __cplusplus{eol}#include <vector>{eol}#endif{eol}")?;
    }
    write!(
        out,
        "{eol}static const unsigned char {}[] = {{{eol}",
        names.identifier
    )
}

/// Array close, optional vector alias and the guard's `#endif`.
pub fn write_closing<W: Write>(
    out: &mut W,
    names: &HeaderNames,
    eol: &str,
    std_vector: bool,
) -> Result<()> {
    write!(out, "}};{eol}")?;
    if std_vector {
        let n = &names.identifier;
        write!(
            out,
            "{eol}#ifdef __cplusplus{eol}static const std::vector<char> {n}_v({n}, {n} + sizeof({n}));{eol}#endif{eol}"
        )?;
    }
    write!(out, "{eol}#endif /* {} */{eol}", names.guard)
}
