use std::io::{Result, Write};

const INDENT: &[u8] = b"\t";
/// Width of one `0x.., ` cell, used to pad the last commented row.
const CELL_PAD: &[u8] = b"      ";

/// Streams bytes as `0x..` literals laid out in rows of `row_width`.
///
/// Row position is tracked against the cumulative byte count, so the output
/// does not depend on how the input is split into chunks.
pub struct RowEncoder {
    total: u64,
    written: u64,
    row_width: u64,
    eol: &'static str,
    // Printable rendition of the current row, when annotating.
    comment: Option<String>,
}

impl RowEncoder {
    /// `total` is the number of bytes that will be emitted overall.
    pub fn new(total: u64, row_width: u64, eol: &'static str, data_content: bool) -> Self {
        Self {
            total,
            written: 0,
            row_width: row_width.max(1),
            eol,
            comment: data_content.then(String::new),
        }
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn is_done(&self) -> bool {
        self.written >= self.total
    }

    /// Encodes `chunk`. Bytes past `total` are ignored.
    pub fn encode<W: Write>(&mut self, out: &mut W, chunk: &[u8]) -> Result<()> {
        for &byte in chunk {
            if self.is_done() {
                break;
            }
            if self.written % self.row_width == 0 {
                out.write_all(INDENT)?;
                if let Some(c) = self.comment.as_mut() {
                    c.clear();
                }
            }
            write!(out, "0x{byte:02x}")?;
            if let Some(c) = self.comment.as_mut() {
                push_printable(c, byte);
            }
            self.written += 1;

            let in_row = self.written % self.row_width;
            if self.is_done() {
                if let Some(c) = &self.comment {
                    let missing = if in_row == 0 { 0 } else { self.row_width - in_row };
                    for _ in 0..missing {
                        out.write_all(CELL_PAD)?;
                    }
                    write!(out, "  /* {c} */")?;
                }
                out.write_all(self.eol.as_bytes())?;
            } else if in_row == 0 {
                out.write_all(b",")?;
                if let Some(c) = &self.comment {
                    write!(out, " /* {c} */")?;
                }
                out.write_all(self.eol.as_bytes())?;
            } else {
                out.write_all(b", ")?;
            }
        }
        Ok(())
    }
}

// Non-printable bytes show as '.'; never closes the surrounding comment.
fn push_printable(comment: &mut String, byte: u8) {
    let c = match byte {
        b'/' if comment.ends_with('*') => '.',
        b' '..=b'~' => byte as char,
        _ => '.',
    };
    comment.push(c);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_in(chunks: &[&[u8]], total: u64, width: u64, data_content: bool) -> String {
        let mut enc = RowEncoder::new(total, width, "\n", data_content);
        let mut out = Vec::new();
        for chunk in chunks {
            enc.encode(&mut out, chunk).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn fourteen_bytes_two_rows() {
        let data: Vec<u8> = (0u8..14).collect();
        assert_eq!(
            encode_in(&[&data[..]], 14, 12, false),
            "\t0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b,\n\
             \t0x0c, 0x0d\n"
        );
    }

    #[test]
    fn single_byte_has_no_separator() {
        assert_eq!(encode_in(&[&[0xffu8][..]], 1, 12, false), "\t0xff\n");
    }

    #[test]
    fn exact_full_row_ends_without_comma() {
        assert_eq!(encode_in(&[&b"abc"[..]], 3, 3, false), "\t0x61, 0x62, 0x63\n");
    }

    #[test]
    fn rows_span_chunks() {
        let data: Vec<u8> = (0u8..=40).collect();
        let whole = encode_in(&[&data[..]], 41, 5, false);
        let (a, b) = data.split_at(7);
        let (b, c) = b.split_at(1);
        assert_eq!(encode_in(&[a, b, c], 41, 5, false), whole);
    }

    #[test]
    fn stops_at_total() {
        let mut enc = RowEncoder::new(2, 12, "\n", false);
        let mut out = Vec::new();
        enc.encode(&mut out, &[1, 2, 3, 4]).unwrap();
        assert!(enc.is_done());
        enc.encode(&mut out, &[5]).unwrap();
        assert_eq!(enc.written(), 2);
        assert_eq!(String::from_utf8(out).unwrap(), "\t0x01, 0x02\n");
    }

    #[test]
    fn data_content_comments_align() {
        assert_eq!(
            encode_in(&[&b"ABCD"[..]], 4, 2, true),
            "\t0x41, 0x42, /* AB */\n\t0x43, 0x44  /* CD */\n"
        );
        assert_eq!(
            encode_in(&[&b"AB\x00"[..]], 3, 12, true),
            format!("\t0x41, 0x42, 0x00{}  /* AB. */\n", " ".repeat(54))
        );
    }

    #[test]
    fn data_content_never_closes_comment() {
        let text = encode_in(&[&b"*/"[..]], 2, 12, true);
        assert!(text.ends_with("/* *. */\n"), "{text}");
    }
}
