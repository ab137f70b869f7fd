//! Line-oriented header rewriting for derived rasters.

/// Column at which rewritten directive values start.
const VALUE_COLUMN: usize = 15;

#[derive(Debug, Clone)]
struct Substitution {
    prefix: &'static str,
    line: String,
}

/// Rewrites header text by replacing whole lines that start with a registered
/// prefix. All other lines are copied verbatim, in order, with their original
/// line terminators.
#[derive(Debug, Clone, Default)]
pub struct HeaderRewriter {
    substitutions: Vec<Substitution>,
}

impl HeaderRewriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header substitutions for an 8-bit unsigned, single-band mask that is
    /// `cols` cells wide with a no-data value of 0.
    ///
    /// Only existing lines are replaced. An ERDAS source has no `PIXELTYPE`
    /// line, so its derived header still parses as 32-bit float and does not
    /// describe the 1-byte mask cells.
    pub fn for_binary_mask(cols: usize) -> Self {
        Self::new()
            .substitute("NBIT", "NBITS", 8)
            .substitute("BANDROWBYTE", "BANDROWBYTES", cols)
            .substitute("TOTALROWBYTE", "TOTALROWBYTES", cols)
            .substitute("PIXELTYP", "PIXELTYPE", "UNSIGNEDINT")
            .substitute("NODATA", "NODATA", 0)
    }

    /// Replaces any line starting with `prefix` by `label` followed by `value`
    /// aligned to the value column. The first matching registration wins.
    pub fn substitute(mut self, prefix: &'static str, label: &str, value: impl std::fmt::Display) -> Self {
        self.substitutions.push(Substitution {
            prefix,
            line: format!("{:<width$}{}", label, value, width = VALUE_COLUMN),
        });
        self
    }

    pub fn apply(&self, source: &str) -> String {
        let mut output = String::with_capacity(source.len());

        for line in source.split_inclusive('\n') {
            let content = line.trim_end_matches(['\r', '\n']);
            let terminator = &line[content.len()..];

            match self.substitutions.iter().find(|s| content.starts_with(s.prefix)) {
                Some(substitution) => {
                    output.push_str(&substitution.line);
                    output.push_str(terminator);
                }
                None => output.push_str(line),
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "BYTEORDER      I\n\
                          LAYOUT         BIL\n\
                          NROWS          3\n\
                          NCOLS          2703\n\
                          NBANDS         1\n\
                          NBITS          32\n\
                          BANDROWBYTES   10812\n\
                          TOTALROWBYTES  10812\n\
                          PIXELTYPE      FLOAT\n\
                          ULXMAP         -87.5\n\
                          ULYMAP         33.25\n\
                          XDIM           0.0001\n\
                          YDIM           0.0001\n\
                          NODATA         -3.4e38\n";

    #[test]
    fn test_no_substitutions_is_identity() {
        let rewriter = HeaderRewriter::new();
        assert_eq!(rewriter.apply(SOURCE), SOURCE);

        let crlf = SOURCE.replace('\n', "\r\n");
        assert_eq!(rewriter.apply(&crlf), crlf);
    }

    #[test]
    fn test_binary_mask_substitutions() {
        let rewritten = HeaderRewriter::for_binary_mask(2703).apply(SOURCE);
        let source_lines: Vec<&str> = SOURCE.lines().collect();
        let lines: Vec<&str> = rewritten.lines().collect();

        assert_eq!(lines.len(), source_lines.len());
        assert_eq!(lines[5], "NBITS          8");
        assert_eq!(lines[6], "BANDROWBYTES   2703");
        assert_eq!(lines[7], "TOTALROWBYTES  2703");
        assert_eq!(lines[8], "PIXELTYPE      UNSIGNEDINT");
        assert_eq!(lines[13], "NODATA         0");

        for index in [0, 1, 2, 3, 4, 9, 10, 11, 12] {
            assert_eq!(lines[index], source_lines[index]);
        }
    }

    #[test]
    fn test_preserves_terminators_and_unrecognised_lines() {
        let source = "NBITS 16\r\nCUSTOM keep me\r\nNODATA 5";
        let rewritten = HeaderRewriter::for_binary_mask(7).apply(source);

        assert_eq!(rewritten, "NBITS          8\r\nCUSTOM keep me\r\nNODATA         0");
    }

    #[test]
    fn test_erdas_mask_header_keeps_float_default() {
        use crate::bil::{SampleFormat, parse_header};

        let erdas = "BYTEORDER      I\n\
                     LAYOUT         BIL\n\
                     NROWS          4\n\
                     NCOLS          6\n\
                     NBANDS         1\n\
                     NBITS          32\n\
                     NODATA         -1\n";
        let rewritten = HeaderRewriter::for_binary_mask(6).apply(erdas);

        assert!(!rewritten.contains("PIXELTYPE"));
        let descriptor = parse_header(&rewritten).unwrap();
        assert_eq!(descriptor.bits_per_sample, 8);
        assert_eq!(descriptor.sample_format().unwrap(), SampleFormat::Float { bits: 32 });
    }
}
