// Longest first: the UTF-32LE mark begins with the UTF-16LE one.
const BOMS: [&[u8]; 5] = [
    &[0x00, 0x00, 0xFE, 0xFF],
    &[0xFF, 0xFE, 0x00, 0x00],
    &[0xEF, 0xBB, 0xBF],
    &[0xFE, 0xFF],
    &[0xFF, 0xFE],
];

/// Total length of the byte-order marks at the start of `bytes`.
///
/// Keeps consuming marks until none is left, so stripping a doubled BOM once
/// gives the same bytes as stripping it twice.
pub fn bom_prefix_len(bytes: &[u8]) -> usize {
    let mut offset = 0;
    while let Some(bom) = BOMS.iter().find(|bom| bytes[offset..].starts_with(bom)) {
        offset += bom.len();
    }
    offset
}

pub fn strip_bom(bytes: &[u8]) -> &[u8] {
    &bytes[bom_prefix_len(bytes)..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_each_bom_variant() {
        let cases: [(&[u8], &[u8]); 5] = [
            (b"\xEF\xBB\xBFhi", b"hi"),
            (b"\xFE\xFF\x00h", b"\x00h"),
            (b"\xFF\xFEh\x00", b"h\x00"),
            (b"\x00\x00\xFE\xFF\x00\x00\x00h", b"\x00\x00\x00h"),
            (b"\xFF\xFE\x00\x00h\x00\x00\x00", b"h\x00\x00\x00"),
        ];
        for (input, expected) in cases {
            assert_eq!(strip_bom(input), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_strip_bom_passes_plain_bytes_through() {
        assert_eq!(strip_bom(b"# Title\n"), b"# Title\n");
        assert_eq!(strip_bom(b""), b"");
        assert_eq!(strip_bom(b"\xEF\xBB"), b"\xEF\xBB");
        assert_eq!(strip_bom(b"a\xEF\xBB\xBF"), b"a\xEF\xBB\xBF");
    }

    #[test]
    fn test_doubled_bom_is_fully_removed() {
        assert_eq!(strip_bom(b"\xEF\xBB\xBF\xEF\xBB\xBFx"), b"x");
        assert_eq!(bom_prefix_len(b"\xEF\xBB\xBF\xEF\xBB\xBFx"), 6);
    }

    #[test]
    fn test_strip_bom_is_idempotent() {
        let inputs: [&[u8]; 6] = [
            b"plain",
            b"\xEF\xBB\xBFtext",
            b"\xEF\xBB\xBF\xEF\xBB\xBFtext",
            b"\xFF\xFE\xEF\xBB\xBF",
            b"\xFE\xFF\xFE\xFF",
            b"",
        ];
        for input in inputs {
            let once = strip_bom(input);
            assert_eq!(strip_bom(once), once, "input: {:?}", input);
        }
    }
}
