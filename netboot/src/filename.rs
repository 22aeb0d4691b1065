//! Boot file name extraction.

extern crate alloc;

use alloc::string::String;

/// Longest boot file name kept, in bytes (256-byte buffer with terminator).
pub const MAX_BOOT_FILENAME: usize = 255;

/// Turn a raw boot file option into a usable name.
///
/// The option is cut at the first NUL (padded legacy `file` field), then
/// truncated to `limit` bytes on a char boundary. An empty result means
/// there is no boot file.
pub fn bootfile_name(raw: Option<&str>, limit: usize) -> Option<String> {
    let raw = raw?;
    let name = match raw.find('\0') {
        Some(end) => &raw[..end],
        None => raw,
    };

    let mut end = name.len().min(limit);
    while !name.is_char_boundary(end) {
        end -= 1;
    }

    let name = &name[..end];
    if name.is_empty() {
        None
    } else {
        Some(String::from(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_plain_name() {
        assert_eq!(
            bootfile_name(Some("pxelinux.0"), MAX_BOOT_FILENAME),
            Some("pxelinux.0".to_string())
        );
    }

    #[test]
    fn test_missing_or_empty() {
        assert_eq!(bootfile_name(None, MAX_BOOT_FILENAME), None);
        assert_eq!(bootfile_name(Some(""), MAX_BOOT_FILENAME), None);
        assert_eq!(bootfile_name(Some("\0\0\0"), MAX_BOOT_FILENAME), None);
    }

    #[test]
    fn test_nul_padding_stripped() {
        assert_eq!(
            bootfile_name(Some("boot/ipxe.efi\0\0\0\0"), MAX_BOOT_FILENAME),
            Some("boot/ipxe.efi".to_string())
        );
    }

    #[test]
    fn test_truncated_to_limit() {
        let long = "a".repeat(300);
        let name = bootfile_name(Some(&long), MAX_BOOT_FILENAME).unwrap();
        assert_eq!(name.len(), MAX_BOOT_FILENAME);
    }

    #[test]
    fn test_truncation_respects_char_boundary() {
        // 'é' is two bytes; a limit of 2 would split the second one.
        let name = bootfile_name(Some("aéb"), 2).unwrap();
        assert_eq!(name, "a");
    }
}
