//! Byte-oriented substring search used for header cards and survey responses.

/// How letters are compared by [`find_substring`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    /// Literal byte comparison.
    #[default]
    Sensitive,
    /// Folds ASCII `A-Z`/`a-z` only; every other byte compares literally.
    Insensitive,
}

impl CaseSensitivity {
    #[inline]
    fn bytes_eq(self, a: u8, b: u8) -> bool {
        match self {
            CaseSensitivity::Sensitive => a == b,
            CaseSensitivity::Insensitive => a.eq_ignore_ascii_case(&b),
        }
    }
}

/// Find the leftmost occurrence of `needle` within the first `haystack_len`
/// bytes of `haystack`.
///
/// An empty needle is found at position 0 of any haystack, including an empty
/// one. A needle longer than the searched region is never found.
/// `haystack_len` is clamped to the slice length.
pub fn find_substring(
    haystack: &[u8],
    needle: &[u8],
    haystack_len: usize,
    case: CaseSensitivity,
) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }

    let haystack = &haystack[..haystack_len.min(haystack.len())];
    if needle.len() > haystack.len() {
        return None;
    }

    let first = needle[0];
    let last = needle[needle.len() - 1];
    let tail = needle.len() - 1;

    (0..=haystack.len() - needle.len()).find(|&start| {
        let window = &haystack[start..start + needle.len()];
        // First and last bytes reject most candidates before the full compare.
        case.bytes_eq(window[0], first)
            && case.bytes_eq(window[tail], last)
            && window
                .iter()
                .zip(needle)
                .all(|(&a, &b)| case.bytes_eq(a, b))
    })
}

pub trait FindSubstring {
    /// Position of the first exact occurrence of `needle`.
    fn find_bytes(&self, needle: &str) -> Option<usize>;

    /// Position of the first occurrence of `needle`, folding ASCII letters.
    fn find_ignore_ascii_case(&self, needle: &str) -> Option<usize>;

    fn contains_bytes(&self, needle: &str) -> bool {
        self.find_bytes(needle).is_some()
    }
}

impl FindSubstring for [u8] {
    fn find_bytes(&self, needle: &str) -> Option<usize> {
        find_substring(self, needle.as_bytes(), self.len(), CaseSensitivity::Sensitive)
    }

    fn find_ignore_ascii_case(&self, needle: &str) -> Option<usize> {
        find_substring(
            self,
            needle.as_bytes(),
            self.len(),
            CaseSensitivity::Insensitive,
        )
    }
}

impl FindSubstring for str {
    fn find_bytes(&self, needle: &str) -> Option<usize> {
        self.as_bytes().find_bytes(needle)
    }

    fn find_ignore_ascii_case(&self, needle: &str) -> Option<usize> {
        self.as_bytes().find_ignore_ascii_case(needle)
    }
}

impl FindSubstring for String {
    fn find_bytes(&self, needle: &str) -> Option<usize> {
        self.as_str().find_bytes(needle)
    }

    fn find_ignore_ascii_case(&self, needle: &str) -> Option<usize> {
        self.as_str().find_ignore_ascii_case(needle)
    }
}
