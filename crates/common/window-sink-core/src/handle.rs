/// An opaque, OS-assigned window identifier, stored pointer-sized.
///
/// Callers hand it over as hex text; it is never created or destroyed here
/// and stays meaningful only while the referenced window exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(isize);

impl WindowHandle {
    pub const NULL: WindowHandle = WindowHandle(0);

    /// Parses hex text into a handle with `strtoull(text, NULL, 16)`
    /// semantics: leading whitespace is skipped, an optional `0x`/`0X`
    /// prefix is accepted, the longest run of hex digits is consumed, and
    /// overflow saturates. Text with no leading hex digits yields
    /// [`WindowHandle::NULL`] rather than an error; liveness validation is
    /// the caller's job.
    pub fn from_hex(text: &str) -> Self {
        let bytes = text.trim_start().as_bytes();
        let bytes = match bytes {
            [b'0', b'x' | b'X', rest @ ..] if rest.first().is_some_and(|b| b.is_ascii_hexdigit()) => {
                rest
            }
            _ => bytes,
        };

        let mut value: u64 = 0;
        for &byte in bytes {
            let Some(digit) = (byte as char).to_digit(16) else {
                break;
            };
            value = match value.checked_mul(16).and_then(|v| v.checked_add(u64::from(digit))) {
                Some(v) => v,
                None => {
                    value = u64::MAX;
                    break;
                }
            };
        }

        WindowHandle(value as isize)
    }

    #[must_use]
    pub fn as_raw(self) -> isize {
        self.0
    }

    #[must_use]
    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
