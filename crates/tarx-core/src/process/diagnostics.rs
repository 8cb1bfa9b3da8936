//! Best-effort capture of a process's error output.

use std::io::BufReader;
use std::io::Read;

/// Reads `stream` to the end and returns its contents as text.
///
/// Bytes are decoded as UTF-8, with invalid sequences replaced by
/// `U+FFFD`. If a read fails mid-stream, the text gathered so far is
/// returned with the error message appended. This function never fails.
///
/// # Examples
///
/// ```
/// use tarx_core::process::read_diagnostics;
///
/// let text = read_diagnostics(&b"tar: short read"[..]);
/// assert_eq!(text, "tar: short read");
/// ```
pub fn read_diagnostics<R: Read>(stream: R) -> String {
    let mut bytes = Vec::new();
    let fault = BufReader::new(stream).read_to_end(&mut bytes).err();

    let mut text = String::from_utf8_lossy(&bytes).into_owned();
    if let Some(err) = fault {
        text.push_str(&err.to_string());
    }
    text
}
