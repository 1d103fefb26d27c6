//! UTF-16 conversions for `LPCWSTR` arguments and `WCHAR[N]` fields



/// Decode a fixed-size `WCHAR[N]` field, stopping at the first NUL.
pub(crate) fn from_wide_nul(wide: &[u16]) -> String {
    let end = wide.iter().position(|&ch| ch == 0).unwrap_or(wide.len());
    String::from_utf16_lossy(&wide[..end])
}

/// Encode `s` as a NUL-terminated `LPCWSTR` buffer.
#[cfg(test)]
pub(crate) fn to_wide_nul(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(Some(0)).collect()
}

/// Encode a path as a NUL-terminated `LPCWSTR` buffer, preserving unpaired surrogates.
#[cfg(windows)]
pub(crate) fn path_to_wide_nul(path: &std::path::Path) -> Vec<u16> {
    use std::os::windows::ffi::OsStrExt;
    path.as_os_str().encode_wide().chain(Some(0)).collect()
}



#[test] fn round_trip_fixed_field() {
    let mut field = [0u16; 32];
    let src = to_wide_nul("Microsoft Basic Render Driver");
    field[..src.len()].copy_from_slice(&src);
    assert_eq!(from_wide_nul(&field), "Microsoft Basic Render Driver");
}

#[test] fn unterminated_field_uses_whole_buffer() {
    let field = [b'a' as u16, b'b' as u16];
    assert_eq!(from_wide_nul(&field), "ab");
    assert_eq!(from_wide_nul(&[]), "");
}
