//! C-ABI FFI bindings for cross-language integration.
//!
//! This module provides a C-compatible API for calling the repair engine from
//! browser-extension native hosts, C#, Python or Node.js.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::export::{document_title, suggest_filename};
use crate::render::{to_html, HtmlOptions};
use crate::repair::repair;

/// Result structure returned by FFI functions.
#[repr(C)]
pub struct MdmendResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The result data (null if failed). Must be freed with `mdmend_free_result`.
    pub data: *mut c_char,
    /// Error message (null if succeeded). Must be freed with `mdmend_free_result`.
    pub error: *mut c_char,
}

impl MdmendResult {
    fn success(data: String) -> Self {
        Self {
            success: true,
            data: CString::new(data).unwrap_or_default().into_raw(),
            error: ptr::null_mut(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error: CString::new(message).unwrap_or_default().into_raw(),
        }
    }
}

/// Borrow a C string as UTF-8; `Ok(None)` for a null pointer.
unsafe fn text_arg<'a>(text: *const c_char) -> Result<Option<&'a str>, String> {
    if text.is_null() {
        return Ok(None);
    }
    CStr::from_ptr(text)
        .to_str()
        .map(Some)
        .map_err(|_| "Invalid UTF-8 input".to_string())
}

/// Repair pasted report text.
///
/// A null `text` is treated as absent input and yields an empty string.
///
/// # Safety
///
/// The `text` must be null or a valid null-terminated UTF-8 string.
/// The returned result must be freed with `mdmend_free_result`.
#[no_mangle]
pub unsafe extern "C" fn mdmend_repair(text: *const c_char) -> MdmendResult {
    match text_arg(text) {
        Ok(input) => MdmendResult::success(repair(input)),
        Err(e) => MdmendResult::error(e),
    }
}

/// Repair pasted report text and render it to a standalone HTML page.
///
/// # Safety
///
/// The `text` must be null or a valid null-terminated UTF-8 string.
/// The returned result must be freed with `mdmend_free_result`.
#[no_mangle]
pub unsafe extern "C" fn mdmend_to_html(text: *const c_char, auto_print: bool) -> MdmendResult {
    let input = match text_arg(text) {
        Ok(input) => input,
        Err(e) => return MdmendResult::error(e),
    };

    let options = HtmlOptions::new().with_auto_print(auto_print);
    match to_html(&repair(input), &options) {
        Ok(html) => MdmendResult::success(html),
        Err(e) => MdmendResult::error(e.to_string()),
    }
}

/// Suggest an export file name for already repaired Markdown.
///
/// # Safety
///
/// The `markdown` must be null or a valid null-terminated UTF-8 string.
/// The returned result must be freed with `mdmend_free_result`.
#[no_mangle]
pub unsafe extern "C" fn mdmend_suggest_filename(markdown: *const c_char) -> MdmendResult {
    match text_arg(markdown) {
        Ok(input) => {
            let title = input.and_then(document_title);
            MdmendResult::success(suggest_filename(title.as_deref()))
        }
        Err(e) => MdmendResult::error(e),
    }
}

/// Free a result returned by any mdmend function.
///
/// # Safety
///
/// The `result` must have been returned by an mdmend function.
/// This function should only be called once per result.
#[no_mangle]
pub unsafe extern "C" fn mdmend_free_result(result: MdmendResult) {
    if !result.data.is_null() {
        drop(CString::from_raw(result.data));
    }
    if !result.error.is_null() {
        drop(CString::from_raw(result.error));
    }
}

/// Free a string allocated by mdmend.
///
/// # Safety
///
/// The `ptr` must have been allocated by mdmend.
/// This function should only be called once per pointer.
#[no_mangle]
pub unsafe extern "C" fn mdmend_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Get the version of the mdmend library.
///
/// The returned string is statically allocated and should not be freed.
#[no_mangle]
pub extern "C" fn mdmend_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe fn data(result: &MdmendResult) -> String {
        CStr::from_ptr(result.data).to_string_lossy().into_owned()
    }

    #[test]
    fn test_version() {
        let version = mdmend_version();
        assert!(!version.is_null());
    }

    #[test]
    fn test_null_input_is_empty() {
        unsafe {
            let result = mdmend_repair(ptr::null());
            assert!(result.success);
            assert_eq!(data(&result), "");
            mdmend_free_result(result);
        }
    }

    #[test]
    fn test_repair() {
        let input = CString::new("Report\n1.0 Intro").unwrap();
        unsafe {
            let result = mdmend_repair(input.as_ptr());
            assert!(result.success);
            assert!(result.error.is_null());
            assert_eq!(data(&result), "# Report\n## 1.0 Intro");
            mdmend_free_result(result);
        }
    }

    #[test]
    fn test_invalid_utf8() {
        let input = CString::new(vec![0x52u8, 0xFF]).unwrap();
        unsafe {
            let result = mdmend_repair(input.as_ptr());
            assert!(!result.success);
            assert!(!result.error.is_null());
            mdmend_free_result(result);
        }
    }

    #[test]
    fn test_suggest_filename() {
        let input = CString::new("# Quarterly Report\ntext").unwrap();
        unsafe {
            let result = mdmend_suggest_filename(input.as_ptr());
            assert_eq!(data(&result), "quarterly_report.md");
            mdmend_free_result(result);

            let result = mdmend_suggest_filename(ptr::null());
            assert_eq!(data(&result), "report_export.md");
            mdmend_free_result(result);
        }
    }
}
