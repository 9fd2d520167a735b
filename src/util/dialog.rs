//! Browser dialogs.

/// Ask the user to confirm a destructive action.
///
/// Outside the browser there is nobody to ask, so this always agrees.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        true
    }
}
