//! Common utility functions used across the library

/// Sanitize filename to be safe for all operating systems.
/// Converts the filename to lowercase and replaces special characters with underscores.
///
/// # Arguments
/// * `input` - The filename to sanitize
///
/// # Returns
/// * A sanitized filename (lowercase with special characters replaced)
pub fn sanitize_filename(input: &str) -> String {
    let invalid_chars = ['/', '\\', ':', '*', '?', '"', '<', '>', '|', ' ', '\t'];
    let mut result = input.to_lowercase(); // Преобразуем в нижний регистр
    for c in invalid_chars {
        result = result.replace(c, "_");
    }
    result
}

/// Derive the shared base name linking a stored video to its stored track.
/// Strips the final extension from the sanitized file name; names without
/// an extension (or dot-files like `.hidden`) are kept whole.
pub fn derive_base_name(file_name: &str) -> String {
    let sanitized = sanitize_filename(file_name);
    match sanitized.rsplit_once('.') {
        Some((base, _ext)) if !base.is_empty() => base.to_string(),
        _ => sanitized,
    }
}
