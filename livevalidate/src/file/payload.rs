//! Self-describing payloads: `data:` URI construction and inspection.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Last dot-delimited segment of a filename, lowercased. `None` when the
/// name has no dot.
pub fn extension_of(path: &str) -> Option<String> {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let (_, ext) = name.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}

/// Normalize an accept list: lowercase, whitespace stripped, split on
/// commas, empty segments dropped.
pub fn normalize_accept(list: &str) -> Vec<String> {
    list.to_ascii_lowercase()
        .split(',')
        .map(|ext| ext.chars().filter(|c| !c.is_whitespace()).collect())
        .filter(|ext: &String| !ext.is_empty())
        .collect()
}

/// Content type for a filename extension. Unknown extensions yield a
/// generic binary type.
pub fn mime_for_extension(ext: &str) -> &'static str {
    match ext {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}

/// Wrap raw bytes as `data:<mime>;base64,<body>`.
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// The leading type token of a payload: the substring between `data:` and
/// the first `;`.
pub fn content_type_of(payload: &str) -> Option<String> {
    let rest = payload.strip_prefix("data:")?;
    let end = rest.find(';')?;
    Some(rest[..end].to_string())
}

/// Recover the raw bytes from a base64 `data:` URI.
pub fn decode_data_uri(payload: &str) -> Option<Vec<u8>> {
    let (_, body) = payload.split_once(";base64,")?;
    STANDARD.decode(body).ok()
}
