use crate::core::{Configuration, RawConfiguration, Result};
use crate::utils::error::FormatError;
use std::collections::HashMap;

/// 將原始兩行解析為型別化的設定
///
/// The version header is checked first; when it is invalid the body is
/// never decoded.
pub fn parse(raw: RawConfiguration) -> Result<Configuration> {
    let version = parse_version(&raw.header)?;
    let data = parse_data(&raw.body)?;

    tracing::debug!("Parsed configuration v{} with {} keys", version, data.len());

    Ok(Configuration { version, data })
}

fn parse_version(header: &[u8]) -> std::result::Result<u32, FormatError> {
    let text = std::str::from_utf8(header)
        .map_err(|e| FormatError::InvalidVersion(format!("header is not UTF-8: {}", e)))?;

    text.parse::<u32>()
        .map_err(|e| FormatError::InvalidVersion(format!("'{}': {}", text, e)))
}

fn parse_data(body: &[u8]) -> std::result::Result<HashMap<String, String>, FormatError> {
    serde_json::from_slice(body).map_err(FormatError::InvalidData)
}
