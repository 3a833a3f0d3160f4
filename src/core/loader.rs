use crate::core::{RawConfiguration, Result, Source};
use std::io::{self, BufRead};
use std::path::Path;

/// 讀取設定檔的前兩行：標頭與內容
///
/// The reader obtained from `source` is dropped before this returns, on
/// success and on every error path.
pub fn load<S: Source>(source: &S, path: &Path) -> Result<RawConfiguration> {
    let mut reader = source.open(path)?;

    let header = read_line(&mut reader, "header")?;
    let body = read_line(&mut reader, "body")?;

    tracing::debug!(
        "Loaded {}: header {} bytes, body {} bytes",
        path.display(),
        header.len(),
        body.len()
    );

    Ok(RawConfiguration { header, body })
}

fn read_line<R: BufRead>(reader: &mut R, name: &str) -> io::Result<Vec<u8>> {
    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("truncated input: missing {} line", name),
        ));
    }

    // 只移除行尾的換行符號
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }

    Ok(line)
}
