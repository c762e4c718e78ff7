// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only)

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

use crate::error::{Result, ScrapeError};

/// Fetch `url` and return the response body. Accepts absolute
/// http/https URLs; the request goes out as plain HTTP/1.0 on port 80.
pub fn http_get(url: &str) -> Result<String> {
    let (host, path) = split_url(url);

    let mut s = TcpStream::connect((host, 80))?;
    s.set_read_timeout(Some(Duration::from_secs(15)))?;
    s.set_write_timeout(Some(Duration::from_secs(15)))?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: ms_scrape/0.1\r\nConnection: close\r\n\r\n",
        path, host
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    let resp = String::from_utf8_lossy(&buf);

    let status = resp.split("\r\n").next().unwrap_or("");
    if !status.contains("200") {
        return Err(ScrapeError::Http(format!("{} {}", status, url)));
    }
    let body_idx = resp
        .find("\r\n\r\n")
        .ok_or_else(|| ScrapeError::Http(join!("malformed response from ", host)))?
        + 4;
    Ok(resp[body_idx..].to_string())
}

/// Split an absolute URL into (host, path). The scheme is dropped and
/// the path defaults to "/".
pub fn split_url(url: &str) -> (&str, &str) {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, "/"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_host_and_path() {
        assert_eq!(
            split_url("https://sc.milesplit.com/meets/123/results"),
            ("sc.milesplit.com", "/meets/123/results")
        );
        assert_eq!(split_url("http://example.com"), ("example.com", "/"));
        assert_eq!(split_url("example.com/x"), ("example.com", "/x"));
    }
}
