//! Ollama chat client
//!
//! Sends one streaming `/api/chat` request over a plain TCP connection and
//! concatenates the streamed reply.
//!
//! # Wire Protocol
//!
//! ```text
//! POST /api/chat HTTP/1.0          (HTTP/1.0: body ends when the socket closes)
//! {"model": ..., "messages": [...], "stream": true}
//!
//! HTTP/1.1 200 OK
//! {"message":{"role":"assistant","content":"There"},"done":false}
//! {"message":{"role":"assistant","content":" is"},"done":false}
//! {"done":true}
//! ```

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpStream;
use std::time::Duration;
use serde::Deserialize;
use tracing::debug;
use crate::config::MessageConfig;
use crate::message::{MessageError, MessageSource};

/// Upper bound on a response body; replies are a few words
pub const MAX_BODY_BYTES: usize = 1 << 20;

/// One line of the streamed response
#[derive(Debug, Deserialize)]
struct ChatChunk {
    #[serde(default)]
    message: Option<ChunkMessage>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    done: bool,
}

#[derive(Debug, Deserialize)]
struct ChunkMessage {
    #[serde(default)]
    content: String,
}

/// Client for a local Ollama server
#[derive(Debug, Clone)]
pub struct OllamaClient {
    host: String,
    model: String,
    prompt: String,
    timeout: Option<Duration>,
}

impl OllamaClient {
    pub fn new(host: impl Into<String>, model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            model: model.into(),
            prompt: prompt.into(),
            timeout: None,
        }
    }

    pub fn from_config(config: &MessageConfig) -> Self {
        Self::new(&config.host, &config.model, &config.prompt).with_timeout(config.timeout())
    }

    /// Socket read/write timeout (`None` blocks until the server answers)
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send the fixed prompt and collect the streamed reply
    pub fn chat(&self) -> Result<String, MessageError> {
        let mut stream = TcpStream::connect(&self.host)?;
        stream.set_read_timeout(self.timeout)?;
        stream.set_write_timeout(self.timeout)?;

        let body = request_body(&self.model, &self.prompt);
        write!(
            stream,
            "POST /api/chat HTTP/1.0\r\nHost: {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
            self.host,
            body.len(),
            body
        )?;
        stream.flush()?;
        debug!(host = %self.host, model = %self.model, "chat request sent");

        read_chat_response(BufReader::new(stream))
    }
}

impl MessageSource for OllamaClient {
    fn fetch(&self) -> Result<String, MessageError> {
        self.chat()
    }
}

/// JSON body for a single-turn streaming chat
pub fn request_body(model: &str, prompt: &str) -> String {
    serde_json::json!({
        "model": model,
        "messages": [{ "role": "user", "content": prompt }],
        "stream": true,
    })
    .to_string()
}

/// Parse an HTTP response carrying newline-delimited chat chunks
pub fn read_chat_response<R: BufRead>(mut reader: R) -> Result<String, MessageError> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let code = parse_status_line(&line)?;

    let mut chunked = false;
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let header = line.trim();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            if name.trim().eq_ignore_ascii_case("transfer-encoding")
                && value.trim().eq_ignore_ascii_case("chunked")
            {
                chunked = true;
            }
        }
    }

    let body = if chunked {
        read_chunked_body(&mut reader)?
    } else {
        let mut body = Vec::new();
        reader.by_ref().take(MAX_BODY_BYTES as u64 + 1).read_to_end(&mut body)?;
        if body.len() > MAX_BODY_BYTES {
            return Err(MessageError::Malformed(format!("body exceeds {} bytes", MAX_BODY_BYTES)));
        }
        body
    };
    let body = String::from_utf8_lossy(&body);

    if code != 200 {
        return Err(MessageError::Status { code, body: body.trim().to_string() });
    }

    let mut message = String::new();
    for chunk_line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let chunk: ChatChunk = serde_json::from_str(chunk_line)?;
        if let Some(error) = chunk.error {
            return Err(MessageError::Service(error));
        }
        if let Some(m) = chunk.message {
            message.push_str(&m.content);
        }
        if chunk.done {
            break;
        }
    }
    Ok(message.trim().to_string())
}

fn parse_status_line(line: &str) -> Result<u16, MessageError> {
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next().and_then(|c| c.parse().ok())) {
        (Some(proto), Some(code)) if proto.starts_with("HTTP/") => Ok(code),
        _ => Err(MessageError::Malformed(format!("bad status line: {:?}", line.trim()))),
    }
}

fn read_chunked_body<R: BufRead>(reader: &mut R) -> Result<Vec<u8>, MessageError> {
    let mut body = Vec::new();
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let size_field = line.trim().split(';').next().unwrap_or("");
        let size = usize::from_str_radix(size_field, 16)
            .map_err(|_| MessageError::Malformed(format!("bad chunk size: {:?}", size_field)))?;
        if size == 0 {
            break;
        }
        let end = body.len().checked_add(size).filter(|&end| end <= MAX_BODY_BYTES);
        let Some(end) = end else {
            return Err(MessageError::Malformed(format!("chunk of {} bytes exceeds body limit", size)));
        };
        reader.by_ref().take(size as u64).read_to_end(&mut body)?;
        if body.len() != end {
            return Err(MessageError::Malformed("truncated chunk".to_string()));
        }
        line.clear();
        reader.read_line(&mut line)?; // CRLF after chunk data
    }
    Ok(body)
}
