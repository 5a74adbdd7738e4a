//! Minimal Secrets Manager endpoint for CLI tests.
//!
//! Serves one request per connection on a loopback port and records every
//! request it sees. Responses are picked by the caller from the operation
//! name (`X-Amz-Target`) and the JSON request body.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// A recorded request.
#[derive(Debug, Clone)]
pub struct Request {
    /// Operation name, e.g. `GetSecretValue`
    pub operation: String,
    /// Raw JSON body
    pub body: String,
}

/// A canned response.
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    /// An AWS JSON protocol error.
    pub fn error(status: u16, code: &str, message: &str) -> Self {
        Self {
            status,
            body: format!(r#"{{"__type":"{}","message":"{}"}}"#, code, message),
        }
    }
}

/// Stub server running on a background thread.
pub struct StubAws {
    pub url: String,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl StubAws {
    pub fn start<F>(respond: F) -> Self
    where
        F: Fn(&Request) -> Reply + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind stub");
        let url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                serve(stream, &respond, &seen);
            }
        });

        Self { url, requests }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests for one operation.
    pub fn count(&self, operation: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.operation == operation)
            .count()
    }
}

fn serve<F>(mut stream: TcpStream, respond: &F, seen: &Mutex<Vec<Request>>) -> Option<()>
where
    F: Fn(&Request) -> Reply,
{
    let mut reader = BufReader::new(stream.try_clone().ok()?);
    let mut operation = String::new();
    let mut length = 0usize;

    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).ok()? == 0 {
            return None;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim();
            match name.to_ascii_lowercase().as_str() {
                "content-length" => length = value.parse().unwrap_or(0),
                "x-amz-target" => {
                    operation = value.rsplit('.').next().unwrap_or(value).to_string();
                }
                _ => {}
            }
        }
    }

    let mut body = vec![0u8; length];
    reader.read_exact(&mut body).ok()?;
    let request = Request {
        operation,
        body: String::from_utf8_lossy(&body).into_owned(),
    };

    // recorded before replying, so the count is final once the client exits
    seen.lock().unwrap().push(request.clone());
    let reply = respond(&request);
    let response = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: application/x-amz-json-1.1\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.status,
        reply.body.len(),
        reply.body
    );
    stream.write_all(response.as_bytes()).ok()?;
    stream.flush().ok()?;
    Some(())
}
