//! Minimal HTTP/1.1 server replaying scripted JSON responses for integration tests.
//!
//! Each request consumes the next `(status, body)` pair; once the script is
//! exhausted the last response is repeated. Request targets are recorded so
//! tests can assert on paths and query strings.

use std::collections::VecDeque;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

pub struct RecordsServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl RecordsServer {
    /// Request targets seen so far (e.g. `/pangzhan/?skip=0&limit=50`).
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. Runs until the process exits.
pub fn start(script: Vec<(u16, String)>) -> RecordsServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let script = Arc::new(Mutex::new(VecDeque::from(script)));
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    thread::spawn(move || {
        let mut last: Option<(u16, String)> = None;
        for stream in listener.incoming().flatten() {
            let next = script.lock().unwrap().pop_front();
            if let Some(resp) = next {
                last = Some(resp);
            }
            if let Some((status, body)) = last.clone() {
                handle(stream, status, &body, &seen);
            }
        }
    });
    RecordsServer {
        base_url: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

fn handle(mut stream: TcpStream, status: u16, body: &str, seen: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    if let Some(target) = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
    {
        seen.lock().unwrap().push(target.to_string());
    }
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        _ => "Unknown",
    }
}
