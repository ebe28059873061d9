//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves fixed responses keyed by request path and records every requested
//! path. Unknown paths get 404.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: &'static str,
    pub headers: Vec<String>,
    pub body: Vec<u8>,
}

impl Route {
    pub fn ok(body: Vec<u8>) -> Self {
        Self {
            status: "200 OK",
            headers: Vec::new(),
            body,
        }
    }

    pub fn status(status: &'static str, body: &[u8]) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.to_vec(),
        }
    }

    pub fn redirect(location: &str) -> Self {
        Self {
            status: "302 Found",
            headers: vec![format!("Location: {}", location)],
            body: Vec::new(),
        }
    }
}

pub struct PathsServer {
    /// Base URL with trailing slash, e.g. "http://127.0.0.1:12345/".
    pub base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl PathsServer {
    /// Paths requested so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. The server runs until the process exits.
pub fn start(routes: HashMap<String, Route>) -> PathsServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(routes);
    let requests = Arc::new(Mutex::new(Vec::new()));
    let requests_srv = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let requests = Arc::clone(&requests_srv);
            thread::spawn(move || handle(stream, &routes, &requests));
        }
    });
    PathsServer {
        base: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

/// Returns a URL on 127.0.0.1 where nothing listens.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/crawl-data/x/warc.paths.gz", port)
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, Route>,
    requests: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(10)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    requests.lock().unwrap().push(path.clone());

    let not_found = Route::status("404 Not Found", b"<Error><Code>NoSuchKey</Code></Error>");
    let route = routes.get(&path).unwrap_or(&not_found);
    let mut head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        route.status,
        route.body.len()
    );
    for h in &route.headers {
        head.push_str(h);
        head.push_str("\r\n");
    }
    head.push_str("\r\n");
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&route.body);
}
