#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use movie_crawler::config::CrawlConfig;

/// How the stub answers a given path.
#[derive(Clone)]
pub enum Reply {
    Html(String),
    /// UTF-8 body served with a wrong charset in Content-Type
    Latin1Labelled(String),
    Status(u16),
    /// Accept the connection and never answer
    Hang,
}

#[derive(Debug, Clone)]
pub struct Request {
    pub path: String,
    pub user_agent: Option<String>,
}

/// Minimal HTTP/1.1 server on 127.0.0.1 serving canned replies.
/// Unknown paths get a 404.
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl StubServer {
    pub async fn start(routes: Vec<(&str, Reply)>) -> Self {
        let routes: Arc<HashMap<String, Reply>> = Arc::new(
            routes.into_iter().map(|(path, reply)| (path.to_string(), reply)).collect(),
        );
        let requests = Arc::new(Mutex::new(Vec::new()));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let log = requests.clone();
        tokio::spawn(async move {
            while let Ok((socket, _)) = listener.accept().await {
                tokio::spawn(handle(socket, routes.clone(), log.clone()));
            }
        });

        StubServer { base_url: format!("http://{addr}/page/"), requests }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requested_paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }
}

async fn handle(
    mut socket: TcpStream,
    routes: Arc<HashMap<String, Reply>>,
    log: Arc<Mutex<Vec<Request>>>,
) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }

    let head = String::from_utf8_lossy(&buf).into_owned();
    let path = head.split_whitespace().nth(1).unwrap_or("/").to_string();
    let user_agent = head.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        name.eq_ignore_ascii_case("user-agent").then(|| value.trim().to_string())
    });
    log.lock().unwrap().push(Request { path: path.clone(), user_agent });

    let response = match routes.get(&path) {
        Some(Reply::Html(body)) => ok_response("text/html; charset=utf-8", body),
        Some(Reply::Latin1Labelled(body)) => ok_response("text/html; charset=iso-8859-1", body),
        Some(Reply::Status(code)) => status_response(*code),
        Some(Reply::Hang) => {
            tokio::time::sleep(Duration::from_secs(30)).await;
            return;
        }
        None => status_response(404),
    };

    let _ = socket.write_all(&response).await;
    let _ = socket.shutdown().await;
}

fn ok_response(content_type: &str, body: &str) -> Vec<u8> {
    let mut out = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    )
    .into_bytes();
    out.extend_from_slice(body.as_bytes());
    out
}

fn status_response(code: u16) -> Vec<u8> {
    format!("HTTP/1.1 {code} Stub\r\nContent-Length: 0\r\nConnection: close\r\n\r\n").into_bytes()
}

/// One `.item` card shaped like the real listing markup.
pub fn item(title: &str, image: &str, score: &str, genres: &[&str]) -> String {
    let buttons: String = genres
        .iter()
        .map(|g| format!("<button type=\"button\" class=\"el-button category\"><span>{g}</span></button>"))
        .collect();
    format!(
        r#"<div class="el-card item m-t is-hover-shadow"><div class="el-card__body">
             <a href="/detail/1"><img src="{image}" class="cover"></a>
             <a href="/detail/1" class="name"><h2 class="m-b-sm">{title}</h2></a>
             <div class="categories">{buttons}</div>
             <p class="score m-t-md m-b-n-sm">
               {score}</p>
           </div></div>"#
    )
}

pub fn listing(items: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head><body><div id=\"index\">{}</div></body></html>",
        items.concat()
    )
}

pub fn tmp_file(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("movie_crawler_it_{}_{}", std::process::id(), name));
    let _ = std::fs::remove_file(&p);
    p
}

pub fn config(server: &StubServer, start_page: u32, end_page: u32) -> CrawlConfig {
    CrawlConfig {
        base_url: server.base_url.clone(),
        start_page,
        end_page,
        timeout: Duration::from_millis(500),
        page_delay: Duration::ZERO,
        ..CrawlConfig::default()
    }
}
