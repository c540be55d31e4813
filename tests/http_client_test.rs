// HTTP client tests against a one-shot local server.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use cw_careers::api::{HttpUserApi, UserApi};
use cw_careers::model::Draft;

/// Serve exactly one request with `status` and `body`; the handle yields the
/// raw request text.
fn serve_once(status: &'static str, body: &str) -> (String, JoinHandle<String>) {
    let body = body.to_string();
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let request = read_request(&mut stream);
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write");
        stream.flush().ok();
        request
    });
    (format!("http://{addr}"), handle)
}

fn read_request(stream: &mut impl Read) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).expect("read");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf).to_string();
        if let Some(head_end) = text.find("\r\n\r\n") {
            let content_length = text[..head_end]
                .lines()
                .filter_map(|l| l.split_once(':'))
                .find(|(k, _)| k.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, v)| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

fn client(base: &str) -> HttpUserApi {
    HttpUserApi::new(base, Duration::from_secs(5)).expect("client")
}

const JOHN: &str = r#"{"id":1,"fullName":"John Doe","dateOfBirth":"1990-01-01","preferredLocation":"Sydney","programmingSkills":["React","TypeScript"],"resumeSummary":"Full stack"}"#;

#[test]
fn create_posts_camel_case_json() {
    let (base, server) = serve_once("201 Created", JOHN);
    let draft = Draft {
        full_name: "John Doe".into(),
        date_of_birth: "1990-01-01".into(),
        preferred_location: "Sydney".into(),
        programming_skills: vec!["React".into()],
        resume_summary: "Full stack".into(),
    };
    let user = client(&base).create_user(&draft).expect("created");
    assert_eq!(user.id, 1);
    // unknown skills from the backend are kept
    assert_eq!(user.programming_skills, vec!["React", "TypeScript"]);

    let raw = server.join().unwrap();
    assert!(raw.starts_with("POST /users HTTP/1.1"));
    assert!(raw.to_ascii_lowercase().contains("content-type: application/json"));
    let body = &raw[raw.find("\r\n\r\n").unwrap() + 4..];
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["fullName"], "John Doe");
    assert_eq!(json["dateOfBirth"], "1990-01-01");
    assert_eq!(json["preferredLocation"], "Sydney");
    assert_eq!(json["programmingSkills"], serde_json::json!(["React"]));
    assert_eq!(json["resumeSummary"], "Full stack");
}

#[test]
fn list_decodes_users() {
    let (base, server) = serve_once("200 OK", &format!("[{JOHN}]"));
    let users = client(&base).get_users().expect("users");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].full_name, "John Doe");
    assert!(server.join().unwrap().starts_with("GET /users HTTP/1.1"));
}

#[test]
fn get_by_id_uses_server_message() {
    let (base, server) = serve_once("404 Not Found", r#"{"message":"User not found"}"#);
    let err = client(&base).get_user_by_id(42).unwrap_err();
    assert_eq!(err.message, "User not found");
    assert!(server.join().unwrap().starts_with("GET /users/42 HTTP/1.1"));
}

#[test]
fn message_lists_are_joined() {
    let (base, server) = serve_once(
        "400 Bad Request",
        r#"{"message":["fullName must be shorter","resumeSummary should not be empty"],"error":"Bad Request","statusCode":400}"#,
    );
    let err = client(&base).create_user(&Draft::default()).unwrap_err();
    assert_eq!(
        err.message,
        "fullName must be shorter, resumeSummary should not be empty"
    );
    server.join().unwrap();
}

#[test]
fn bodies_without_message_fall_back_to_defaults() {
    let (base, server) = serve_once("500 Internal Server Error", "");
    let err = client(&base).get_users().unwrap_err();
    assert_eq!(err.message, "Failed to fetch users");
    server.join().unwrap();

    let (base, server) = serve_once("200 OK", "not json");
    let err = client(&base).get_user_by_id(1).unwrap_err();
    assert_eq!(err.message, "Failed to fetch user");
    server.join().unwrap();
}

#[test]
fn unreachable_backend_yields_default_message() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let api = client(&format!("http://127.0.0.1:{port}"));
    assert_eq!(api.get_users().unwrap_err().message, "Failed to fetch users");
    assert_eq!(
        api.create_user(&Draft::default()).unwrap_err().message,
        "Failed to create user"
    );
}
