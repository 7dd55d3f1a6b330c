use docroot::http::parser::{ParseError, parse_http_request};
use docroot::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
}

#[test]
fn test_parse_lf_only_line_endings() {
    let req = b"GET /style.css HTTP/1.1\nHost: example.com\nAccept: */*\n\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/style.css");
    assert_eq!(parsed.headers.get("Accept").unwrap(), "*/*");
}

#[test]
fn test_parse_request_line_only() {
    let parsed = parse_http_request(b"GET /index.html HTTP/1.0").unwrap();

    assert_eq!(parsed.path, "/index.html");
    assert_eq!(parsed.version, "HTTP/1.0");
    assert!(parsed.headers.is_empty());
}

#[test]
fn test_parse_multiple_headers() {
    let req = b"GET /path HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
    assert_eq!(parsed.headers.get("User-Agent").unwrap(), "test-client");
    assert_eq!(parsed.headers.get("Accept").unwrap(), "*/*");
}

#[test]
fn test_parse_header_value_keeps_later_separators() {
    let req = b"GET / HTTP/1.1\r\nX-Note: a: b\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.get("X-Note").unwrap(), "a: b");
}

#[test]
fn test_parse_duplicate_header_last_wins() {
    let req = b"GET / HTTP/1.1\r\nX-Dup: first\r\nX-Dup: second\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.get("X-Dup").unwrap(), "second");
    assert_eq!(parsed.headers.len(), 1);
}

#[test]
fn test_parse_ignores_lines_without_separator() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\nNoSpace:value\r\nHost: a\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.len(), 1);
    assert_eq!(parsed.headers.get("Host").unwrap(), "a");
}

#[test]
fn test_parse_header_case_preservation() {
    let req = b"GET / HTTP/1.1\r\ncontent-TYPE: text/html\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert!(parsed.headers.contains_key("content-TYPE"));
}

#[test]
fn test_parse_unknown_method_is_not_an_error() {
    let parsed = parse_http_request(b"BREW /pot HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(parsed.method, Method::Extension("BREW".to_string()));
}

#[test]
fn test_parse_method_case_insensitive() {
    let parsed = parse_http_request(b"get / HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(parsed.method, Method::GET);
}

#[test]
fn test_parse_various_http_methods() {
    let methods = vec![
        ("GET", Method::GET),
        ("POST", Method::POST),
        ("PUT", Method::PUT),
        ("DELETE", Method::DELETE),
        ("HEAD", Method::HEAD),
        ("OPTIONS", Method::OPTIONS),
        ("PATCH", Method::PATCH),
    ];

    for (method_str, expected_method) in methods {
        let req = format!("{} / HTTP/1.1\r\n\r\n", method_str);
        let parsed = parse_http_request(req.as_bytes()).unwrap();
        assert_eq!(parsed.method, expected_method);
    }
}

#[test]
fn test_parse_empty_input() {
    assert_eq!(parse_http_request(b"").unwrap_err(), ParseError::Empty);
}

#[test]
fn test_parse_empty_first_line() {
    assert_eq!(
        parse_http_request(b"\r\nHost: a\r\n\r\n").unwrap_err(),
        ParseError::Empty
    );
}

#[test]
fn test_parse_too_few_tokens() {
    for line in ["GET", "GET /", "GET / ", " / HTTP/1.1"] {
        let result = parse_http_request(line.as_bytes());
        assert!(
            matches!(result, Err(ParseError::InvalidRequestLine(_))),
            "{line:?} should be rejected"
        );
    }
}

#[test]
fn test_parse_too_many_tokens() {
    let result = parse_http_request(b"GET / HTTP/1.1 extra\r\n\r\n");

    assert!(matches!(result, Err(ParseError::InvalidRequestLine(_))));
}

#[test]
fn test_parse_double_space_rejected() {
    let result = parse_http_request(b"GET  / HTTP/1.1\r\n\r\n");

    assert!(matches!(result, Err(ParseError::InvalidRequestLine(_))));
}

#[test]
fn test_parse_invalid_utf8() {
    let result = parse_http_request(b"GET /\xff\xfe HTTP/1.1\r\n\r\n");

    assert_eq!(result.unwrap_err(), ParseError::InvalidEncoding);
}

#[test]
fn test_parse_path_without_slash_is_left_to_resolver() {
    let parsed = parse_http_request(b"GET index.html HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(parsed.path, "index.html");
}

#[test]
fn test_parse_trailing_partial_character_dropped() {
    let mut req = "GET /index.html HTTP/1.1\r\nX-Name: pâté".as_bytes().to_vec();
    req.pop();
    let parsed = parse_http_request(&req).unwrap();

    assert_eq!(parsed.path, "/index.html");
    assert_eq!(parsed.headers.get("X-Name").unwrap(), "pât");
}

#[test]
fn test_parse_invalid_byte_before_end_rejected() {
    let req = b"GET / HTTP/1.1\r\nX-Bad: \xc3(\r\n\r\n";

    assert_eq!(parse_http_request(req).unwrap_err(), ParseError::InvalidEncoding);
}
