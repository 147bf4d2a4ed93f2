use web_sys::window;

fn location_parts() -> (String, String) {
    let window = window().expect("no global window");
    let location = window.location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "localhost:8080".to_string());
    (protocol, host)
}

/// Build a full API URL from a path (e.g., "/api/config" -> "https://myapp.com/api/config")
pub fn api_url(path: &str) -> String {
    let (protocol, host) = location_parts();
    format!("{}//{}{}", protocol, host, path)
}

/// Build a full WebSocket URL from a path (e.g., "/ws/session" -> "wss://myapp.com/ws/session")
pub fn ws_url(path: &str) -> String {
    let (protocol, host) = location_parts();
    let ws_protocol = if protocol == "https:" { "wss:" } else { "ws:" };
    format!("{}//{}{}", ws_protocol, host, path)
}
