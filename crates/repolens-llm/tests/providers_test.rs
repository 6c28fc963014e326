use repolens_core::Completer;
use repolens_llm::{OllamaProvider, OpenAiProvider};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serve exactly one HTTP request with a canned response and hand back the
/// raw request text.
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    // Keep any configured HTTP proxy away from the loopback server.
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|l| {
                        let (name, value) = l.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
    });

    (format!("http://{}", addr), rx)
}

#[tokio::test]
async fn test_openai_sends_system_and_user_messages() {
    let (base, request) = serve_once(
        "200 OK",
        r#"{"choices":[{"message":{"role":"assistant","content":"an overview"}}]}"#,
    )
    .await;
    let provider = OpenAiProvider::new(
        "gpt-3.5-turbo".to_string(),
        "sk-test".to_string(),
        format!("{}/v1", base),
        "You are a helpful AI assistant that analyzes and explains code.".to_string(),
        10,
    )
    .unwrap();

    let text = provider.complete("Analyze this").await.unwrap();
    assert_eq!(text, "an overview");

    let request = request.await.unwrap();
    assert!(request.starts_with("POST /v1/chat/completions HTTP/1.1"));
    assert!(request
        .to_lowercase()
        .contains("authorization: bearer sk-test"));
    assert!(request.contains(r#""role":"system""#));
    assert!(request.contains(r#""content":"Analyze this""#));
}

#[tokio::test]
async fn test_openai_non_success_status_is_an_error() {
    let (base, _request) = serve_once("429 Too Many Requests", r#"{"error":"slow down"}"#).await;
    let provider = OpenAiProvider::new(
        "m".to_string(),
        "k".to_string(),
        base,
        "sys".to_string(),
        10,
    )
    .unwrap();

    let err = provider.complete("x").await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("429"), "{}", message);
    assert!(message.contains("slow down"), "{}", message);
}

#[tokio::test]
async fn test_ollama_disables_streaming() {
    let (base, request) = serve_once(
        "200 OK",
        r#"{"message":{"role":"assistant","content":"local answer"},"done":true}"#,
    )
    .await;
    let provider =
        OllamaProvider::new("llama3".to_string(), base, "sys".to_string(), 10).unwrap();

    assert_eq!(provider.complete("hi").await.unwrap(), "local answer");

    let request = request.await.unwrap();
    assert!(request.starts_with("POST /api/chat HTTP/1.1"));
    assert!(request.contains(r#""stream":false"#));
}
