//! csz-server: stdin/stdout JSON protocol for the IDE services.
//!
//! Protocol:
//! - Input: JSON objects on stdin (one per line)
//! - Output: JSON objects on stdout (one per line)
//!
//! Request types:
//! ```json
//! {"type": "completion", "id": 1, "file": "a.cs", "text": "class C { }", "line": 0, "character": 10}
//! {"type": "autoInsert", "id": 2, "file": "a.cs", "text": "///", "line": 0, "character": 3, "ch": "/"}
//! {"type": "status", "id": 3}
//! {"type": "shutdown", "id": 4}
//! ```
//!
//! Usage:
//! ```bash
//! echo '{"type":"completion","id":1,"file":"a.cs","text":"class C {  }","line":0,"character":10}' | csz-server
//! ```

use std::io::{BufRead, BufReader, Write};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use csz_common::Position;
use csz_lsp::{
    BuiltinAutoInsert, CompletionItem, DocumentStore, KeywordCompletions, OnAutoInsertParams,
    OnAutoInsertResponseItem, TextDocumentIdentifier, on_auto_insert,
};

/// Request from client
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum Request {
    /// Keyword completion at a position
    Completion {
        id: u64,
        file: String,
        text: String,
        line: u32,
        character: u32,
    },
    /// Auto-insert edit for a typed trigger character
    AutoInsert {
        id: u64,
        file: String,
        text: String,
        line: u32,
        character: u32,
        ch: String,
    },
    /// Get server status (requests completed, open documents)
    Status { id: u64 },
    /// Graceful shutdown
    Shutdown { id: u64 },
}

/// Response to client
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Response {
    Completion(CompletionResponse),
    AutoInsert(AutoInsertResponse),
    Status(StatusResponse),
    Ok(OkResponse),
    Error(ErrorResponse),
}

#[derive(Debug, Serialize)]
struct CompletionResponse {
    id: u64,
    items: Vec<CompletionItem>,
}

#[derive(Debug, Serialize)]
struct AutoInsertResponse {
    id: u64,
    result: Option<OnAutoInsertResponseItem>,
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    id: u64,
    requests_completed: u64,
    open_documents: usize,
}

#[derive(Debug, Serialize)]
struct OkResponse {
    id: u64,
    ok: bool,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    id: u64,
    error: String,
}

/// Server state
struct Server {
    documents: DocumentStore,
    auto_insert: BuiltinAutoInsert,
    requests_completed: u64,
}

impl Server {
    fn new() -> Self {
        Self {
            documents: DocumentStore::new(),
            auto_insert: BuiltinAutoInsert::new(),
            requests_completed: 0,
        }
    }

    fn handle_request(&mut self, request: Request) -> Response {
        match request {
            Request::Completion {
                id,
                file,
                text,
                line,
                character,
            } => self.handle_completion(id, file, text, line, character),
            Request::AutoInsert {
                id,
                file,
                text,
                line,
                character,
                ch,
            } => self.handle_auto_insert(id, file, text, line, character, ch),
            Request::Status { id } => self.handle_status(id),
            Request::Shutdown { id } => Response::Ok(OkResponse { id, ok: true }),
        }
    }

    fn handle_completion(
        &mut self,
        id: u64,
        file: String,
        text: String,
        line: u32,
        character: u32,
    ) -> Response {
        let provider = KeywordCompletions::new(&text);
        let items = provider.provide(Position::new(line, character));
        self.documents.open(file, text);
        self.requests_completed += 1;
        Response::Completion(CompletionResponse { id, items })
    }

    fn handle_auto_insert(
        &mut self,
        id: u64,
        file: String,
        text: String,
        line: u32,
        character: u32,
        ch: String,
    ) -> Response {
        self.documents.open(file.clone(), text);
        let params = OnAutoInsertParams {
            text_document: TextDocumentIdentifier { uri: file },
            position: Position::new(line, character),
            ch,
        };
        let result = on_auto_insert(&self.documents, Some(&self.auto_insert), &params);
        self.requests_completed += 1;
        Response::AutoInsert(AutoInsertResponse { id, result })
    }

    fn handle_status(&self, id: u64) -> Response {
        Response::Status(StatusResponse {
            id,
            requests_completed: self.requests_completed,
            open_documents: self.documents.len(),
        })
    }
}

fn main() -> Result<()> {
    // Initialize tracing (stderr so it doesn't interfere with protocol)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut server = Server::new();

    // Signal readiness
    eprintln!("csz-server ready");

    let stdin = BufReader::new(std::io::stdin());
    let mut stdout = std::io::stdout();

    for line in stdin.lines() {
        let line = line.context("failed to read from stdin")?;

        // Skip empty lines
        if line.trim().is_empty() {
            continue;
        }

        // Parse request
        let request: Request = match serde_json::from_str(&line) {
            Ok(req) => req,
            Err(e) => {
                let error_response = Response::Error(ErrorResponse {
                    id: 0,
                    error: format!("invalid request: {e}"),
                });
                writeln!(stdout, "{}", serde_json::to_string(&error_response)?)?;
                stdout.flush()?;
                continue;
            }
        };

        // Exit after answering a shutdown
        let is_shutdown = matches!(request, Request::Shutdown { .. });

        let response = server.handle_request(request);

        writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
        stdout.flush()?;

        if is_shutdown {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_request_round_trip() {
        let mut server = Server::new();
        let request: Request = serde_json::from_str(
            r#"{"type":"completion","id":1,"file":"a.cs","text":"class C { void M() {  } }","line":0,"character":21}"#,
        )
        .unwrap();
        let response = server.handle_request(request);
        let Response::Completion(completion) = response else {
            panic!("expected completion response");
        };
        assert_eq!(completion.id, 1);
        assert!(completion.items.iter().any(|i| i.label == "return"));
    }

    #[test]
    fn test_auto_insert_request() {
        let mut server = Server::new();
        let request: Request = serde_json::from_str(
            r#"{"type":"autoInsert","id":2,"file":"a.cs","text":"///","line":0,"character":3,"ch":"/"}"#,
        )
        .unwrap();
        let Response::AutoInsert(auto_insert) = server.handle_request(request) else {
            panic!("expected auto-insert response");
        };
        assert_eq!(auto_insert.id, 2);
        let result = auto_insert.result.unwrap();
        assert!(result.text_edit.new_text.contains("<summary>"));
    }

    #[test]
    fn test_status_counts_requests() {
        let mut server = Server::new();
        let completion: Request = serde_json::from_str(
            r#"{"type":"completion","id":1,"file":"a.cs","text":"","line":0,"character":0}"#,
        )
        .unwrap();
        server.handle_request(completion);

        let Response::Status(status) = server.handle_status(7) else {
            panic!("expected status response");
        };
        assert_eq!(status.id, 7);
        assert_eq!(status.requests_completed, 1);
        assert_eq!(status.open_documents, 1);
    }

    #[test]
    fn test_invalid_request_is_an_error_not_a_crash() {
        let parsed: std::result::Result<Request, _> = serde_json::from_str(r#"{"type":"bogus"}"#);
        assert!(parsed.is_err());
    }
}
