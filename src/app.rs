use crate::api::WebhookClient;
use crate::console::DevConsole;
use crate::reply::Reply;
use crate::session::ChatSession;
use crate::status_indicator::StatusIndicator;
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Chat,
    QuitConfirm,
    Quit,
}

pub struct App {
    pub state: AppState,
    pub session: ChatSession,
    pub console: DevConsole,
    pub status_indicator: StatusIndicator,
    client: Arc<WebhookClient>,
    reply_sender: mpsc::Sender<Reply>,
}

impl App {
    /// Replies from spawned requests arrive on the receiver paired with
    /// `reply_sender`; feed them back through [`App::apply_reply`].
    pub fn new(client: WebhookClient, reply_sender: mpsc::Sender<Reply>) -> App {
        let mut console = DevConsole::new();
        console.add(format!("Webhook: {}", client.url()));

        App {
            state: AppState::Chat,
            session: ChatSession::new(),
            console,
            status_indicator: StatusIndicator::new(),
            client: Arc::new(client),
            reply_sender,
        }
    }

    /// Starts a turn if the send control is enabled. The request runs on its
    /// own task. Must be called from within a tokio runtime.
    pub fn send(&mut self) -> bool {
        let Some(query) = self.session.begin_send() else {
            return false;
        };

        self.console.add(format!(
            "Sending query ({} chars)...",
            query.chars().count()
        ));
        self.status_indicator.clear_status();
        self.status_indicator.set_waiting(true);

        let client = Arc::clone(&self.client);
        let reply_sender = self.reply_sender.clone();
        tokio::spawn(async move {
            let reply = client.send_query(&query).await;
            if reply_sender.send(reply).await.is_err() {
                log::warn!("Reply dropped: the UI is no longer listening");
            }
        });

        true
    }

    pub fn apply_reply(&mut self, reply: Reply) {
        match reply.detail() {
            Some(detail) => self
                .console
                .add(format!("Reply: {} ({})", reply.label(), detail)),
            None => self.console.add(format!("Reply: {}", reply.label())),
        }
        if reply.is_error() {
            self.status_indicator.set_status("Last request failed");
        }
        self.status_indicator.set_waiting(false);
        self.session.complete(reply);
    }

    pub fn webhook_url(&self) -> &str {
        self.client.url()
    }

    pub fn request_quit(&mut self) {
        self.state = AppState::QuitConfirm;
    }

    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sender;
    use serde_json::json;
    use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

    async fn app_for(server: &MockServer) -> (App, mpsc::Receiver<Reply>) {
        let (tx, rx) = mpsc::channel(4);
        let client = WebhookClient::new(server.uri(), None).unwrap();
        (App::new(client, tx), rx)
    }

    #[tokio::test]
    async fn send_spawns_request_and_reply_completes_turn() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "pong" })))
            .expect(1)
            .mount(&mock_server)
            .await;
        let (mut app, mut replies) = app_for(&mock_server).await;

        app.session.set_input("ping");
        assert!(app.send());
        assert!(app.session.is_waiting());
        assert!(app.status_indicator.is_waiting());

        let reply = replies.recv().await.unwrap();
        app.apply_reply(reply);

        let messages: Vec<_> = app.session.transcript().iter().collect();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[0].text, "ping");
        assert_eq!(messages[1].sender, Sender::Ai);
        assert_eq!(messages[1].text, "pong");
        assert!(!app.session.is_waiting());
        assert!(!app.status_indicator.is_waiting());
    }

    #[tokio::test]
    async fn send_with_blank_input_does_nothing() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;
        let (mut app, mut replies) = app_for(&mock_server).await;

        app.session.set_input("  ");
        assert!(!app.send());
        assert!(app.session.transcript().is_empty());
        assert!(replies.try_recv().is_err());
    }

    #[tokio::test]
    async fn failed_reply_leaves_send_enabled() {
        let mock_server = MockServer::start().await;
        let (mut app, _replies) = app_for(&mock_server).await;

        app.session.set_input("hello");
        app.send();
        app.apply_reply(Reply::Network("dns failure".to_string()));
        app.session.set_input("retry by hand");

        assert!(app.session.can_send());
        assert!(app
            .session
            .transcript()
            .last()
            .unwrap()
            .text
            .contains("dns failure"));
    }

    #[tokio::test]
    async fn failure_details_reach_the_console() {
        let mock_server = MockServer::start().await;
        let (mut app, _replies) = app_for(&mock_server).await;

        app.apply_reply(Reply::NotJson {
            excerpt: "oops".to_string(),
        });
        app.apply_reply(Reply::Network("dns failure".to_string()));
        app.apply_reply(Reply::HttpStatus(500));

        let entries = &app.console.entries;
        assert!(entries.iter().any(|e| e.ends_with("Reply: not-json (\"oops\")")));
        assert!(entries.iter().any(|e| e.ends_with("Reply: network (dns failure)")));
        assert!(entries.iter().any(|e| e.ends_with("Reply: http-status (status 500)")));
    }
}
