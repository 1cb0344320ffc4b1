use crate::models::{Message, MessageKind, Sender};

/// Ordered, append-only record of the conversation shown on screen.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sender: Sender, text: impl Into<String>) -> &Message {
        self.append(Message::new(sender, text, MessageKind::Normal))
    }

    pub fn push_error(&mut self, text: impl Into<String>) -> &Message {
        self.append(Message::new(Sender::Ai, text, MessageKind::Error))
    }

    fn append(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_keep_production_order() {
        let mut transcript = Transcript::new();
        transcript.push(Sender::User, "first");
        transcript.push(Sender::Ai, "second");
        transcript.push_error("third");

        let texts: Vec<&str> = transcript.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["first", "second", "third"]);
        assert_eq!(transcript.len(), 3);
    }

    #[test]
    fn errors_are_ai_messages() {
        let mut transcript = Transcript::new();
        let message = transcript.push_error("boom");
        assert_eq!(message.sender, Sender::Ai);
        assert!(message.is_error());
    }
}
