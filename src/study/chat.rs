use super::fixtures::{CHAT_GREETING, CHAT_REPLY};

/// Delay before the canned reply lands.
pub(crate) const REPLY_DELAY_MS: i32 = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Role {
    Assistant,
    User,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ChatMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ChatSession {
    messages: Vec<ChatMessage>,
    pending: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: Role::Assistant,
                content: CHAT_GREETING.to_string(),
            }],
            pending: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Appends the user's message and waits for a reply. Blank input and
    /// input sent while a reply is pending are refused.
    pub fn submit(&mut self, input: &str) -> bool {
        if self.pending || input.trim().is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            role: Role::User,
            content: input.to_string(),
        });
        self.pending = true;
        true
    }

    pub fn receive_reply(&mut self) {
        if !self.pending {
            return;
        }
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            content: CHAT_REPLY.to_string(),
        });
        self.pending = false;
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_greeting() {
        let chat = ChatSession::new();
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].role, Role::Assistant);
        assert!(!chat.is_pending());
    }

    #[test]
    fn test_submit_then_reply() {
        let mut chat = ChatSession::new();
        assert!(chat.submit("What is a neuron?"));
        assert!(chat.is_pending());
        assert_eq!(chat.messages()[1].role, Role::User);

        chat.receive_reply();
        assert!(!chat.is_pending());
        assert_eq!(chat.messages().len(), 3);
        assert!(chat.messages()[2].content.starts_with("Based on the document"));
    }

    #[test]
    fn test_blank_and_pending_submissions_are_refused() {
        let mut chat = ChatSession::new();
        assert!(!chat.submit("   "));
        assert!(chat.submit("one"));
        assert!(!chat.submit("two"));
        assert_eq!(chat.messages().len(), 2);
    }

    #[test]
    fn test_stray_reply_is_ignored() {
        let mut chat = ChatSession::new();
        chat.receive_reply();
        assert_eq!(chat.messages().len(), 1);
    }
}
