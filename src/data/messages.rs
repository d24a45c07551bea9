// Patient message threads for the Messages screen.

use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Doctor,
    Patient,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: u32,
    pub conversation_id: u32,
    pub sender: Sender,
    pub content: &'static str,
    pub timestamp: &'static str,
    pub read: bool,
}

#[derive(Debug, Clone)]
pub struct Conversation {
    pub id: u32,
    pub patient_id: u32,
    pub last_message: &'static str,
    pub last_message_time: &'static str,
    pub unread_count: u32,
}

pub fn conversations() -> &'static [Conversation] {
    static CONVERSATIONS: OnceLock<Vec<Conversation>> = OnceLock::new();
    CONVERSATIONS.get_or_init(|| {
        vec![
            Conversation {
                id: 1,
                patient_id: 1,
                last_message: "I've been experiencing some dizziness in the mornings. Is this normal?",
                last_message_time: "2024-12-07T14:30:00Z",
                unread_count: 1,
            },
            Conversation {
                id: 2,
                patient_id: 3,
                last_message: "The new medication is working well, thank you!",
                last_message_time: "2024-12-06T09:15:00Z",
                unread_count: 0,
            },
            Conversation {
                id: 3,
                patient_id: 5,
                last_message: "Can we reschedule my appointment to next week?",
                last_message_time: "2024-12-05T16:45:00Z",
                unread_count: 0,
            },
            Conversation {
                id: 4,
                patient_id: 2,
                last_message: "I need a refill on my prescription",
                last_message_time: "2024-12-04T11:20:00Z",
                unread_count: 0,
            },
            Conversation {
                id: 5,
                patient_id: 7,
                last_message: "I'm having some side effects from the new medication",
                last_message_time: "2024-12-03T13:10:00Z",
                unread_count: 0,
            },
        ]
    })
}

pub fn messages() -> &'static [ChatMessage] {
    static MESSAGES: OnceLock<Vec<ChatMessage>> = OnceLock::new();
    MESSAGES.get_or_init(|| {
        vec![
            ChatMessage {
                id: 1,
                conversation_id: 1,
                sender: Sender::Patient,
                content: "Hello Dr. Mitchell, I've been experiencing some dizziness in the mornings. Is this normal?",
                timestamp: "2024-12-07T14:30:00Z",
                read: false,
            },
            ChatMessage {
                id: 2,
                conversation_id: 2,
                sender: Sender::Patient,
                content: "The new medication is working well, thank you!",
                timestamp: "2024-12-06T09:15:00Z",
                read: true,
            },
            ChatMessage {
                id: 3,
                conversation_id: 2,
                sender: Sender::Doctor,
                content: "Glad to hear it. Keep taking it with food and let me know if anything changes.",
                timestamp: "2024-12-06T10:02:00Z",
                read: true,
            },
            ChatMessage {
                id: 4,
                conversation_id: 3,
                sender: Sender::Patient,
                content: "Can we reschedule my appointment to next week?",
                timestamp: "2024-12-05T16:45:00Z",
                read: true,
            },
            ChatMessage {
                id: 5,
                conversation_id: 4,
                sender: Sender::Patient,
                content: "I need a refill on my prescription",
                timestamp: "2024-12-04T11:20:00Z",
                read: true,
            },
            ChatMessage {
                id: 6,
                conversation_id: 5,
                sender: Sender::Patient,
                content: "I'm having some side effects from the new medication",
                timestamp: "2024-12-03T13:10:00Z",
                read: true,
            },
        ]
    })
}

/// Messages in one conversation, oldest first.
pub fn messages_by_conversation(conversation_id: u32) -> Vec<&'static ChatMessage> {
    messages()
        .iter()
        .filter(|m| m.conversation_id == conversation_id)
        .collect()
}

/// Total unread messages across all conversations (dashboard badge).
pub fn unread_total() -> u32 {
    conversations().iter().map(|c| c.unread_count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_by_conversation_filters() {
        let thread = messages_by_conversation(2);
        assert_eq!(thread.len(), 2);
        assert_eq!(thread[0].sender, Sender::Patient);
        assert_eq!(thread[1].sender, Sender::Doctor);
    }

    #[test]
    fn unread_total_sums_conversations() {
        assert_eq!(unread_total(), 1);
    }
}
