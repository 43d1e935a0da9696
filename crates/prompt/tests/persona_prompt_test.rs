//! Unit tests for persona_system_prompt and ChatMessage constructors.

use prompt::{persona_system_prompt, ChatMessage, MessageRole};

#[test]
fn test_persona_prompt_embeds_all_facts() {
    let topics = vec!["code".to_string(), "music".to_string()];
    let info = vec![("project".to_string(), "ABC".to_string())];

    let prompt = persona_system_prompt("You are a test bot.", "Alice", "happy", &topics, &info);

    assert!(prompt.starts_with("You are a test bot."));
    assert!(prompt.contains("- Name: Alice"));
    assert!(prompt.contains("- Mood: happy"));
    assert!(prompt.contains("- Topics of interest: code, music"));
    assert!(prompt.contains("- Important notes: project: ABC"));
}

#[test]
fn test_persona_prompt_empty_facts() {
    let prompt = persona_system_prompt("Persona.", "Bob", "neutral", &[], &[]);

    assert!(prompt.contains("- Name: Bob"));
    assert!(prompt.contains("- Mood: neutral"));
    assert!(prompt.contains("- Topics of interest: \n"));
    assert!(prompt.ends_with("- Important notes: "));
}

#[test]
fn test_persona_prompt_joins_multiple_info_entries() {
    let info = vec![
        ("deadline".to_string(), "Friday".to_string()),
        ("project".to_string(), "orbit".to_string()),
    ];
    let prompt = persona_system_prompt("P.", "Eve", "sad", &[], &info);

    assert!(prompt.contains("deadline: Friday, project: orbit"));
}

#[test]
fn test_chat_message_constructors() {
    assert_eq!(ChatMessage::system("s").role, MessageRole::System);
    assert_eq!(ChatMessage::user("u").role, MessageRole::User);
    assert_eq!(ChatMessage::assistant("a").role, MessageRole::Assistant);
    assert_eq!(ChatMessage::user("hello").content, "hello");
}
