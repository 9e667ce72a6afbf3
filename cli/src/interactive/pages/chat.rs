//! Chat page component
//!
//! The conversational view mounted at `/`. Messages are kept locally;
//! a line of the form `:go <path>` navigates instead of being sent.

use crate::interactive::router::Navigator;
use iocraft::prelude::*;

/// What a submitted input line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ChatCommand {
    Empty,
    Go(String),
    Message(String),
}

impl ChatCommand {
    pub(crate) fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            ChatCommand::Empty
        } else if line == ":go" {
            ChatCommand::Go("/".to_string())
        } else if let Some(path) = line.strip_prefix(":go ") {
            ChatCommand::Go(path.trim().to_string())
        } else {
            ChatCommand::Message(line.to_string())
        }
    }
}

/// Properties for the chat page component
#[derive(Default, Props)]
pub struct ChatPageProps {
    pub navigator: Option<Navigator>,
    pub description: Option<String>,
}

/// Chat page: message list with a single-line input at the bottom
#[component]
pub fn ChatPage(mut hooks: Hooks, props: &ChatPageProps) -> impl Into<AnyElement<'static>> {
    let input = hooks.use_state(String::new);
    let messages = hooks.use_state(Vec::<String>::new);

    hooks.use_terminal_events({
        let mut input = input;
        let mut messages = messages;
        let mut navigator = props.navigator.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) if kind != KeyEventKind::Release => match code {
                KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                    input.write().push(c);
                }
                KeyCode::Backspace => {
                    input.write().pop();
                }
                KeyCode::Enter => {
                    let line = input.read().clone();
                    input.set(String::new());

                    match ChatCommand::parse(&line) {
                        ChatCommand::Empty => {}
                        ChatCommand::Go(path) => {
                            if let Some(navigator) = navigator.as_mut() {
                                navigator.push(&path);
                            }
                        }
                        ChatCommand::Message(text) => messages.write().push(text),
                    }
                }
                _ => {}
            },
            _ => {}
        }
    });

    let is_empty = messages.read().is_empty();

    element! {
        View(
            key: "chat-page",
            flex_direction: FlexDirection::Column,
            width: 100pct,
            height: 100pct,
            padding: 1,
        ) {
            Text(content: "Chat", weight: Weight::Bold, color: Color::Cyan)
            #(props.description.clone().map(|description| element! {
                Text(content: description, color: Color::Grey)
            }))

            View(
                flex_grow: 1.0,
                flex_direction: FlexDirection::Column,
                margin_top: 1,
            ) {
                #(messages.read().iter().enumerate().map(|(i, message)| {
                    element! {
                        Text(
                            key: format!("message-{}", i),
                            content: format!("> {}", message),
                            color: Color::White,
                        )
                    }
                }).collect::<Vec<_>>())
            }

            #(if is_empty {
                Some(element! {
                    Text(
                        content: "Type a message and press Enter, or :go /dashboard to navigate",
                        color: Color::Grey,
                    )
                })
            } else {
                None
            })

            View(
                border_style: BorderStyle::Round,
                border_color: Color::Grey,
                width: 100pct,
                padding_left: 1,
            ) {
                Text(content: format!("{}█", *input.read()), color: Color::White)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chat_command() {
        assert_eq!(ChatCommand::parse("   "), ChatCommand::Empty);
        assert_eq!(
            ChatCommand::parse(":go /dashboard"),
            ChatCommand::Go("/dashboard".to_string())
        );
        assert_eq!(ChatCommand::parse(":go"), ChatCommand::Go("/".to_string()));
        assert_eq!(
            ChatCommand::parse(" how many engineers? "),
            ChatCommand::Message("how many engineers?".to_string())
        );
        assert_eq!(
            ChatCommand::parse(":gone"),
            ChatCommand::Message(":gone".to_string())
        );
    }
}
