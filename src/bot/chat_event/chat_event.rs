use core::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:<@!?(\d+)>|(\d+))$").unwrap());

#[derive(Debug, Clone)]
pub struct ChatEvent {
    pub channel_id: u64,
    pub user: ChatUser,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ChatUser {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleInfo {
    pub id: u64,
    pub name: String,
}

impl ChatEvent {
    pub fn new(channel_id: u64, user: ChatUser, message: impl Into<String>) -> Self {
        Self { channel_id, user, message: message.into() }
    }
}

impl fmt::Display for ChatUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Extracts the user id out of a `<@id>` / `<@!id>` mention, or a bare id.
pub fn parse_mention(mention: &str) -> Option<u64> {
    let caps = MENTION.captures(mention.trim())?;
    let id: u64 = caps.get(1).or_else(|| caps.get(2))?.as_str().parse().ok()?;
    (id != 0).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mention_forms() {
        assert_eq!(parse_mention("<@1234>"), Some(1234));
        assert_eq!(parse_mention("<@!1234>"), Some(1234));
        assert_eq!(parse_mention("1234"), Some(1234));
    }

    #[test]
    fn rejects_non_mentions() {
        assert_eq!(parse_mention("<#1234>"), None);
        assert_eq!(parse_mention("@someone"), None);
        assert_eq!(parse_mention("<@12a4>"), None);
        assert_eq!(parse_mention("<@99999999999999999999999>"), None);
        assert_eq!(parse_mention("<@0>"), None);
    }
}
