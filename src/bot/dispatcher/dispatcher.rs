use std::sync::Arc;

use tracing::{debug, error};

use crate::bot::{chat_event::chat_event::ChatEvent, handler::handler::ChatClient, Bot};

/// The text a message is dispatched on.
pub fn first_token(message: &str) -> Option<&str> {
    message.split_whitespace().next()
}

/// Runs the command named by the first token of `event`, if one is registered.
///
/// Returns whether a handler ran. Handler errors are logged here and go no further.
pub async fn dispatch_message(bot: &Arc<Bot>, client: Arc<dyn ChatClient>, event: ChatEvent) -> bool {
    let Some(cmd_name) = first_token(&event.message) else {
        return false;
    };

    let Some(cmd) = bot.registry.lookup(cmd_name).await else {
        return false;
    };

    debug!("Dispatching {} from {} in channel {}", cmd.name, event.user, event.channel_id);
    if let Err(e) = cmd.handler.execute(bot.clone(), client, event).await {
        error!("Command {} ({}) failed: {e}", cmd.name, cmd.module);
    }

    true
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::bot::{
        commands::{commands::Command, Module},
        handler::testing::{event, test_bot, RecordingClient},
        state::def::BotError,
    };

    fn counting(name: &str, hits: Arc<AtomicUsize>) -> Command {
        Command::new(name, "counts calls", move |_, _, _| {
            let hits = hits.clone();
            Box::pin(async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
        })
    }

    #[test]
    fn first_token_skips_leading_whitespace() {
        assert_eq!(first_token("  help me"), Some("help"));
        assert_eq!(first_token("   "), None);
        assert_eq!(first_token(""), None);
    }

    #[tokio::test]
    async fn alias_runs_the_same_handler() {
        let bot = test_bot();
        let hits = Arc::new(AtomicUsize::new(0));
        bot.register_module(Module::new("m").command(counting("setrole", hits.clone()).alias("sr"))).await.unwrap();
        let client = Arc::new(RecordingClient::default());

        assert!(dispatch_message(&bot, client.clone(), event("setrole <@2> Mod")).await);
        assert!(dispatch_message(&bot, client.clone(), event("sr <@2> Mod")).await);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn unmatched_messages_do_nothing() {
        let bot = test_bot();
        let hits = Arc::new(AtomicUsize::new(0));
        bot.register_module(Module::new("m").command(counting("setrole", hits.clone()))).await.unwrap();
        let client = Arc::new(RecordingClient::default());

        assert!(!dispatch_message(&bot, client.clone(), event("hello setrole")).await);
        assert!(!dispatch_message(&bot, client.clone(), event("SETROLE")).await);
        assert!(!dispatch_message(&bot, client.clone(), event("")).await);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(client.replies().is_empty());
    }

    #[tokio::test]
    async fn handler_errors_stay_in_the_dispatcher() {
        let bot = test_bot();
        let hits = Arc::new(AtomicUsize::new(0));
        let failing = Command::new("fail", "always fails", |_, _, _| {
            Box::pin(async { Err(BotError::Custom("boom".into())) })
        });
        bot.register_module(Module::new("m").command(failing).command(counting("ok", hits.clone()))).await.unwrap();
        let client = Arc::new(RecordingClient::default());

        assert!(dispatch_message(&bot, client.clone(), event("fail")).await);
        assert!(dispatch_message(&bot, client.clone(), event("ok")).await);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
