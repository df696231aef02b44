//! Observer Pattern
//! A channel notifies every current subscriber when it uploads a video.
//!
//! Run with: cargo run --bin observer

use std::io::{self, Write};

use crate::demo::DemoContext;
use crate::error;

pub trait Subscriber {
    fn update(&self, channel: &str, video_title: &str, out: &mut dyn Write) -> io::Result<()>;
}

pub struct UserSubscriber {
    name: String,
}

impl UserSubscriber {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Subscriber for UserSubscriber {
    fn update(&self, channel: &str, video_title: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "{} got notification: {} uploaded '{}'",
            self.name, channel, video_title
        )
    }
}

/// Returned by `subscribe`, handed back to `unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Subject.
pub struct Channel {
    name: String,
    subscribers: Vec<(SubscriptionId, Box<dyn Subscriber>)>,
    next_id: u64,
}

impl Channel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn subscribe(&mut self, subscriber: impl Subscriber + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        before != self.subscribers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn upload_video(&self, title: &str, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "\nChannel '{}' uploaded: {}", self.name, title)?;
        self.notify_subscribers(title, out)
    }

    fn notify_subscribers(&self, title: &str, out: &mut dyn Write) -> io::Result<()> {
        for (_, subscriber) in &self.subscribers {
            subscriber.update(&self.name, title, out)?;
        }
        Ok(())
    }
}

pub fn run(ctx: &mut DemoContext<'_>) -> error::Result<()> {
    let mut channel = Channel::new("Mohit Tech");

    channel.subscribe(UserSubscriber::new("Aman"));
    let riya = channel.subscribe(UserSubscriber::new("Riya"));
    channel.subscribe(UserSubscriber::new("Jay"));

    channel.upload_video("Observer Pattern in 5 minutes", ctx.out)?;

    channel.unsubscribe(riya);

    channel.upload_video("Factory vs Builder explained", ctx.out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::capture;

    #[test]
    fn test_unsubscribe_unknown_id() {
        let mut channel = Channel::new("c");
        let id = channel.subscribe(UserSubscriber::new("a"));
        assert!(channel.unsubscribe(id));
        assert!(!channel.unsubscribe(id));
        assert_eq!(channel.subscriber_count(), 0);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut channel = Channel::new("c");
        let first = channel.subscribe(UserSubscriber::new("a"));
        channel.unsubscribe(first);
        let second = channel.subscribe(UserSubscriber::new("b"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_upload_without_subscribers() {
        let channel = Channel::new("Quiet");
        let mut buf = Vec::new();
        channel.upload_video("t", &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\nChannel 'Quiet' uploaded: t\n");
    }

    #[test]
    fn test_transcript() {
        assert_eq!(
            capture(run, ".").unwrap(),
            "\n\
             Channel 'Mohit Tech' uploaded: Observer Pattern in 5 minutes\n\
             Aman got notification: Mohit Tech uploaded 'Observer Pattern in 5 minutes'\n\
             Riya got notification: Mohit Tech uploaded 'Observer Pattern in 5 minutes'\n\
             Jay got notification: Mohit Tech uploaded 'Observer Pattern in 5 minutes'\n\
             \n\
             Channel 'Mohit Tech' uploaded: Factory vs Builder explained\n\
             Aman got notification: Mohit Tech uploaded 'Factory vs Builder explained'\n\
             Jay got notification: Mohit Tech uploaded 'Factory vs Builder explained'\n"
        );
    }
}
