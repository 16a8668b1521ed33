use anyhow::Result;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::output::{Message, Presenter, Screen};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Entry {
    Screen(Screen),
    Message(Message),
}

#[derive(Clone, Default)]
pub struct MockPresenter {
    entries: Arc<RwLock<Vec<Entry>>>,
}

impl MockPresenter {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&self) -> Vec<Entry> {
        std::mem::replace(&mut *self.entries.write(), Vec::new())
    }

    pub fn last_screen(&self) -> Option<Screen> {
        self.entries.read().iter().rev().find_map(|entry| match entry {
            Entry::Screen(screen) => Some(screen.clone()),
            Entry::Message(_) => None,
        })
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.entries
            .read()
            .iter()
            .any(|entry| *entry == Entry::Message(message.clone()))
    }
}

impl Presenter for MockPresenter {
    fn render(&mut self, screen: &Screen) -> Result<()> {
        self.entries.write().push(Entry::Screen(screen.clone()));
        Ok(())
    }

    fn say(&mut self, message: &Message) -> Result<()> {
        self.entries.write().push(Entry::Message(message.clone()));
        Ok(())
    }
}
