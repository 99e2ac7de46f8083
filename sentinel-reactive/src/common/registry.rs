/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::fmt;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::trace;

use crate::common::ComponentId;
use crate::message::Mailbox;
use crate::traits::SentinelMessage;

/// Errors raised by [`MailboxRegistry::register`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The name is taken; the existing mailbox is left in place.
    #[error("a mailbox is already registered for `{0}`")]
    AlreadyRegistered(ComponentId),
}

/// Maps component names to their mailboxes.
///
/// Shared by every actor in a runtime. Names are unique for the life of the
/// registry and entries are never removed, so a name, once resolved, always
/// resolves to the same mailbox.
pub struct MailboxRegistry<M> {
    mailboxes: Arc<DashMap<ComponentId, Mailbox<M>>>,
}

impl<M: SentinelMessage> MailboxRegistry<M> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mailboxes: Arc::new(DashMap::new()),
        }
    }

    /// Registers `mailbox` under `name`.
    pub fn register(
        &self,
        name: impl Into<ComponentId>,
        mailbox: Mailbox<M>,
    ) -> Result<(), RegistryError> {
        match self.mailboxes.entry(name.into()) {
            Entry::Occupied(entry) => Err(RegistryError::AlreadyRegistered(entry.key().clone())),
            Entry::Vacant(entry) => {
                trace!(component = %entry.key(), "mailbox registered");
                entry.insert(mailbox);
                Ok(())
            }
        }
    }

    /// Finds the mailbox registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<Mailbox<M>> {
        self.mailboxes.get(name).map(|entry| entry.value().clone())
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.mailboxes.contains_key(name)
    }

    /// Number of registered mailboxes.
    pub fn len(&self) -> usize {
        self.mailboxes.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.mailboxes.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<ComponentId> {
        let mut names: Vec<_> = self.mailboxes.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }
}

impl<M: SentinelMessage> Default for MailboxRegistry<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Clone for MailboxRegistry<M> {
    fn clone(&self) -> Self {
        Self {
            mailboxes: Arc::clone(&self.mailboxes),
        }
    }
}

impl<M> fmt::Debug for MailboxRegistry<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.mailboxes.iter().map(|e| e.key().clone()))
            .finish()
    }
}
