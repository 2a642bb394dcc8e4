use std::collections::btree_map::Entry;
use std::collections::BTreeSet;
use log::{debug, warn};
use crate::registry::enums::registry_error::RegistryError;
use crate::registry::structs::registry::Registry;
use crate::registry::structs::user_record::UserRecord;

impl Registry {
    pub fn new() -> Registry
    {
        Registry::default()
    }

    pub fn len(&self) -> usize
    {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.users.is_empty()
    }

    pub fn get_user(&self, username: &str) -> Option<&UserRecord>
    {
        self.users.get(username)
    }

    pub fn username_taken(&self, username: &str) -> bool
    {
        self.users.contains_key(username)
    }

    #[tracing::instrument(level = "debug")]
    pub fn register(&mut self, username: &str, record: UserRecord) -> Result<(), RegistryError>
    {
        match self.users.entry(username.to_string()) {
            Entry::Vacant(v) => {
                self.sequence += 1;
                let mut record = record;
                record.registered = self.sequence;
                debug!("[REGISTRY] New user {username} at {}", record.address);
                v.insert(record);
                Ok(())
            }
            Entry::Occupied(mut o) => {
                if o.get().address != record.address {
                    warn!("[REGISTRY] User {username} tried to register from another address ({})", record.address);
                    return Err(RegistryError::InvalidUser(username.to_string()));
                }
                o.get_mut().add_files(record.files);
                Ok(())
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    pub fn unregister(&mut self, username: &str, files: &BTreeSet<String>) -> Result<(), RegistryError>
    {
        match self.users.get_mut(username) {
            None => {
                warn!("[REGISTRY] Nonexistent user {username} tried to unregister");
                Err(RegistryError::UserNotFound(username.to_string()))
            }
            Some(record) => {
                record.remove_files(files);
                Ok(())
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    pub fn disconnect(&mut self, username: &str) -> Result<UserRecord, RegistryError>
    {
        match self.users.remove(username) {
            None => {
                warn!("[REGISTRY] Nonexistent user {username} tried to disconnect");
                Err(RegistryError::UserNotFound(username.to_string()))
            }
            Some(record) => Ok(record),
        }
    }

    /// Address of a user announcing `path`. When several users hold the same
    /// path, the one registered first wins.
    #[tracing::instrument(level = "debug")]
    pub fn find_file_owner(&self, path: &str) -> Result<String, RegistryError>
    {
        self.users
            .values()
            .filter(|record| record.files.contains(path))
            .min_by_key(|record| record.registered)
            .map(|record| record.address.clone())
            .ok_or_else(|| RegistryError::FileNotFound(path.to_string()))
    }

    /// Address of `username`, provided that user announced `path`.
    #[tracing::instrument(level = "debug")]
    pub fn address_of_file(&self, username: &str, path: &str) -> Result<String, RegistryError>
    {
        match self.users.get(username) {
            Some(record) if record.files.contains(path) => Ok(record.address.clone()),
            _ => Err(RegistryError::FileNotFound(path.to_string())),
        }
    }

    pub fn list_files(&self) -> BTreeSet<String>
    {
        self.users
            .iter()
            .flat_map(|(username, record)| record.files.iter().map(move |file| format!("{username} : {file}")))
            .collect()
    }

    pub fn list_addresses(&self) -> BTreeSet<String>
    {
        self.users
            .iter()
            .map(|(username, record)| format!("{username} - {}", record.address))
            .collect()
    }
}
