use std::collections::BTreeSet;
use crate::registry::structs::user_record::UserRecord;

impl UserRecord {
    pub fn new(address: String, files: BTreeSet<String>) -> UserRecord
    {
        UserRecord {
            address,
            files,
            registered: 0,
        }
    }

    pub fn add_files(&mut self, files: BTreeSet<String>)
    {
        self.files.extend(files);
    }

    pub fn remove_files(&mut self, files: &BTreeSet<String>)
    {
        self.files.retain(|file| !files.contains(file));
    }
}
