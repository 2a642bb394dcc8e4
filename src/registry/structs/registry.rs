use std::collections::BTreeMap;
use crate::registry::structs::user_record::UserRecord;

#[derive(Debug, Default)]
pub struct Registry {
    pub(crate) users: BTreeMap<String, UserRecord>,
    pub(crate) sequence: u64,
}
