use std::collections::BTreeSet;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct UserRecord {
    pub address: String,
    pub files: BTreeSet<String>,
    /// Registration sequence number, assigned by the registry on first insert.
    pub registered: u64,
}
