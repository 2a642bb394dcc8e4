#[derive(PartialEq, Eq, Clone, Debug)]
pub enum SessionState {
    Unbound,
    Bound(String),
}
