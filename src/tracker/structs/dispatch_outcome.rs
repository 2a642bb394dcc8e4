use crate::codec::structs::reply::Reply;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct DispatchOutcome {
    pub reply: Reply,
    pub close_connection: bool,
}
