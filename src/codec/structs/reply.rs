#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Reply {
    pub lines: Vec<String>,
}
