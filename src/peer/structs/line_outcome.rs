#[derive(PartialEq, Eq, Clone, Debug)]
pub struct LineOutcome {
    pub output: String,
    pub keep_running: bool,
}
