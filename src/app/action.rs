#[derive(Debug, PartialEq)]
pub enum Action {
    StartRun,
    ResetArray,
    SetDelay { delay_ms: u64 },
    SaveConfig,
    Quit,
}
