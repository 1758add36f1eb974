pub mod cmd {
    pub const BIN: &str = "save-analyzer";

    pub fn with_short(min_saves: usize) -> String {
        format!("{} --short {}", BIN, min_saves)
    }

    pub fn with_delay(delay: &str) -> String {
        format!("{} --delay {}", BIN, delay)
    }
}
