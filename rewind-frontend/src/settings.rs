#[derive(Debug)]
pub struct Settings {
    pub interactive: bool,
    pub seed: Option<u64>,
    pub show_ids: bool,
    pub startup_keys: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interactive: true,
            seed: None,
            show_ids: true,
            startup_keys: None,
        }
    }
}
