use crate::game::quiz::queue::FilterMode;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    pub filter: FilterMode,
    pub randomize: bool,
    pub instant_check: bool,
    pub nav_color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            filter: FilterMode::All,
            randomize: false,
            instant_check: false,
            nav_color: true,
        }
    }
}
