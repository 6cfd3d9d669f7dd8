use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct ChartConfig {
    pub output_dir: String,
    #[serde(default = "default_file_extension")]
    pub file_extension: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /* gap between neighbouring bars, in pixels */
    #[serde(default = "default_bar_margin")]
    pub bar_margin: u32,
    #[serde(default = "default_bar_color")]
    pub bar_color: [u8; 3],
}

fn default_file_extension() -> String {
    "png".to_string()
}

fn default_width() -> u32 {
    1400
}

fn default_height() -> u32 {
    700
}

fn default_bar_margin() -> u32 {
    6
}

fn default_bar_color() -> [u8; 3] {
    [0, 191, 255]
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output_dir: "./pics".to_string(),
            file_extension: default_file_extension(),
            width: default_width(),
            height: default_height(),
            bar_margin: default_bar_margin(),
            bar_color: default_bar_color(),
        }
    }
}
