use crate::common::*;

use crate::model::configs::{chart_config::*, dpla_config::*, search_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_server_config);

#[doc = "Function to initialize Server configuration information instances"]
pub fn initialize_server_config() -> TotalConfig {
    info!("initialize_server_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    #[serde(default)]
    pub dpla: DplaConfig,
    pub search: SearchConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

#[doc = "DPLA endpoint config"]
pub fn get_dpla_config_info() -> &'static DplaConfig {
    &TOTAL_CONFIG.dpla
}

#[doc = "Search term and decade range config"]
pub fn get_search_config_info() -> &'static SearchConfig {
    &TOTAL_CONFIG.search
}

#[doc = "Histogram output config"]
pub fn get_chart_config_info() -> &'static ChartConfig {
    &TOTAL_CONFIG.chart
}

impl TotalConfig {
    fn new() -> Self {
        match Self::from_file(&SERVER_CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                let err_msg: &str = "Failed to convert the data from SERVER_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }

    pub fn from_file(file_path: &str) -> anyhow::Result<Self> {
        read_toml_from_file::<TotalConfig>(file_path)
            .with_context(|| format!("[TotalConfig->from_file] cannot load '{}'", file_path))
    }
}
