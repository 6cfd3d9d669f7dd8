use crate::common::*;

#[doc = r#"
    Reads an environment variable and treats its absence as a fatal error.

    The required settings of this program live in the environment (or in the `.env`
    file loaded at startup). Without them nothing can run, so the process logs the
    missing key and panics immediately.

    # Arguments
    * `key` - environment variable name

    # Returns
    * `String` - the variable's value

    # Panics
    When the variable is not set
"#]
fn get_env_or_panic(key: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg: String = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = r#"
    Path of the TOML file holding the DPLA endpoint, the search range and the chart
    settings. Initialized on first access and cached afterwards.

    # Panics
    When `SERVER_CONFIG_PATH` is not set
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("SERVER_CONFIG_PATH"));

#[doc = r#"
    DPLA API key. It is issued out of band by the DPLA registration endpoint (the key
    arrives by email) and must be exported as `DPLA_API_KEY` before the program starts.

    # Panics
    When `DPLA_API_KEY` is not set
"#]
pub static DPLA_API_KEY: once_lazy<String> = once_lazy::new(|| get_env_or_panic("DPLA_API_KEY"));

#[doc = "Optional override of the search term configured in `SERVER_CONFIG_PATH`"]
pub static SEARCH_TERM_OVERRIDE: once_lazy<Option<String>> = once_lazy::new(|| {
    env::var("SEARCH_TERM")
        .ok()
        .filter(|term| !term.trim().is_empty())
});
