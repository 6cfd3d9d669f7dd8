use crate::common::*;

#[doc = r#"
    Reads a TOML file and deserializes it into `T`.

    # Arguments
    * `file_path` - path of the TOML file

    # Returns
    * `Result<T, anyhow::Error>` - the parsed struct

    # Errors
    - the file is missing or unreadable
    - the content is not valid TOML or does not match `T`
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = std::fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = "Parses a raw response body as JSON"]
pub fn parse_json_body(body: &str) -> Result<Value, anyhow::Error> {
    serde_json::from_str::<Value>(body).map_err(|err| {
        anyhow!(
            "[Error][parse_json_body()] Failed to parse response body as JSON: {}",
            err
        )
    })
}
