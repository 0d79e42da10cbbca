use anyhow::{anyhow, Result};

const SUPPORTED_SCHEMES: [&str; 3] = ["mysql://", "mariadb://", "sqlite:"];

pub fn validate_database_url(value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("database_url is empty"));
    }
    if !SUPPORTED_SCHEMES
        .iter()
        .any(|scheme| trimmed.starts_with(scheme))
    {
        return Err(anyhow!(
            "database_url must start with one of {}",
            SUPPORTED_SCHEMES.join(", ")
        ));
    }
    Ok(())
}
