use crate::utils::error::{MdNoteError, Result};
use std::net::SocketAddr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(MdNoteError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MdNoteError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_socket_addr(field_name: &str, address: &str) -> Result<SocketAddr> {
    address
        .parse::<SocketAddr>()
        .map_err(|e| MdNoteError::InvalidConfigValue {
            field: field_name.to_string(),
            value: address.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}
