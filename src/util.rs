use serde::{Deserialize, Serialize};
use std::env;

#[derive(Serialize, Deserialize, Debug)]
pub struct ResponseMessage {
    pub message: String,
}

impl ResponseMessage {
    pub fn new(message: impl Into<String>) -> Self {
        ResponseMessage {
            message: message.into(),
        }
    }
}

pub fn check_for_necessary_env() -> std::io::Result<()> {
    for key in ["JWT_SECRET"] {
        if env::var(key).is_err() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{key} must be set"),
            ));
        }
    }
    Ok(())
}
