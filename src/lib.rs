#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod auth_store;
pub mod event;
pub mod profile;
pub mod session;
pub mod settings;
pub mod util;
