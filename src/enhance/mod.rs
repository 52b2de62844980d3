pub mod domain;
pub mod orchestration;
pub mod services;
pub mod types;
