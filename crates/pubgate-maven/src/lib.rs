//! Maven repository protocol: repository layout, authentication, POM
//! rendering, the publish gate, and artifact upload with checksum sidecars.

pub mod auth;
pub mod gate;
pub mod http;
pub mod pom;
pub mod publish;
pub mod repository;
