pub mod ops_configure;
pub mod ops_plan;
pub mod ops_pom;
pub mod ops_publish;
pub mod ops_status;
pub mod task;
