pub mod device;
pub mod job;
pub mod software_detail;
pub mod software_type;
