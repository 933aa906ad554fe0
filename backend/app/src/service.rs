pub mod derived;
pub mod filter;
pub mod report;
pub mod repository;

pub use repository::DeviceRepository;
