pub mod monkey_data_service;

pub use monkey_data_service::MonkeyDataService;
