pub mod category_service;
pub mod forecast_service;
pub mod summary_service;

pub use category_service::CategoryService;
pub use forecast_service::ForecastService;
pub use summary_service::SummaryService;
