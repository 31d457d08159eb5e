pub mod fund_api;

pub use fund_api::HttpFundApi;
