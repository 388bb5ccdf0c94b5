pub mod analytics;
pub mod chart;
pub mod ledger;
pub mod settings;
pub mod transaction;
pub mod window;
