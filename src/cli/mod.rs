pub mod demo;
pub mod ledger;
pub mod prices;
pub mod report;
pub mod setup;
pub mod ui;
