//! Fundamental data request parameters

/// Company overview request builder
pub mod overview;
/// Balance sheet request builder
pub mod balance_sheet;

pub use balance_sheet::BalanceSheet;
pub use overview::CompanyOverview;
