pub mod common;
pub mod u508_finance_screening;
