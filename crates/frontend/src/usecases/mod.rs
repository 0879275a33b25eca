pub mod u508_finance_screening;
