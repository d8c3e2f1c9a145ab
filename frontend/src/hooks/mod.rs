pub mod use_finance_form;
