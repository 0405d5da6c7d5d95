mod bank_statement;
mod common;
