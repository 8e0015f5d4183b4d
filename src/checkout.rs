pub mod command {
    pub mod checkout_book_cmd;
    pub mod return_book_cmd;
}
pub mod controller;
pub mod domain;
