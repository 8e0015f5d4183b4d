pub mod core {
    pub mod clock;
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod events;
    pub mod library;
    pub mod repository;
    pub mod session;
}

pub mod utils {
    pub mod date;
    pub mod logging;
}

pub mod books {
    pub mod domain;
    pub mod dto;
    pub mod factory;
    pub mod repository;
}

pub mod users {
    pub mod domain {
        pub mod model;
    }
    pub mod factory;
    pub mod repository;
}

pub mod catalog {
    pub mod command {
        pub mod add_book_cmd;
        pub mod get_book_cmd;
        pub mod list_books_cmd;
        pub mod remove_book_cmd;
        pub mod search_books_cmd;
    }
    pub mod controller;
    pub mod domain;
}

pub mod checkout;

pub mod hold {
    pub mod command {
        pub mod cancel_hold_book_cmd;
        pub mod reserve_book_cmd;
    }
    pub mod controller;
    pub mod domain;
}

pub mod patrons;

pub mod reports {
    pub mod command {
        pub mod genre_report_cmd;
        pub mod overdue_report_cmd;
    }
    pub mod controller;
    pub mod domain;
    pub mod dto;
}

pub mod gateway;
pub mod manager;
pub mod factory;
pub mod console;
