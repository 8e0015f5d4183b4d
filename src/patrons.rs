pub mod command {
    pub mod login_user_cmd;
    pub mod logout_user_cmd;
    pub mod register_user_cmd;
    pub mod update_profile_cmd;
}
pub mod controller;
pub mod domain;
pub mod dto;
