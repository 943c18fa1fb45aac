pub mod login;
pub mod whoami;
