pub(crate) mod game;
pub(crate) mod login;
