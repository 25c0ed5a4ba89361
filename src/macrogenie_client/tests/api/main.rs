mod helpers;
mod login;
mod verify_email;
