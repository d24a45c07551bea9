// Widget rendering functions, one module per panel or overlay.

pub mod appointments;
pub mod consultation;
pub mod dashboard;
pub mod help_bar;
pub mod messages;
pub mod patients;
pub mod prescriptions;
pub mod products;
pub mod quit_confirm;
pub mod rx_picker;
pub mod status_bar;
pub mod toast;
