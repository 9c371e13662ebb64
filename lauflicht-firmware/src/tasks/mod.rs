// Task-Modul: Enthält alle Embassy Tasks
//
// Der Lauflicht-Task tickt periodisch, der Stopp-Task wartet auf den
// Taster und meldet das Herunterfahren an main.

pub mod chaser;
pub mod stop_button;

// Re-export Tasks für einfachen Import
pub use chaser::chaser_task;
pub use stop_button::stop_button_task;
