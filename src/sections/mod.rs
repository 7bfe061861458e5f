// Landing page sections

/// Company name used across the page (single source of truth).
pub const COMPANY: &str = "ЭЛИТ СТРОЙ";

mod about;
mod calculator;
mod console_branding;
mod contact;
mod footer;
mod hero;
mod icons;
mod nav;
mod projects;
mod quiz;
mod reviews;

pub use about::About;
pub use calculator::Calculator;
pub use console_branding::ConsoleBranding;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use projects::Projects;
pub use quiz::Quiz;
pub use reviews::Reviews;
